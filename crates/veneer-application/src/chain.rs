//! Decorator Chain Builder
//!
//! Purely structural: a [`Chain`] holds one terminal [`BaseProvider`] and the
//! decorator layers installed over it. Invariants about *when* a layer may be
//! installed are enforced by [`crate::registry::Registry`].
//!
//! ## Ordering
//!
//! Layers are folded over the base in installation order, so the first
//! installed layer wraps the base directly and the most recently installed
//! layer is outermost:
//!
//! ```text
//! install: D1, D2, D3
//! call:    D3 ─► D2 ─► D1 ─► base
//! ```

use std::sync::Arc;
use veneer_domain::{CapabilitySignature, MarkerKind, TypeName};

/// Produces the terminal provider of a chain
pub type BaseFactory<P> = Arc<dyn Fn() -> Arc<P> + Send + Sync>;

/// Wraps the provider currently installed for a capability
///
/// Receives the capability being resolved so that template-bound decorators
/// know which specialization they are wrapping.
pub type DecoratorFactory<P> = Arc<dyn Fn(&CapabilitySignature, Arc<P>) -> Arc<P> + Send + Sync>;

/// Terminal, non-decorating provider of a capability
pub struct BaseProvider<P: ?Sized> {
    name: TypeName,
    factory: BaseFactory<P>,
}

impl<P: ?Sized> BaseProvider<P> {
    /// Create a base provider from a factory closure
    pub fn new<F>(name: impl Into<TypeName>, factory: F) -> Self
    where
        F: Fn() -> Arc<P> + Send + Sync + 'static,
    {
        Self::from_factory(name, Arc::new(factory))
    }

    /// Create a base provider from a shared factory
    pub fn from_factory(name: impl Into<TypeName>, factory: BaseFactory<P>) -> Self {
        Self {
            name: name.into(),
            factory,
        }
    }

    /// Implementation type name
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Produce a provider instance
    pub fn provide(&self) -> Arc<P> {
        (self.factory)()
    }
}

impl<P: ?Sized + Send + Sync + 'static> BaseProvider<P> {
    /// Base provider that hands out one shared instance
    pub fn instance(name: impl Into<TypeName>, provider: Arc<P>) -> Self {
        Self::new(name, move || Arc::clone(&provider))
    }
}

impl<P: ?Sized> Clone for BaseProvider<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<P: ?Sized> std::fmt::Debug for BaseProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One decorator installed over a capability
pub struct DecoratorLayer<P: ?Sized> {
    name: TypeName,
    marker: MarkerKind,
    sequence: u64,
    factory: DecoratorFactory<P>,
}

impl<P: ?Sized> DecoratorLayer<P> {
    /// Create a layer from a wrapping closure
    pub fn new<F>(name: impl Into<TypeName>, marker: MarkerKind, factory: F) -> Self
    where
        F: Fn(&CapabilitySignature, Arc<P>) -> Arc<P> + Send + Sync + 'static,
    {
        Self::from_factory(name, marker, Arc::new(factory))
    }

    /// Create a layer from a shared factory
    pub fn from_factory(
        name: impl Into<TypeName>,
        marker: MarkerKind,
        factory: DecoratorFactory<P>,
    ) -> Self {
        Self {
            name: name.into(),
            marker,
            sequence: 0,
            factory,
        }
    }

    /// Decorator type name
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Marker the decorator type carries
    pub fn marker(&self) -> &MarkerKind {
        &self.marker
    }

    /// Position in the registry-wide installation order
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(crate) fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Wrap `inner` for `capability`
    pub fn wrap(&self, capability: &CapabilitySignature, inner: Arc<P>) -> Arc<P> {
        (self.factory)(capability, inner)
    }
}

impl<P: ?Sized> Clone for DecoratorLayer<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            marker: self.marker.clone(),
            sequence: self.sequence,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<P: ?Sized> std::fmt::Debug for DecoratorLayer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorLayer")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

/// Base provider plus the layers installed directly over it
pub struct Chain<P: ?Sized> {
    base: BaseProvider<P>,
    layers: Vec<DecoratorLayer<P>>,
}

impl<P: ?Sized> Chain<P> {
    /// Start a chain with no layers
    pub fn new(base: BaseProvider<P>) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Terminal provider
    pub fn base(&self) -> &BaseProvider<P> {
        &self.base
    }

    /// Layers in installation order (innermost first)
    pub fn layers(&self) -> &[DecoratorLayer<P>] {
        &self.layers
    }

    /// Install `layer` as the new outermost layer of this chain
    pub fn wrap(&mut self, layer: DecoratorLayer<P>) {
        self.layers.push(layer);
    }

    /// Build the callable chain
    ///
    /// `shared` are template-bound layers that also apply to this capability;
    /// they are interleaved with the chain's own layers by sequence.
    pub fn materialize<'a, I>(&'a self, capability: &CapabilitySignature, shared: I) -> Arc<P>
    where
        I: IntoIterator<Item = &'a DecoratorLayer<P>>,
    {
        self.ordered(shared)
            .into_iter()
            .fold(self.base.provide(), |inner, layer| layer.wrap(capability, inner))
    }

    /// Names along the call path, outermost first, ending with the base
    pub fn invocation_order<'a, I>(&'a self, shared: I) -> Vec<TypeName>
    where
        I: IntoIterator<Item = &'a DecoratorLayer<P>>,
    {
        let mut names: Vec<TypeName> = self
            .ordered(shared)
            .into_iter()
            .rev()
            .map(|layer| layer.name().clone())
            .collect();
        names.push(self.base.name().clone());
        names
    }

    fn ordered<'a, I>(&'a self, shared: I) -> Vec<&'a DecoratorLayer<P>>
    where
        I: IntoIterator<Item = &'a DecoratorLayer<P>>,
    {
        let mut layers: Vec<&DecoratorLayer<P>> = self.layers.iter().chain(shared).collect();
        layers.sort_by_key(|layer| layer.sequence());
        layers
    }
}

impl<P: ?Sized> std::fmt::Debug for Chain<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("base", &self.base)
            .field("layers", &self.layers)
            .finish()
    }
}
