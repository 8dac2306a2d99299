//! Discovery Port
//!
//! The engine never inspects types itself. A discovery source hands it a
//! list of [`Component`]s: a [`TypeDescriptor`] plus the constructor for that
//! type. Where the list comes from is the host's concern; two sources are
//! provided here.
//!
//! ## Static listing
//!
//! ```ignore
//! let discovery = StaticDiscovery::new()
//!     .with_base(a_repository_descriptor(), || Arc::new(ARepository) as Arc<dyn Repository>)
//!     .with_decorator(logging_descriptor(), |_, inner| Arc::new(Logging::new(inner)) as Arc<dyn Repository>);
//! ```
//!
//! ## Link-time registration (linkme)
//!
//! ```ignore
//! #[linkme::distributed_slice]
//! pub static REPOSITORIES: [ComponentEntry<dyn Repository>] = [..];
//!
//! #[linkme::distributed_slice(REPOSITORIES)]
//! static A_REPOSITORY: ComponentEntry<dyn Repository> = ComponentEntry {
//!     describe: a_repository_descriptor,
//!     construct: EntryConstruct::Base(|| Arc::new(ARepository)),
//! };
//!
//! let discovery = SliceDiscovery::new(&REPOSITORIES);
//! ```

use crate::chain::{BaseFactory, DecoratorFactory};
use std::sync::Arc;
use veneer_domain::{CapabilitySignature, TypeDescriptor};

/// How a discovered type is constructed
pub enum Construct<P: ?Sized> {
    /// Terminal provider
    Base(BaseFactory<P>),
    /// Wrapper around the provider currently installed
    Decorator(DecoratorFactory<P>),
}

impl<P: ?Sized> Clone for Construct<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Base(factory) => Self::Base(Arc::clone(factory)),
            Self::Decorator(factory) => Self::Decorator(Arc::clone(factory)),
        }
    }
}

/// A discovered type: its static facts and its constructor
pub struct Component<P: ?Sized> {
    descriptor: TypeDescriptor,
    construct: Construct<P>,
}

impl<P: ?Sized> Component<P> {
    /// Pair a descriptor with a constructor
    pub fn new(descriptor: TypeDescriptor, construct: Construct<P>) -> Self {
        Self {
            descriptor,
            construct,
        }
    }

    /// Component constructed by a base factory
    pub fn base<F>(descriptor: TypeDescriptor, factory: F) -> Self
    where
        F: Fn() -> Arc<P> + Send + Sync + 'static,
    {
        Self::new(descriptor, Construct::Base(Arc::new(factory)))
    }

    /// Component constructed by wrapping an inner provider
    pub fn decorator<F>(descriptor: TypeDescriptor, factory: F) -> Self
    where
        F: Fn(&CapabilitySignature, Arc<P>) -> Arc<P> + Send + Sync + 'static,
    {
        Self::new(descriptor, Construct::Decorator(Arc::new(factory)))
    }

    /// Static facts about the type
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Constructor for the type
    pub fn construct(&self) -> &Construct<P> {
        &self.construct
    }
}

impl<P: ?Sized> Clone for Component<P> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            construct: self.construct.clone(),
        }
    }
}

impl<P: ?Sized> std::fmt::Debug for Component<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.construct {
            Construct::Base(_) => "base",
            Construct::Decorator(_) => "decorator",
        };
        f.debug_struct("Component")
            .field("descriptor", &self.descriptor)
            .field("construct", &kind)
            .finish()
    }
}

/// Source of discovered components
///
/// Order is significant: components are registered in the order returned.
pub trait Discovery<P: ?Sized> {
    /// Every component this source knows about
    fn discover(&self) -> Vec<Component<P>>;
}

/// Manually listed components
pub struct StaticDiscovery<P: ?Sized> {
    components: Vec<Component<P>>,
}

impl<P: ?Sized> StaticDiscovery<P> {
    /// Create an empty listing
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append a component
    #[must_use]
    pub fn with(mut self, component: Component<P>) -> Self {
        self.components.push(component);
        self
    }

    /// Append a base component
    #[must_use]
    pub fn with_base<F>(self, descriptor: TypeDescriptor, factory: F) -> Self
    where
        F: Fn() -> Arc<P> + Send + Sync + 'static,
    {
        self.with(Component::base(descriptor, factory))
    }

    /// Append a decorator component
    #[must_use]
    pub fn with_decorator<F>(self, descriptor: TypeDescriptor, factory: F) -> Self
    where
        F: Fn(&CapabilitySignature, Arc<P>) -> Arc<P> + Send + Sync + 'static,
    {
        self.with(Component::decorator(descriptor, factory))
    }

    /// Number of listed components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is listed
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<P: ?Sized> Default for StaticDiscovery<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Discovery<P> for StaticDiscovery<P> {
    fn discover(&self) -> Vec<Component<P>> {
        self.components.clone()
    }
}

// ============================================================================
// Link-time registration
// ============================================================================

/// Constructor of a link-time registered component
pub enum EntryConstruct<P: ?Sized + 'static> {
    /// Terminal provider
    Base(fn() -> Arc<P>),
    /// Wrapper around the provider currently installed
    Decorator(fn(&CapabilitySignature, Arc<P>) -> Arc<P>),
}

/// Component entry for a `#[linkme::distributed_slice]`
///
/// Only `fn` pointers are stored so the entry can live in a `static`.
pub struct ComponentEntry<P: ?Sized + 'static> {
    /// Produces the type's descriptor
    pub describe: fn() -> TypeDescriptor,
    /// Constructs the type
    pub construct: EntryConstruct<P>,
}

impl<P: ?Sized + 'static> ComponentEntry<P> {
    /// Materialize the entry into a component
    pub fn to_component(&self) -> Component<P> {
        let descriptor = (self.describe)();
        match self.construct {
            EntryConstruct::Base(factory) => Component::base(descriptor, factory),
            EntryConstruct::Decorator(factory) => Component::decorator(descriptor, factory),
        }
    }
}

/// Discovery over a link-time registered slice
pub struct SliceDiscovery<P: ?Sized + 'static> {
    entries: &'static [ComponentEntry<P>],
}

impl<P: ?Sized + 'static> SliceDiscovery<P> {
    /// Wrap a slice of entries
    pub fn new(entries: &'static [ComponentEntry<P>]) -> Self {
        Self { entries }
    }

    /// Names of every registered type, in slice order
    pub fn type_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| (entry.describe)().name().to_string())
            .collect()
    }
}

impl<P: ?Sized + 'static> Discovery<P> for SliceDiscovery<P> {
    fn discover(&self) -> Vec<Component<P>> {
        self.entries.iter().map(ComponentEntry::to_component).collect()
    }
}
