//! Provider Registry
//!
//! The only stateful unit of the engine. Maps each closed capability to its
//! [`RegistryEntry`] and keeps template-bound decorators separately so they
//! also reach specializations registered after them.
//!
//! ## Invariants
//!
//! - At most one base provider per capability; a second install fails with
//!   [`Error::DuplicateRegistration`] and leaves the existing chain intact.
//! - A closed-capability decorator requires an installed base provider.
//! - Entries are never removed.
//!
//! ## Concurrency
//!
//! Installation takes `&mut self`, so the borrow checker serializes the
//! registration phase. Once composed the registry is only read: `resolve`
//! takes `&self` and the registry is `Send + Sync` whenever `P` is, so it can
//! be shared behind an `Arc` across threads.

use crate::chain::{BaseProvider, Chain, DecoratorLayer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use veneer_domain::error::{Error, Result};
use veneer_domain::{CapabilitySignature, TemplateId, TypeName};

/// One capability and the chain serving it
pub struct RegistryEntry<P: ?Sized> {
    capability: CapabilitySignature,
    chain: Chain<P>,
}

impl<P: ?Sized> RegistryEntry<P> {
    /// Capability this entry serves
    pub fn capability(&self) -> &CapabilitySignature {
        &self.capability
    }

    /// Base provider and capability-bound layers
    pub fn chain(&self) -> &Chain<P> {
        &self.chain
    }
}

/// Capability-to-chain map
pub struct Registry<P: ?Sized> {
    entries: BTreeMap<CapabilitySignature, RegistryEntry<P>>,
    template_layers: Vec<(TemplateId, DecoratorLayer<P>)>,
    next_sequence: u64,
}

impl<P: ?Sized> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Registry<P> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            template_layers: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Install the terminal provider for `capability`
    pub fn install_base(
        &mut self,
        capability: CapabilitySignature,
        provider: BaseProvider<P>,
    ) -> Result<()> {
        if capability.is_open() {
            return Err(Error::configuration(format!(
                "cannot install base provider {} under open template {capability}",
                provider.name()
            )));
        }
        if self.entries.contains_key(&capability) {
            return Err(Error::duplicate(capability));
        }

        info!(capability = %capability, provider = %provider.name(), "Installed base provider");
        self.entries.insert(
            capability.clone(),
            RegistryEntry {
                capability,
                chain: Chain::new(provider),
            },
        );
        Ok(())
    }

    /// Layer a decorator over `capability`
    ///
    /// An open `capability` binds the layer to its template: it applies to
    /// every specialization, including ones installed later.
    pub fn install_decorator(
        &mut self,
        capability: &CapabilitySignature,
        layer: DecoratorLayer<P>,
    ) -> Result<()> {
        if capability.is_open() {
            let layer = layer.with_sequence(self.take_sequence());
            info!(
                template = %capability.template(),
                decorator = %layer.name(),
                sequence = layer.sequence(),
                "Installed template decorator"
            );
            self.template_layers
                .push((capability.template().clone(), layer));
            return Ok(());
        }

        if !self.entries.contains_key(capability) {
            return Err(Error::configuration(format!(
                "cannot decorate {capability} with {}: no base provider installed",
                layer.name()
            )));
        }
        let layer = layer.with_sequence(self.take_sequence());
        info!(
            capability = %capability,
            decorator = %layer.name(),
            sequence = layer.sequence(),
            "Installed decorator"
        );
        if let Some(entry) = self.entries.get_mut(capability) {
            entry.chain.wrap(layer);
        }
        Ok(())
    }

    /// Materialize the chain for `capability`
    pub fn resolve(&self, capability: &CapabilitySignature) -> Result<Arc<P>> {
        let entry = self
            .entries
            .get(capability)
            .ok_or_else(|| Error::unresolved(capability.clone()))?;
        debug!(capability = %capability, "Resolving provider chain");
        Ok(entry
            .chain
            .materialize(capability, self.template_layers_for(capability)))
    }

    /// Whether a base provider is installed for `capability`
    pub fn contains(&self, capability: &CapabilitySignature) -> bool {
        self.entries.contains_key(capability)
    }

    /// Entry for `capability`
    pub fn entry(&self, capability: &CapabilitySignature) -> Option<&RegistryEntry<P>> {
        self.entries.get(capability)
    }

    /// Registered capabilities in sorted order
    pub fn capabilities(&self) -> impl Iterator<Item = &CapabilitySignature> {
        self.entries.keys()
    }

    /// Template-bound decorators in installation order
    pub fn template_decorators(&self) -> impl Iterator<Item = (&TemplateId, &DecoratorLayer<P>)> {
        self.template_layers.iter().map(|(id, layer)| (id, layer))
    }

    /// Number of registered capabilities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call path for `capability`, outermost first
    pub fn describe(&self, capability: &CapabilitySignature) -> Result<ChainDescription> {
        let entry = self
            .entries
            .get(capability)
            .ok_or_else(|| Error::unresolved(capability.clone()))?;
        Ok(self.describe_entry(entry))
    }

    /// Description of every chain and template decorator
    pub fn report(&self) -> RegistryReport {
        RegistryReport {
            chains: self.entries.values().map(|e| self.describe_entry(e)).collect(),
            template_decorators: self
                .template_layers
                .iter()
                .map(|(id, layer)| (id.clone(), layer.name().clone()))
                .collect(),
        }
    }

    fn describe_entry(&self, entry: &RegistryEntry<P>) -> ChainDescription {
        let mut path = entry
            .chain
            .invocation_order(self.template_layers_for(&entry.capability));
        let base = path.pop().unwrap_or_else(|| entry.chain.base().name().clone());
        ChainDescription {
            capability: entry.capability.clone(),
            layers: path,
            base,
        }
    }

    fn template_layers_for<'a>(
        &'a self,
        capability: &'a CapabilitySignature,
    ) -> impl Iterator<Item = &'a DecoratorLayer<P>> + 'a {
        self.template_layers
            .iter()
            .filter(move |(id, _)| capability.specializes(id))
            .map(|(_, layer)| layer)
    }

    fn take_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}

impl<P: ?Sized> fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("capabilities", &self.entries.keys().collect::<Vec<_>>())
            .field("template_decorators", &self.template_layers.len())
            .finish()
    }
}

/// Call path of one capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescription {
    /// Capability served
    pub capability: CapabilitySignature,
    /// Decorator names, outermost first
    pub layers: Vec<TypeName>,
    /// Base provider name
    pub base: TypeName,
}

impl fmt::Display for ChainDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.capability)?;
        for layer in &self.layers {
            write!(f, "{layer} -> ")?;
        }
        write!(f, "{}", self.base)
    }
}

/// Snapshot of everything registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryReport {
    /// One description per capability, sorted by capability
    pub chains: Vec<ChainDescription>,
    /// Template-bound decorators in installation order
    pub template_decorators: Vec<(TemplateId, TypeName)>,
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capabilities:")?;
        for chain in &self.chains {
            writeln!(f, "  - {chain}")?;
        }
        writeln!(f)?;

        writeln!(f, "Template Decorators:")?;
        for (template, name) in &self.template_decorators {
            writeln!(f, "  - {template}: {name}")?;
        }

        Ok(())
    }
}
