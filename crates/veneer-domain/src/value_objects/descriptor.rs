//! Type descriptors
//!
//! A [`TypeDescriptor`] is the static fact sheet a discovery source produces
//! for one implementation or decorator candidate. Descriptors are built once
//! and never mutated; they carry no behavior beyond introspection.

use super::capability::{CapabilitySignature, MarkerKind, TemplateId, TypeName};
use serde::{Deserialize, Serialize};

/// A capability a type declares, together with the interfaces that capability extends
///
/// `extends` lists every template the declared capability inherits from, so
/// that "is this capability assignable to root `R`" is a local check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredCapability {
    signature: CapabilitySignature,
    #[serde(default)]
    extends: Vec<TemplateId>,
}

impl DeclaredCapability {
    /// Declare a capability with no super-interfaces
    pub fn new(signature: CapabilitySignature) -> Self {
        Self {
            signature,
            extends: Vec::new(),
        }
    }

    /// Record that this capability extends `template`
    #[must_use]
    pub fn extending(mut self, template: TemplateId) -> Self {
        if !self.extends.contains(&template) {
            self.extends.push(template);
        }
        self
    }

    /// The declared signature
    pub fn signature(&self) -> &CapabilitySignature {
        &self.signature
    }

    /// Templates this capability extends
    pub fn extends(&self) -> &[TemplateId] {
        &self.extends
    }

    /// Whether this capability is `template` or derives from it
    pub fn satisfies(&self, template: &TemplateId) -> bool {
        self.signature.template() == template || self.extends.contains(template)
    }
}

impl From<CapabilitySignature> for DeclaredCapability {
    fn from(signature: CapabilitySignature) -> Self {
        Self::new(signature)
    }
}

/// Whether a type is a terminal implementation or a decorator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Terminal implementation of a capability
    Base,
    /// Wraps another provider of the same capability
    Decorator(MarkerKind),
}

/// Static facts about one discovered type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: TypeName,
    capabilities: Vec<DeclaredCapability>,
    role: Role,
    concrete: bool,
    open_generic: bool,
}

impl TypeDescriptor {
    /// Describe a base implementation type
    pub fn base(name: impl Into<TypeName>) -> Self {
        Self::with_role(name, Role::Base)
    }

    /// Describe a decorator type carrying `marker`
    pub fn decorator(name: impl Into<TypeName>, marker: MarkerKind) -> Self {
        Self::with_role(name, Role::Decorator(marker))
    }

    fn with_role(name: impl Into<TypeName>, role: Role) -> Self {
        Self {
            name: name.into(),
            capabilities: Vec::new(),
            role,
            concrete: true,
            open_generic: false,
        }
    }

    /// Declare a capability the type implements
    ///
    /// Declaration order is significant: it is the order matching scans in.
    #[must_use]
    pub fn implements(mut self, capability: impl Into<DeclaredCapability>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Mark the type as abstract (not instantiable)
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.concrete = false;
        self
    }

    /// Mark the type as an unspecialized generic definition
    #[must_use]
    pub fn open_generic(mut self) -> Self {
        self.open_generic = true;
        self
    }

    /// Type name
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Declared capabilities in declaration order
    pub fn declared_capabilities(&self) -> &[DeclaredCapability] {
        &self.capabilities
    }

    /// Base or decorator role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Whether the type can be instantiated
    pub fn is_concrete(&self) -> bool {
        self.concrete
    }

    /// Whether the type is an unspecialized generic definition
    pub fn is_open_generic(&self) -> bool {
        self.open_generic
    }

    /// Whether the type is a decorator of any kind
    pub fn is_decorator(&self) -> bool {
        matches!(self.role, Role::Decorator(_))
    }

    /// Whether the type carries the decorator marker `kind`
    ///
    /// Every decorator carries the global marker.
    pub fn is_decorator_marker(&self, kind: &MarkerKind) -> bool {
        match &self.role {
            Role::Base => false,
            Role::Decorator(marker) => kind.is_any() || marker == kind,
        }
    }

    /// Whether any declared capability is `template` or derives from it
    pub fn satisfies(&self, template: &TemplateId) -> bool {
        self.capabilities.iter().any(|c| c.satisfies(template))
    }
}
