//! Capability identities
//!
//! A capability is the contract a provider satisfies. It is identified by a
//! [`TemplateId`] (name plus number of type parameters) and, once specialized,
//! by the ordered type arguments bound to those parameters.
//!
//! ```text
//! TemplateId("Repository", 2)                      open:   Repository<,>
//! CapabilitySignature(Repository, [AReq, AResp])    closed: Repository<AReq, AResp>
//! CapabilitySignature(TestRepository, [])           closed: TestRepository
//! ```

use crate::constants::{ANY_DECORATOR_MARKER, GENERIC_DECORATOR_MARKER, SPECIFIC_DECORATOR_MARKER};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a capability "shape"
///
/// Two templates with the same name but a different number of type
/// parameters are different identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId {
    name: String,
    #[serde(default)]
    arity: usize,
}

impl TemplateId {
    /// Create a template identity with the given number of type parameters
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    /// Create a non-parameterized identity
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    /// Template name without parameters
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of type parameters
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Whether the template takes type parameters
    pub fn is_parameterized(&self) -> bool {
        self.arity > 0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arity == 0 {
            return f.write_str(&self.name);
        }
        write!(f, "{}<{}>", self.name, ",".repeat(self.arity - 1))
    }
}

/// What kind of type a template identity names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// An abstract contract; the only kind usable as a capability
    #[default]
    Interface,
    /// A concrete implementation type
    Concrete,
}

/// A template identity together with its kind
///
/// This is what a host hands to the registration entry points. Only
/// interface templates are accepted as targets or markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityTemplate {
    id: TemplateId,
    kind: TemplateKind,
}

impl CapabilityTemplate {
    /// Create a template of the given kind
    pub fn new(id: TemplateId, kind: TemplateKind) -> Self {
        Self { id, kind }
    }

    /// Create an interface template
    pub fn interface(name: impl Into<String>, arity: usize) -> Self {
        Self::new(TemplateId::new(name, arity), TemplateKind::Interface)
    }

    /// Create a concrete type template
    pub fn concrete(name: impl Into<String>, arity: usize) -> Self {
        Self::new(TemplateId::new(name, arity), TemplateKind::Concrete)
    }

    /// Template identity
    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Template kind
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Whether this template names an interface
    pub fn is_interface(&self) -> bool {
        self.kind == TemplateKind::Interface
    }
}

/// Name of a concrete type, used both as a type argument and as a type's own name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identity of the capability a provider is registered under
///
/// Equal iff the template identities are equal and the type arguments are
/// equal element-wise, in order. A parameterized template with no arguments
/// is *open*: it appears only while matching and as the binding of a generic
/// decorator, never as the key of a registered base provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSignature")]
pub struct CapabilitySignature {
    template: TemplateId,
    type_arguments: Vec<TypeName>,
}

/// Unchecked wire form of [`CapabilitySignature`]
#[derive(Deserialize)]
struct RawSignature {
    template: TemplateId,
    #[serde(default)]
    type_arguments: Vec<TypeName>,
}

impl TryFrom<RawSignature> for CapabilitySignature {
    type Error = Error;

    /// An empty argument list reads as the open signature; anything else must match the arity
    fn try_from(raw: RawSignature) -> Result<Self> {
        if raw.type_arguments.is_empty() {
            return Ok(Self::open(raw.template));
        }
        Self::closed(raw.template, raw.type_arguments)
    }
}

impl CapabilitySignature {
    /// Create a closed signature, checking the argument count against the template arity
    pub fn closed<I, T>(template: TemplateId, type_arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let type_arguments: Vec<TypeName> = type_arguments.into_iter().map(Into::into).collect();
        if type_arguments.len() != template.arity() {
            return Err(Error::configuration(format!(
                "{template} expects {} type arguments, got {}",
                template.arity(),
                type_arguments.len()
            )));
        }
        Ok(Self {
            template,
            type_arguments,
        })
    }

    /// Signature of a non-parameterized capability
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            template: TemplateId::plain(name),
            type_arguments: Vec::new(),
        }
    }

    /// Open signature of a template: identity only, arguments unknown
    pub fn open(template: TemplateId) -> Self {
        Self {
            template,
            type_arguments: Vec::new(),
        }
    }

    /// Template identity
    pub fn template(&self) -> &TemplateId {
        &self.template
    }

    /// Bound type arguments, in declaration order
    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }

    /// Whether this is a parameterized template with no arguments bound
    pub fn is_open(&self) -> bool {
        self.template.is_parameterized() && self.type_arguments.is_empty()
    }

    /// Whether this signature is a specialization (or the open form) of `template`
    pub fn specializes(&self, template: &TemplateId) -> bool {
        &self.template == template
    }
}

impl fmt::Display for CapabilitySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_arguments.is_empty() {
            return write!(f, "{}", self.template);
        }
        let args = self
            .type_arguments
            .iter()
            .map(TypeName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}<{}>", self.template.name(), args)
    }
}

/// Which decorator marker a decorator type carries
///
/// The global marker ([`MarkerKind::any`]) is implied by every decorator:
/// asking for it selects all decorators regardless of their own marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerKind(TemplateId);

impl MarkerKind {
    /// Named marker interface
    pub fn named(name: impl Into<String>) -> Self {
        Self(TemplateId::plain(name))
    }

    /// The global decorator marker
    pub fn any() -> Self {
        Self::named(ANY_DECORATOR_MARKER)
    }

    /// Marker for decorators applied to every specialization of a template
    pub fn generic() -> Self {
        Self::named(GENERIC_DECORATOR_MARKER)
    }

    /// Marker for decorators bound to one closed capability
    pub fn specific() -> Self {
        Self::named(SPECIFIC_DECORATOR_MARKER)
    }

    /// Build a marker from a host-supplied template
    ///
    /// Markers must be non-parameterized interfaces.
    pub fn from_template(template: &CapabilityTemplate) -> Result<Self> {
        if !template.is_interface() {
            return Err(Error::configuration(format!(
                "decorator marker {} must be an interface",
                template.id()
            )));
        }
        if template.id().is_parameterized() {
            return Err(Error::configuration(format!(
                "decorator marker {} must not take type parameters",
                template.id()
            )));
        }
        Ok(Self(template.id().clone()))
    }

    /// Whether this is the global decorator marker
    pub fn is_any(&self) -> bool {
        self.0.name() == ANY_DECORATOR_MARKER
    }

    /// Template identity of the marker interface
    pub fn id(&self) -> &TemplateId {
        &self.0
    }

    /// Marker name
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}
