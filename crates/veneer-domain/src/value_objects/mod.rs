//! Value objects
//!
//! Immutable identities and descriptors. Equality is structural throughout.

pub mod capability;
pub mod descriptor;

pub use capability::{CapabilitySignature, CapabilityTemplate, MarkerKind, TemplateId, TemplateKind, TypeName};
pub use descriptor::{DeclaredCapability, Role, TypeDescriptor};
