//! # veneer
//!
//! A capability registry that composes ordered decorator chains.
//!
//! Types declare which capabilities they implement; the registry installs
//! one base provider per capability and layers decorators over it. The most
//! recently installed decorator is outermost, and decorators bound to an
//! open template apply to every specialization of it.
//!
//! ## Example
//!
//! ```ignore
//! use veneer::application::{CapabilityTarget, MatchPolicy, Registrar, Registry, StaticDiscovery};
//! use veneer::domain::{CapabilityTemplate, MarkerKind};
//!
//! let components = discovery.discover();
//! let target = CapabilityTarget::open(&CapabilityTemplate::interface("Repository", 2), &MatchPolicy::default())?;
//!
//! let mut registry: Registry<dyn Repository> = Registry::new();
//! let mut registrar = Registrar::new(&mut registry, MatchPolicy::default());
//! registrar.register_bases(&target, &components)?;
//! registrar.register_decorators(&MarkerKind::generic(), &target, &components)?;
//!
//! let repository = registry.resolve(&a_capability)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability identities, type descriptors, errors
//! - `application` - matcher, chain builder, registry, registration entry points
//! - `infrastructure` - configuration, logging, bootstrap from configured steps

/// Domain layer - capability identities and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use veneer_domain::*;
}

/// Application layer - matching, chains and the registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use veneer_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use veneer_infrastructure::*;
}

pub use veneer_application::{Registrar, Registry};
pub use veneer_domain::error::{Error, Result};
pub use veneer_infrastructure::{AppConfig, ConfigLoader, compose};

pub mod cli;
