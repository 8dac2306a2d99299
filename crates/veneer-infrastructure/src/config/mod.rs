//! Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [registration.policy]
//! ambiguity = "reject"
//! open_template_arity = 2
//!
//! [[registration.steps]]
//! kind = "bases"
//! target = { name = "Repository", arity = 2, open = true }
//!
//! [[registration.steps]]
//! kind = "decorators"
//! marker = "GenericDecorator"
//! target = { name = "Repository", arity = 2, open = true }
//! ```

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistrationConfig, RegistrationStep, TargetSpec};
