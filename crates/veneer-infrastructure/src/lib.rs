//! Infrastructure Layer - veneer
//!
//! Cross-cutting concerns around the composition engine:
//!
//! - `config` - figment-based configuration of logging and registration steps
//! - `logging` - tracing subscriber setup
//! - `bootstrap` - applies configured registration steps to a discovery source
//! - `error_ext` - context helpers mapping foreign errors into domain errors

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{apply_step, compose};
pub use config::{
    AppConfig, ConfigLoader, LoggingConfig, RegistrationConfig, RegistrationStep, TargetSpec,
};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
