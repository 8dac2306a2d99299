//! Configuration types

mod app;
mod logging;
mod registration;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use registration::{RegistrationConfig, RegistrationStep, TargetSpec};
