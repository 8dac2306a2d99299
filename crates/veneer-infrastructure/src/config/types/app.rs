//! Application configuration root

use super::{LoggingConfig, RegistrationConfig};
use serde::{Deserialize, Serialize};

/// Everything loadable from `veneer.toml` and `VENEER__*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Match policy and registration steps
    pub registration: RegistrationConfig,
}
