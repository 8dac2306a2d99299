//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `veneer_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "veneer.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "veneer";

/// Environment variable prefix for configuration (`VENEER__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "VENEER";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive that overrides the configured level
pub const LOG_ENV_FILTER: &str = "VENEER_LOG";
