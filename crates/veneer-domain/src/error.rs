//! Error handling types

use crate::value_objects::CapabilitySignature;
use thiserror::Error;

/// Result type alias for registration and resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while composing or resolving provider chains
///
/// Every variant is produced synchronously by a registration or resolution
/// call. A resolved chain never produces these errors when invoked.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed capability, template or marker argument
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A base provider is already installed for this capability
    #[error("Duplicate registration: a base provider for {capability} is already installed")]
    DuplicateRegistration {
        /// The capability that already has a base provider
        capability: CapabilitySignature,
    },

    /// Nothing is registered for the requested capability
    #[error("Unresolved capability: no provider registered for {capability}")]
    UnresolvedCapability {
        /// The capability that was requested
        capability: CapabilitySignature,
    },

    /// A type satisfies more than one qualifying capability
    #[error("Ambiguous match: {type_name} satisfies {} capabilities: {}", .candidates.len(), join(.candidates))]
    AmbiguousMatch {
        /// Name of the type being matched
        type_name: String,
        /// Every qualifying capability, in declaration order
        candidates: Vec<CapabilitySignature>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn join(candidates: &[CapabilitySignature]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a duplicate registration error
    pub fn duplicate(capability: CapabilitySignature) -> Self {
        Self::DuplicateRegistration { capability }
    }

    /// Create an unresolved capability error
    pub fn unresolved(capability: CapabilitySignature) -> Self {
        Self::UnresolvedCapability { capability }
    }

    /// Create an ambiguous match error
    pub fn ambiguous<S: Into<String>>(type_name: S, candidates: Vec<CapabilitySignature>) -> Self {
        Self::AmbiguousMatch {
            type_name: type_name.into(),
            candidates,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error came from malformed configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
