//! Registration configuration types
//!
//! A configured registration is an ordered list of steps, each one call of
//! a registration entry point. Order matters: decorator steps layer over
//! whatever earlier steps installed.

use serde::{Deserialize, Serialize};
use std::fmt;
use veneer_application::{CapabilityTarget, MatchPolicy};
use veneer_domain::error::{Error, Result};
use veneer_domain::{CapabilityTemplate, MarkerKind, TemplateId, TemplateKind};

/// Match policy and the ordered registration steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Matching rules applied by every step
    pub policy: MatchPolicy,

    /// Steps in application order
    pub steps: Vec<RegistrationStep>,
}

/// Identity of a registration target as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Template name
    pub name: String,

    /// Number of type parameters
    #[serde(default)]
    pub arity: usize,

    /// Interface or concrete type
    #[serde(default)]
    pub kind: TemplateKind,

    /// Whether the target is an open template rather than a root interface
    #[serde(default)]
    pub open: bool,
}

impl TargetSpec {
    /// Root interface target
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: 0,
            kind: TemplateKind::Interface,
            open: false,
        }
    }

    /// Open template target
    pub fn open(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            kind: TemplateKind::Interface,
            open: true,
        }
    }

    /// Template this target names
    pub fn template(&self) -> CapabilityTemplate {
        CapabilityTemplate::new(TemplateId::new(self.name.clone(), self.arity), self.kind)
    }

    /// Validate into a matcher target
    pub fn to_target(&self, policy: &MatchPolicy) -> Result<CapabilityTarget> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("Registration target name cannot be empty"));
        }
        let template = self.template();
        if self.open {
            CapabilityTarget::open(&template, policy)
        } else {
            CapabilityTarget::root(&template)
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TemplateId::new(self.name.clone(), self.arity), f)
    }
}

/// One call of a registration entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationStep {
    /// Register every base implementation of `target`
    Bases {
        /// Root interface or open template
        target: TargetSpec,
    },
    /// Register every decorator carrying `marker` over `target`
    Decorators {
        /// Marker interface name
        marker: String,
        /// Root interface or open template
        target: TargetSpec,
    },
}

impl RegistrationStep {
    /// Target of the step
    pub fn target(&self) -> &TargetSpec {
        match self {
            Self::Bases { target } | Self::Decorators { target, .. } => target,
        }
    }

    /// Marker kind of a decorator step
    pub fn marker(&self) -> Result<Option<MarkerKind>> {
        match self {
            Self::Bases { .. } => Ok(None),
            Self::Decorators { marker, .. } => {
                if marker.trim().is_empty() {
                    return Err(Error::configuration("Decorator marker name cannot be empty"));
                }
                MarkerKind::from_template(&CapabilityTemplate::interface(marker.clone(), 0))
                    .map(Some)
            }
        }
    }

    /// Check the step without applying it
    pub fn validate(&self, policy: &MatchPolicy) -> Result<()> {
        self.target().to_target(policy)?;
        self.marker()?;
        Ok(())
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bases { target } => write!(f, "register bases of {target}"),
            Self::Decorators { marker, target } => {
                write!(f, "register decorators [{marker}] over {target}")
            }
        }
    }
}
