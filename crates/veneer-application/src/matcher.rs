//! Capability Matcher
//!
//! Pure functions deciding whether a [`TypeDescriptor`] satisfies a target
//! capability and, if so, which specific signature it registers under.
//!
//! Two target shapes exist:
//!
//! | Target | Example | Registers under |
//! |--------|---------|-----------------|
//! | `Root` | `Repository` | the declared capability deriving from the root (`TestRepository`), never the root itself |
//! | `Open` | `Repository<,>` | the declared closed specialization (`Repository<ARequest, AResponse>`) |
//!
//! Base matching and decorator matching are mutually exclusive: a type
//! carrying any decorator marker is never a base provider.
//!
//! When more than one declared capability qualifies, the [`AmbiguityPolicy`]
//! decides. `Reject` (the default) reports [`Error::AmbiguousMatch`];
//! `FirstMatch` keeps the first in declaration order. Declaration order is
//! whatever the discovery source produced, so `FirstMatch` should not be
//! relied on as a contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use veneer_domain::constants::DEFAULT_OPEN_TEMPLATE_ARITY;
use veneer_domain::error::{Error, Result};
use veneer_domain::{
    CapabilitySignature, CapabilityTemplate, DeclaredCapability, MarkerKind, Role, TemplateId,
    TypeDescriptor,
};

/// What to do when a type satisfies several qualifying capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Fail with [`Error::AmbiguousMatch`]
    #[default]
    Reject,
    /// Take the first candidate in declaration order
    FirstMatch,
}

/// Matching rules applied by the registration entry points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Tie-break behavior
    pub ambiguity: AmbiguityPolicy,
    /// Exact number of type parameters an open target must have, if enforced
    pub open_template_arity: Option<usize>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::Reject,
            open_template_arity: Some(DEFAULT_OPEN_TEMPLATE_ARITY),
        }
    }
}

impl MatchPolicy {
    /// Permissive policy mirroring plain first-match scanning
    pub fn first_match() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::FirstMatch,
            ..Self::default()
        }
    }
}

/// A validated registration target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CapabilityTarget {
    /// Non-parameterized root interface; types register under what derives from it
    Root(TemplateId),
    /// Parameterized template; types register under their closed specialization
    Open(TemplateId),
}

impl CapabilityTarget {
    /// Validate `template` as a root interface target
    pub fn root(template: &CapabilityTemplate) -> Result<Self> {
        require_interface(template)?;
        if template.id().is_parameterized() {
            return Err(Error::configuration(format!(
                "{} is parameterized; register it as an open template",
                template.id()
            )));
        }
        Ok(Self::Root(template.id().clone()))
    }

    /// Validate `template` as an open template target
    pub fn open(template: &CapabilityTemplate, policy: &MatchPolicy) -> Result<Self> {
        require_interface(template)?;
        let arity = template.id().arity();
        if arity == 0 {
            return Err(Error::configuration(format!(
                "{} is not a parameterized template",
                template.id()
            )));
        }
        if let Some(required) = policy.open_template_arity {
            if arity != required {
                return Err(Error::configuration(format!(
                    "{} must have exactly {required} type parameters, found {arity}",
                    template.id()
                )));
            }
        }
        Ok(Self::Open(template.id().clone()))
    }

    /// Template identity of the target
    pub fn template(&self) -> &TemplateId {
        match self {
            Self::Root(id) | Self::Open(id) => id,
        }
    }

    /// Whether the target is an open template
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl fmt::Display for CapabilityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.template(), f)
    }
}

fn require_interface(template: &CapabilityTemplate) -> Result<()> {
    if template.is_interface() {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "{} must be an interface type",
            template.id()
        )))
    }
}

/// Find the capability `descriptor` provides as a base implementation of `target`
pub fn match_base(
    descriptor: &TypeDescriptor,
    target: &CapabilityTarget,
    policy: &MatchPolicy,
) -> Result<Option<CapabilitySignature>> {
    if descriptor.is_decorator() || declares_any_marker(descriptor) {
        debug!(type_name = %descriptor.name(), "Skipping decorator during base matching");
        return Ok(None);
    }
    if !descriptor.is_concrete() || descriptor.is_open_generic() {
        debug!(type_name = %descriptor.name(), "Skipping non-instantiable type");
        return Ok(None);
    }

    let candidates: Vec<&CapabilitySignature> = match target {
        CapabilityTarget::Root(root) => descriptor
            .declared_capabilities()
            .iter()
            .filter(|c| derives_from(c, root))
            .map(DeclaredCapability::signature)
            .collect(),
        CapabilityTarget::Open(template) => descriptor
            .declared_capabilities()
            .iter()
            .map(DeclaredCapability::signature)
            .filter(|s| s.specializes(template) && !s.is_open())
            .collect(),
    };

    select(descriptor, candidates, policy)
}

/// Find the capability `descriptor` decorates for `target`
///
/// Returns an open signature when an unspecialized decorator is matched
/// against an open template: such a decorator binds to the template and
/// applies to every specialization of it.
pub fn match_decorator(
    descriptor: &TypeDescriptor,
    target: &CapabilityTarget,
    marker: &MarkerKind,
    policy: &MatchPolicy,
) -> Result<Option<CapabilitySignature>> {
    if !descriptor.is_decorator_marker(marker) || !descriptor.is_concrete() {
        return Ok(None);
    }
    let own_marker = match descriptor.role() {
        Role::Decorator(own) => own,
        Role::Base => return Ok(None),
    };
    let is_marker = |s: &CapabilitySignature| {
        let id = s.template();
        id == marker.id() || id == own_marker.id() || id == MarkerKind::any().id()
    };

    let candidates: Vec<&CapabilitySignature> = match target {
        CapabilityTarget::Root(root) => {
            if descriptor.is_open_generic() {
                debug!(
                    type_name = %descriptor.name(),
                    requested = %target,
                    "Unspecialized decorator cannot bind to a non-parameterized root"
                );
                return Ok(None);
            }
            descriptor
                .declared_capabilities()
                .iter()
                .filter(|c| derives_from(c, root) && !is_marker(c.signature()))
                .map(DeclaredCapability::signature)
                .collect()
        }
        CapabilityTarget::Open(template) => {
            if descriptor.is_open_generic() {
                let declares = descriptor
                    .declared_capabilities()
                    .iter()
                    .any(|c| c.signature().specializes(template));
                if declares {
                    debug!(
                        type_name = %descriptor.name(),
                        template = %template,
                        "Binding unspecialized decorator to template"
                    );
                    return Ok(Some(CapabilitySignature::open(template.clone())));
                }
                return Ok(None);
            }
            descriptor
                .declared_capabilities()
                .iter()
                .map(DeclaredCapability::signature)
                .filter(|s| s.specializes(template) && !s.is_open() && !is_marker(*s))
                .collect()
        }
    };

    select(descriptor, candidates, policy)
}

/// Whether the type declares the global decorator marker as one of its capabilities
fn declares_any_marker(descriptor: &TypeDescriptor) -> bool {
    let any = MarkerKind::any();
    descriptor
        .declared_capabilities()
        .iter()
        .any(|c| c.signature().template() == any.id())
}

/// Declared capability assignable to `root`, excluding `root` itself
fn derives_from(capability: &DeclaredCapability, root: &TemplateId) -> bool {
    capability.signature().template() != root && capability.satisfies(root)
}

fn select(
    descriptor: &TypeDescriptor,
    candidates: Vec<&CapabilitySignature>,
    policy: &MatchPolicy,
) -> Result<Option<CapabilitySignature>> {
    let mut distinct: Vec<&CapabilitySignature> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !distinct.contains(&candidate) {
            distinct.push(candidate);
        }
    }

    match distinct.as_slice() {
        [] => Ok(None),
        [only] => {
            debug!(type_name = %descriptor.name(), capability = %only, "Matched capability");
            Ok(Some((*only).clone()))
        }
        [first, ..] => match policy.ambiguity {
            AmbiguityPolicy::Reject => Err(Error::ambiguous(
                descriptor.name().as_str(),
                distinct.iter().map(|s| (*s).clone()).collect(),
            )),
            AmbiguityPolicy::FirstMatch => {
                warn!(
                    type_name = %descriptor.name(),
                    capability = %first,
                    candidates = distinct.len(),
                    "Type satisfies several capabilities; taking the first declared"
                );
                Ok(Some((*first).clone()))
            }
        },
    }
}
