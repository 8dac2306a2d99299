//! Registration entry points
//!
//! The host-facing surface: "register all base implementations of target T"
//! and "register all decorators of marker M over target T". Each call plans
//! every match first and installs only when the whole batch is valid, so a
//! failed call leaves the registry exactly as it was.

use crate::chain::{BaseProvider, DecoratorLayer};
use crate::matcher::{CapabilityTarget, MatchPolicy, match_base, match_decorator};
use crate::ports::discovery::{Component, Construct};
use crate::registry::Registry;
use tracing::info;
use veneer_domain::error::{Error, Result};
use veneer_domain::{CapabilitySignature, MarkerKind, Role};

/// Applies registration batches to a registry
pub struct Registrar<'r, P: ?Sized> {
    registry: &'r mut Registry<P>,
    policy: MatchPolicy,
}

impl<'r, P: ?Sized> Registrar<'r, P> {
    /// Create a registrar writing into `registry`
    pub fn new(registry: &'r mut Registry<P>, policy: MatchPolicy) -> Self {
        Self { registry, policy }
    }

    /// Matching rules in effect
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Install every base implementation of `target` found in `components`
    ///
    /// Returns the number of capabilities registered.
    pub fn register_bases(
        &mut self,
        target: &CapabilityTarget,
        components: &[Component<P>],
    ) -> Result<usize> {
        let mut planned: Vec<(CapabilitySignature, BaseProvider<P>)> = Vec::new();

        for component in components {
            let descriptor = component.descriptor();
            let Some(capability) = match_base(descriptor, target, &self.policy)? else {
                continue;
            };
            let Construct::Base(factory) = component.construct() else {
                return Err(Error::configuration(format!(
                    "{} is described as a base implementation but supplies a decorator constructor",
                    descriptor.name()
                )));
            };
            if self.registry.contains(&capability) || planned.iter().any(|(c, _)| c == &capability)
            {
                return Err(Error::duplicate(capability));
            }
            planned.push((
                capability,
                BaseProvider::from_factory(descriptor.name().clone(), factory.clone()),
            ));
        }

        let count = planned.len();
        for (capability, provider) in planned {
            self.registry.install_base(capability, provider)?;
        }
        info!(requested = %target, count, "Registered base providers");
        Ok(count)
    }

    /// Layer every decorator carrying `marker` over `target`
    ///
    /// Decorators are installed in component order, so later components end
    /// up outermost. Returns the number of layers installed.
    pub fn register_decorators(
        &mut self,
        marker: &MarkerKind,
        target: &CapabilityTarget,
        components: &[Component<P>],
    ) -> Result<usize> {
        let mut planned: Vec<(CapabilitySignature, DecoratorLayer<P>)> = Vec::new();

        for component in components {
            let descriptor = component.descriptor();
            let Some(capability) = match_decorator(descriptor, target, marker, &self.policy)?
            else {
                continue;
            };
            let Construct::Decorator(factory) = component.construct() else {
                return Err(Error::configuration(format!(
                    "{} is described as a decorator but supplies a base constructor",
                    descriptor.name()
                )));
            };
            if !capability.is_open() && !self.registry.contains(&capability) {
                return Err(Error::configuration(format!(
                    "cannot decorate {capability} with {}: no base provider installed",
                    descriptor.name()
                )));
            }
            let own_marker = match descriptor.role() {
                Role::Decorator(own) => own.clone(),
                Role::Base => marker.clone(),
            };
            planned.push((
                capability,
                DecoratorLayer::from_factory(descriptor.name().clone(), own_marker, factory.clone()),
            ));
        }

        let count = planned.len();
        for (capability, layer) in planned {
            self.registry.install_decorator(&capability, layer)?;
        }
        info!(requested = %target, marker = %marker, count, "Registered decorators");
        Ok(count)
    }
}
