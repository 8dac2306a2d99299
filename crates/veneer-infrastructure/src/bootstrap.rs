//! Registry bootstrap
//!
//! Applies the configured registration steps, in order, to the components a
//! discovery source produces. Discovery runs once; every step sees the same
//! component list.

use crate::config::{RegistrationConfig, RegistrationStep};
use tracing::info;
use veneer_application::{Component, Discovery, Registrar, Registry};
use veneer_domain::error::Result;

/// Build a registry from `config` and the components of `discovery`
pub fn compose<P, D>(config: &RegistrationConfig, discovery: &D) -> Result<Registry<P>>
where
    P: ?Sized,
    D: Discovery<P> + ?Sized,
{
    let components = discovery.discover();
    let mut registry = Registry::new();
    let mut registrar = Registrar::new(&mut registry, config.policy.clone());

    for step in &config.steps {
        apply_step(&mut registrar, step, &components)?;
    }

    info!(
        capabilities = registry.len(),
        template_decorators = registry.template_decorators().count(),
        "Registry composed"
    );
    Ok(registry)
}

/// Apply one registration step, returning the number of registrations made
pub fn apply_step<P: ?Sized>(
    registrar: &mut Registrar<'_, P>,
    step: &RegistrationStep,
    components: &[Component<P>],
) -> Result<usize> {
    let target = step.target().to_target(registrar.policy())?;
    let count = match step.marker()? {
        None => registrar.register_bases(&target, components)?,
        Some(marker) => registrar.register_decorators(&marker, &target, components)?,
    };
    info!(step = %step, count, "Applied registration step");
    Ok(count)
}
