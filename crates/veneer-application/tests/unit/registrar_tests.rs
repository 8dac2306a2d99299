//! Tests for the registration entry points

use crate::test_utils::*;
use std::sync::Arc;
use veneer_application::{
    CapabilityTarget, Component, Discovery, MatchPolicy, Registrar, Registry,
};
use veneer_domain::{CapabilitySignature, Error, MarkerKind, TypeDescriptor};

fn open_target() -> CapabilityTarget {
    CapabilityTarget::open(&repository_template(), &MatchPolicy::default())
        .expect("valid open target")
}

fn root_target() -> CapabilityTarget {
    CapabilityTarget::root(&root_template()).expect("valid root target")
}

#[test]
fn test_register_bases_counts_matches() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let components = repository_discovery().discover();

    let count = Registrar::new(&mut registry, MatchPolicy::default())
        .register_bases(&open_target(), &components)
        .expect("three distinct specializations");

    assert_eq!(count, 3);
    assert!(registry.contains(&a_capability()));
    assert!(registry.contains(&b_capability()));
    assert!(registry.contains(&c_capability()));
}

#[test]
fn test_register_bases_with_no_match_is_not_an_error() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let components = decorator_components();

    let count = Registrar::new(&mut registry, MatchPolicy::default())
        .register_bases(&open_target(), &components)
        .expect("decorators are skipped");
    assert_eq!(count, 0);
    assert!(registry.is_empty());
}

#[test]
fn test_duplicate_within_batch_installs_nothing() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let components = vec![
        Component::base(a_repository(), || Arc::new(ARepository) as Arc<dyn Repository>),
        Component::base(
            TypeDescriptor::base("OtherARepository").implements(a_capability()),
            || Arc::new(ARepository) as Arc<dyn Repository>,
        ),
    ];

    let err = Registrar::new(&mut registry, MatchPolicy::default())
        .register_bases(&open_target(), &components)
        .expect_err("two bases for A");
    assert!(matches!(err, Error::DuplicateRegistration { .. }));
    assert!(registry.is_empty());
}

#[test]
fn test_duplicate_against_registry_keeps_existing_chain() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let mut registrar = Registrar::new(&mut registry, MatchPolicy::default());
    registrar
        .register_bases(&open_target(), &base_components())
        .expect("first batch");
    let err = registrar
        .register_bases(&open_target(), &base_components())
        .expect_err("second batch duplicates every capability");
    assert!(matches!(err, Error::DuplicateRegistration { .. }));

    assert_eq!(registry.len(), 3);
    let entry = registry.entry(&a_capability()).expect("still present");
    assert_eq!(entry.chain().base().name().as_str(), "ARepository");
}

#[test]
fn test_ambiguous_base_fails_whole_batch() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let mut components = base_components();
    components.push(Component::base(
        TypeDescriptor::base("ABRepository")
            .implements(repo("XRequest", "XResponse"))
            .implements(repo("YRequest", "YResponse")),
        || Arc::new(ARepository) as Arc<dyn Repository>,
    ));

    let err = Registrar::new(&mut registry, MatchPolicy::default())
        .register_bases(&open_target(), &components)
        .expect_err("ambiguous type rejects the batch");
    assert!(matches!(err, Error::AmbiguousMatch { .. }));
    assert!(registry.is_empty());
}

#[test]
fn test_register_decorators_requires_installed_base() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let err = Registrar::new(&mut registry, MatchPolicy::default())
        .register_decorators(&MarkerKind::specific(), &open_target(), &decorator_components())
        .expect_err("B and C have no base yet");
    assert!(err.is_configuration());
    assert!(registry.is_empty());
    assert_eq!(registry.template_decorators().count(), 0);
}

#[test]
fn test_register_decorators_per_marker() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let mut registrar = Registrar::new(&mut registry, MatchPolicy::default());
    registrar
        .register_bases(&open_target(), &base_components())
        .expect("bases");

    let specific = registrar
        .register_decorators(&MarkerKind::specific(), &open_target(), &decorator_components())
        .expect("B and C decorators");
    assert_eq!(specific, 2);

    let generic = registrar
        .register_decorators(&MarkerKind::generic(), &open_target(), &decorator_components())
        .expect("generic decorator");
    assert_eq!(generic, 1);

    let names: Vec<String> = registry
        .template_decorators()
        .map(|(_, layer)| layer.name().to_string())
        .collect();
    assert_eq!(names, vec!["GenericRepositoryDecorator"]);

    let b_layers = registry.entry(&b_capability()).expect("B").chain().layers();
    assert_eq!(b_layers.len(), 1);
    assert_eq!(b_layers[0].marker(), &MarkerKind::specific());
    assert!(registry.entry(&a_capability()).expect("A").chain().layers().is_empty());
}

#[test]
fn test_register_decorators_under_global_marker() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let mut registrar = Registrar::new(&mut registry, MatchPolicy::default());
    registrar
        .register_bases(&open_target(), &base_components())
        .expect("bases");

    let count = registrar
        .register_decorators(&MarkerKind::any(), &open_target(), &decorator_components())
        .expect("all decorators");
    assert_eq!(count, 3);
}

#[test]
fn test_mismatched_constructor_is_a_configuration_error() {
    let mut registry: Registry<dyn Repository> = Registry::new();
    let liar: Vec<Component<dyn Repository>> =
        vec![Component::decorator(a_repository(), |_, inner| inner)];
    let err = Registrar::new(&mut registry, MatchPolicy::default())
        .register_bases(&open_target(), &liar)
        .expect_err("a base descriptor with a decorator constructor");
    assert!(err.is_configuration());
}

#[test]
fn test_root_registration_of_caller() {
    let mut registry: Registry<dyn Caller> = Registry::new();
    let components = caller_discovery().discover();
    let mut registrar = Registrar::new(&mut registry, MatchPolicy::default());

    assert_eq!(
        registrar
            .register_bases(&root_target(), &components)
            .expect("TestRepository"),
        1
    );
    assert_eq!(
        registrar
            .register_decorators(&MarkerKind::named("TestDecorator"), &root_target(), &components)
            .expect("TestDecorator"),
        1
    );
    assert_eq!(registrar.policy(), &MatchPolicy::default());

    let capabilities: Vec<_> = registry.capabilities().cloned().collect();
    assert_eq!(capabilities, vec![CapabilitySignature::plain("TestRepository")]);
}
