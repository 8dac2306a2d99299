//! Bootstrap Tests
//!
//! Composes registries from configuration and a static discovery source.

use std::sync::Arc;
use veneer_application::{MatchPolicy, Registry, StaticDiscovery};
use veneer_domain::{CapabilitySignature, Error, MarkerKind, TemplateId, TypeDescriptor};
use veneer_infrastructure::bootstrap::compose;
use veneer_infrastructure::config::{RegistrationConfig, RegistrationStep, TargetSpec};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct Hello;

impl Greeter for Hello {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

struct Shout(Arc<dyn Greeter>);

impl Greeter for Shout {
    fn greet(&self) -> String {
        self.0.greet().to_uppercase()
    }
}

struct Exclaim(Arc<dyn Greeter>);

impl Greeter for Exclaim {
    fn greet(&self) -> String {
        format!("{}!", self.0.greet())
    }
}

fn greeter_for(language: &str) -> CapabilitySignature {
    CapabilitySignature::closed(TemplateId::new("Greeter", 2), [language, "String"])
        .expect("two type arguments")
}

fn greeter_capability() -> CapabilitySignature {
    greeter_for("English")
}

fn discovery() -> StaticDiscovery<dyn Greeter> {
    StaticDiscovery::new()
        .with_base(
            TypeDescriptor::base("Hello").implements(greeter_capability()),
            || Arc::new(Hello) as Arc<dyn Greeter>,
        )
        .with_decorator(
            TypeDescriptor::decorator("Shout", MarkerKind::specific())
                .implements(greeter_capability()),
            |_, inner| Arc::new(Shout(inner)) as Arc<dyn Greeter>,
        )
        .with_decorator(
            TypeDescriptor::decorator("Exclaim", MarkerKind::generic())
                .implements(CapabilitySignature::open(TemplateId::new("Greeter", 2)))
                .open_generic(),
            |_, inner| Arc::new(Exclaim(inner)) as Arc<dyn Greeter>,
        )
}

fn steps(markers: &[&str]) -> RegistrationConfig {
    let target = TargetSpec::open("Greeter", 2);
    let mut steps = vec![RegistrationStep::Bases {
        target: target.clone(),
    }];
    steps.extend(markers.iter().map(|marker| RegistrationStep::Decorators {
        marker: (*marker).to_string(),
        target: target.clone(),
    }));
    RegistrationConfig {
        policy: MatchPolicy::default(),
        steps,
    }
}

#[test]
fn test_compose_applies_steps_in_order() {
    let registry: Registry<dyn Greeter> =
        compose(&steps(&["SpecificDecorator", "GenericDecorator"]), &discovery())
            .expect("composes");
    let greeter = registry.resolve(&greeter_capability()).expect("resolves");
    assert_eq!(greeter.greet(), "HELLO!");
    let description = registry.describe(&greeter_capability()).expect("described");
    assert_eq!(description.to_string(), "Greeter<English, String>: Exclaim -> Shout -> Hello");
}

#[test]
fn test_compose_reversed_decorator_steps() {
    let registry: Registry<dyn Greeter> =
        compose(&steps(&["GenericDecorator", "SpecificDecorator"]), &discovery())
            .expect("composes");
    let greeter = registry.resolve(&greeter_capability()).expect("resolves");
    assert_eq!(greeter.greet(), "HELLO!");
    let description = registry.describe(&greeter_capability()).expect("described");
    assert_eq!(description.to_string(), "Greeter<English, String>: Shout -> Exclaim -> Hello");
}

#[test]
fn test_compose_bases_only() {
    let registry: Registry<dyn Greeter> = compose(&steps(&[]), &discovery()).expect("composes");
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.resolve(&greeter_capability()).expect("resolves").greet(),
        "hello"
    );
}

#[test]
fn test_compose_decorators_before_bases_fails() {
    let config = RegistrationConfig {
        policy: MatchPolicy::default(),
        steps: vec![RegistrationStep::Decorators {
            marker: "SpecificDecorator".to_string(),
            target: TargetSpec::open("Greeter", 2),
        }],
    };
    let err = compose::<dyn Greeter, _>(&config, &discovery())
        .expect_err("no base for the specific decorator");
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_compose_empty_config() {
    let registry: Registry<dyn Greeter> =
        compose(&RegistrationConfig::default(), &discovery()).expect("composes");
    assert!(registry.is_empty());
}
