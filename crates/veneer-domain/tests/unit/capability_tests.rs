//! Capability identity tests

use veneer_domain::{CapabilitySignature, CapabilityTemplate, MarkerKind, TemplateId, TypeName};

fn repository() -> TemplateId {
    TemplateId::new("Repository", 2)
}

#[test]
fn test_signatures_equal_only_with_same_arguments_in_order() {
    let a = CapabilitySignature::closed(repository(), ["ARequest", "AResponse"]).unwrap();
    let same = CapabilitySignature::closed(repository(), ["ARequest", "AResponse"]).unwrap();
    let swapped = CapabilitySignature::closed(repository(), ["AResponse", "ARequest"]).unwrap();
    let other = CapabilitySignature::closed(repository(), ["BRequest", "BResponse"]).unwrap();

    assert_eq!(a, same);
    assert_ne!(a, swapped);
    assert_ne!(a, other);
}

#[test]
fn test_same_name_different_arity_is_different_template() {
    let plain = CapabilitySignature::plain("Repository");
    let open = CapabilitySignature::open(repository());

    assert_ne!(plain, open);
    assert_ne!(plain.template(), open.template());
}

#[test]
fn test_closed_rejects_wrong_argument_count() {
    let err = CapabilitySignature::closed(repository(), ["OnlyOne"]).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("expects 2 type arguments, got 1"));
}

#[test]
fn test_open_signature_detection() {
    assert!(CapabilitySignature::open(repository()).is_open());
    assert!(!CapabilitySignature::plain("TestRepository").is_open());
    let closed = CapabilitySignature::closed(repository(), ["A", "B"]).unwrap();
    assert!(!closed.is_open());
    assert!(closed.specializes(&repository()));
}

#[test]
fn test_display_forms() {
    let closed = CapabilitySignature::closed(repository(), ["ARequest", "AResponse"]).unwrap();
    assert_eq!(closed.to_string(), "Repository<ARequest, AResponse>");
    assert_eq!(CapabilitySignature::open(repository()).to_string(), "Repository<,>");
    assert_eq!(CapabilitySignature::plain("TestRepository").to_string(), "TestRepository");
    assert_eq!(TemplateId::new("Triple", 3).to_string(), "Triple<,,>");
}

#[test]
fn test_type_arguments_preserved() {
    let closed = CapabilitySignature::closed(repository(), ["ARequest", "AResponse"]).unwrap();
    assert_eq!(
        closed.type_arguments(),
        &[TypeName::from("ARequest"), TypeName::from("AResponse")]
    );
}

#[test]
fn test_marker_from_template_requires_interface() {
    let marker = MarkerKind::from_template(&CapabilityTemplate::interface("CacheDecorator", 0));
    assert_eq!(marker.unwrap().name(), "CacheDecorator");

    let concrete = MarkerKind::from_template(&CapabilityTemplate::concrete("TestDecorator", 0));
    assert!(concrete.unwrap_err().is_configuration());

    let generic = MarkerKind::from_template(&CapabilityTemplate::interface("Decorates", 1));
    assert!(generic.unwrap_err().is_configuration());
}

#[test]
fn test_marker_any_detection() {
    assert!(MarkerKind::any().is_any());
    assert!(!MarkerKind::generic().is_any());
    assert!(!MarkerKind::specific().is_any());
    assert_ne!(MarkerKind::generic(), MarkerKind::specific());
}

#[test]
fn test_signature_serde_shape() {
    let closed = CapabilitySignature::closed(repository(), ["A", "B"]).unwrap();
    let json = serde_json::to_value(&closed).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "template": { "name": "Repository", "arity": 2 },
            "type_arguments": ["A", "B"]
        })
    );
}

#[test]
fn test_deserialize_checks_arity() {
    let short = serde_json::json!({
        "template": { "name": "Repository", "arity": 2 },
        "type_arguments": ["A"]
    });
    let err = serde_json::from_value::<CapabilitySignature>(short).unwrap_err();
    assert!(err.to_string().contains("Repository<,> expects 2 type arguments, got 1"));

    let full = serde_json::json!({
        "template": { "name": "Repository", "arity": 2 },
        "type_arguments": ["A", "B"]
    });
    let closed: CapabilitySignature = serde_json::from_value(full).unwrap();
    assert_eq!(closed, CapabilitySignature::closed(repository(), ["A", "B"]).unwrap());

    let open: CapabilitySignature =
        serde_json::from_value(serde_json::json!({ "template": { "name": "Repository", "arity": 2 } }))
            .unwrap();
    assert!(open.is_open());

    let plain: CapabilitySignature =
        serde_json::from_value(serde_json::json!({ "template": { "name": "TestRepository" } }))
            .unwrap();
    assert_eq!(plain, CapabilitySignature::plain("TestRepository"));
}
