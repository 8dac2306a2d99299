//! Error taxonomy tests

use veneer_domain::{CapabilitySignature, Error, TemplateId};

fn repo(req: &str, resp: &str) -> CapabilitySignature {
    CapabilitySignature::closed(TemplateId::new("Repository", 2), [req, resp]).unwrap()
}

#[test]
fn test_duplicate_message_names_capability() {
    let err = Error::duplicate(repo("ARequest", "AResponse"));
    assert_eq!(
        err.to_string(),
        "Duplicate registration: a base provider for Repository<ARequest, AResponse> is already installed"
    );
}

#[test]
fn test_unresolved_message_names_capability() {
    let err = Error::unresolved(CapabilitySignature::plain("TestRepository"));
    assert_eq!(
        err.to_string(),
        "Unresolved capability: no provider registered for TestRepository"
    );
}

#[test]
fn test_ambiguous_message_lists_candidates() {
    let err = Error::ambiguous(
        "DualRepository",
        vec![repo("ARequest", "AResponse"), repo("BRequest", "BResponse")],
    );
    let message = err.to_string();
    assert!(message.contains("DualRepository satisfies 2 capabilities"));
    assert!(message.contains("Repository<ARequest, AResponse>, Repository<BRequest, BResponse>"));
}

#[test]
fn test_configuration_with_source_keeps_source() {
    let io = std::io::Error::other("boom");
    let err = Error::configuration_with_source("bad config", io);
    assert!(err.is_configuration());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_io_with_source_keeps_source() {
    let err = Error::io_with_source("write failed", std::io::Error::other("disk full"));
    assert!(!err.is_configuration());
    assert_eq!(err.to_string(), "I/O error: write failed");
    assert!(std::error::Error::source(&err).is_some());
}
