//! Error Extension Tests

use std::io;
use veneer_domain::error::{Error, Result};
use veneer_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert_eq!(message, "failed to read file: file not found");
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let parse_error = "abc".parse::<u32>().unwrap_err();

    let result: Result<u32> = Err(parse_error).config_context("bad arity");
    let err = result.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().starts_with("Configuration error: bad arity: "));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 7);

    let failed: std::result::Result<u8, io::Error> = Err(io::Error::other("boom"));
    let err = failed.with_context(|| "step 3".to_string()).unwrap_err();
    assert!(err.to_string().contains("step 3: boom"));
}

#[test]
fn test_context_defaults_to_configuration() {
    let failed: std::result::Result<(), io::Error> = Err(io::Error::other("nope"));
    assert!(failed.context("loading").unwrap_err().is_configuration());
}
