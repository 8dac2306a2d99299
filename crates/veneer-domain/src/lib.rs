//! Domain Layer - veneer
//!
//! Static facts the composition engine works on. Nothing in this crate
//! performs matching or owns mutable state.
//!
//! ## Contents
//!
//! - `value_objects::capability` - template identities, capability signatures
//!   and decorator marker kinds
//! - `value_objects::descriptor` - per-type descriptors produced by discovery
//! - `error` - the registration/resolution error taxonomy
//! - `constants` - well-known marker names and template arity defaults

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
