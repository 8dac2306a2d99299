//! Ports
//!
//! Interfaces to the collaborators the engine depends on but does not own.

pub mod discovery;
