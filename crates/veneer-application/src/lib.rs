//! Application Layer - veneer
//!
//! The composition engine: decides which capability each discovered type
//! provides, and layers decorators around previously registered providers.
//!
//! ## Flow
//!
//! ```text
//! Discovery ──► Vec<Component<P>>
//!                    │
//!                    ▼
//!              Registrar ── matcher::match_base / match_decorator
//!                    │
//!        ┌───────────┴────────────┐
//!        ▼                        ▼
//!  Registry::install_base   Registry::install_decorator
//!        │                        │
//!        └──────► RegistryEntry { Chain<P> } ◄──┘
//!                    │
//!                    ▼
//!           Registry::resolve ──► Arc<P>
//! ```
//!
//! `P` is the provider trait object every capability in one registry shares
//! (for example `dyn Repository`). Decorators receive and return `Arc<P>`,
//! which is what lets a single generic decorator wrap every specialization
//! of a template.

pub mod chain;
pub mod matcher;
pub mod ports;
pub mod registrar;
pub mod registry;

pub use chain::{BaseFactory, BaseProvider, Chain, DecoratorFactory, DecoratorLayer};
pub use matcher::{AmbiguityPolicy, CapabilityTarget, MatchPolicy, match_base, match_decorator};
pub use ports::discovery::{
    Component, ComponentEntry, Construct, Discovery, EntryConstruct, SliceDiscovery,
    StaticDiscovery,
};
pub use registrar::Registrar;
pub use registry::{ChainDescription, Registry, RegistryEntry, RegistryReport};
