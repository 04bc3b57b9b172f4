//! Infrastructure adapters for gardenfork.
//!
//! This crate implements the ports defined in
//! `gardenfork_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin;
pub mod filesystem;
pub mod source;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFs, MemoryFs};
pub use source::{LocalSource, RemoteConfig, RemoteSource, StaticSource};
pub use vcs::{GitVcs, NoopVcs};
