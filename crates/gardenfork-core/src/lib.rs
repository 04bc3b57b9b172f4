//! Gardenfork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gardenfork
//! workspace-forking tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        gardenfork-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ForkEngine                   │
//! │   (resolve → copy → overlay → record)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │   (SourceProvider, WorkspaceFs, Vcs)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   gardenfork-adapters (Infrastructure)  │
//! │  (LocalSource, RemoteSource, LocalFs)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (CorePattern, CopyResult, ForkRecord)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gardenfork_core::application::{ForkEngine, ForkRequest};
//!
//! # fn demo(source: Box<dyn gardenfork_core::application::ports::SourceProvider>,
//! #         fs: std::sync::Arc<dyn gardenfork_core::application::ports::WorkspaceFs>,
//! #         vcs: Box<dyn gardenfork_core::application::ports::Vcs>,
//! #         patterns: Vec<gardenfork_core::domain::CorePattern>,
//! #         template: gardenfork_core::domain::ProjectTemplate) {
//! let engine = ForkEngine::new(source, fs, vcs, patterns);
//! let report = engine.fork(ForkRequest::new("my-garden", template, "./")).unwrap();
//! println!("copied {} files", report.copy.total_files());
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic + ports)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ForkEngine, ForkReport, ForkRequest,
        ports::{SourceProvider, Vcs, WorkspaceFs},
    };
    pub use crate::domain::{
        CopyOutcome, CopyResult, CorePattern, ForkRecord, PatternKind, ProjectTemplate,
        SourceOrigin, SourceRoot,
    };
    pub use crate::error::{ForkError, ForkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the persisted fork-provenance record at a project root.
///
/// Presence of this file, not directory existence alone, is what makes a
/// directory a recognized fork.
pub const RECORD_FILE: &str = ".garden-project.json";
