//! Core domain layer for gardenfork.
//!
//! Pure data and business rules: what a core pattern is, what a copy plan
//! looks like, and what makes a directory a valid fork. All I/O goes through
//! the ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable during a run**: pattern lists and the template catalog are
//!   read-only once a fork starts

pub mod error;
pub mod outcome;
pub mod pattern;
pub mod record;
pub mod source;
pub mod template;

mod validation;

pub use error::DomainError;
pub use outcome::{CopyOutcome, CopyResult};
pub use pattern::{CopyPlan, CorePattern, PatternKind, PlanEntry, PlanKind, ResolvedPattern};
pub use record::ForkRecord;
pub use source::{SourceOrigin, SourceRoot};
pub use template::ProjectTemplate;
pub use validation::validate_project_name;
