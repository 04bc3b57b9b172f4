//! Application layer: the fork engine, its components, and driven ports.

pub mod copier;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod overlay;
pub mod ports;
pub mod resolver;

pub use copier::Copier;
pub use engine::{ForkEngine, ForkReport, ForkRequest, ForkStage};
pub use error::{ApplicationError, SourceError};
pub use metadata::MetadataRecorder;
pub use overlay::TemplateOverlay;
pub use resolver::PatternResolver;
