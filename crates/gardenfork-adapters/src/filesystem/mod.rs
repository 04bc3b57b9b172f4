//! Filesystem adapters implementing the `WorkspaceFs` port.

pub mod local;
pub mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;
