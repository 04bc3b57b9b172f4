//! Command handlers, one module per subcommand.

pub mod completions;
pub mod fork;
pub mod list;
pub mod status;
pub mod templates;
