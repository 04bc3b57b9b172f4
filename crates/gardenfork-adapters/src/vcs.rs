//! Version-control adapters implementing the `Vcs` port.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use gardenfork_core::application::ports::Vcs;

/// Git adapter: init, stage all, commit. Output is captured, not shown;
/// only success or failure reaches the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVcs;

impl GitVcs {
    pub fn new() -> Self {
        Self
    }

    fn run(dir: &Path, args: &[&str]) -> Result<(), String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| format!("git {}: {e}", args.first().unwrap_or(&"")))?;

        if output.status.success() {
            debug!(?args, "git command succeeded");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!(
                "git {} exited with {}: {}",
                args.first().unwrap_or(&""),
                output.status,
                stderr.trim()
            ))
        }
    }
}

impl Vcs for GitVcs {
    fn initialize(&self, dir: &Path, message: &str) -> Result<(), String> {
        Self::run(dir, &["init"])?;
        Self::run(dir, &["add", "."])?;
        Self::run(dir, &["commit", "-m", message])?;
        Ok(())
    }
}

/// Does nothing. For tests and `--no-git`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVcs;

impl NoopVcs {
    pub fn new() -> Self {
        Self
    }
}

impl Vcs for NoopVcs {
    fn initialize(&self, _dir: &Path, _message: &str) -> Result<(), String> {
        Ok(())
    }
}
