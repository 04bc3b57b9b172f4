//! Implementation of the `gardenfork fork` command.
//!
//! Responsibility: translate CLI arguments into a `ForkRequest`, wire the
//! adapters into a `ForkEngine`, and display results. No business logic
//! lives here.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use gardenfork_adapters::{GitVcs, LocalFs, LocalSource, NoopVcs, RemoteSource, builtin};
use gardenfork_core::application::{
    ForkEngine, ForkRequest,
    ports::{SourceProvider, Vcs},
};
use gardenfork_core::domain::ProjectTemplate;

use crate::{
    cli::{ForkArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gardenfork fork` command.
///
/// Dispatch sequence:
/// 1. Resolve the template ID against the catalog
/// 2. Wire adapters (source, filesystem, version control) into the engine
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run` (discovery only, no writes)
/// 5. Run the fork
/// 6. Print per-pattern outcomes and next-steps guidance
#[instrument(skip_all, fields(project = %args.name, template = %args.template))]
pub fn execute(
    args: ForkArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve template
    let template =
        builtin::find_template(&args.template).ok_or_else(|| CliError::TemplateNotFound {
            id: args.template.clone(),
            available: builtin::template_ids(),
        })?;

    debug!(template = %template, starter = %template.starter_file, "template resolved");

    // 2. Wire the engine
    let engine = build_engine(&args, &config);

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&args, &template, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: resolve and describe, but write nothing.
    if args.dry_run {
        let discovered = engine.discover()?;
        output.header(&format!("Dry run: forking '{}'", args.name))?;
        for outcome in discovered.outcomes() {
            output.print(&format!("  {outcome}"))?;
        }
        output.info(&format!(
            "{} files would be copied ({} patterns missing)",
            discovered.total_files(),
            discovered.missing_count()
        ))?;
        return Ok(());
    }

    // 5. Fork
    output.header(&format!("Forking '{}'...", args.name))?;
    info!(project = %args.name, dest = %args.dest.display(), "fork started");

    let starter_file = template.starter_file.clone();
    let request = ForkRequest::new(&args.name, template, &args.dest).overwrite(args.force);
    let report = engine.fork(request)?;

    // 6. Outcomes, warnings, success
    for outcome in report.copy.outcomes() {
        output.print(&format!("  {outcome}"))?;
    }
    for warning in &report.warnings {
        output.warning(warning)?;
    }

    output.success(&format!(
        "Project '{}' forked from {} ({} files copied, {} patterns missing, {} entries failed)",
        args.name,
        report.record.forked_from,
        report.copy.total_files(),
        report.copy.missing_count(),
        report.copy.failed_count()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_dir.display()))?;
        output.print(&format!("  open {starter_file}"))?;
    }

    Ok(())
}

/// Assemble the engine from config and flags.
///
/// `--remote` selects archive download; `--source` pins a local directory;
/// otherwise the configured candidate list is probed.
fn build_engine(args: &ForkArgs, config: &AppConfig) -> ForkEngine {
    let source: Box<dyn SourceProvider> = if args.remote {
        Box::new(RemoteSource::new(
            config.remote.to_remote_config(args.branch.as_deref()),
        ))
    } else {
        let mut local = LocalSource::new(
            config.source.candidates.clone(),
            config.source.marker.clone(),
        );
        if let Some(path) = &args.source {
            local = local.with_explicit_path(path);
        }
        Box::new(local)
    };

    let vcs: Box<dyn Vcs> = if args.no_git {
        Box::new(NoopVcs::new())
    } else {
        Box::new(GitVcs::new())
    };

    ForkEngine::new(source, Arc::new(LocalFs::new()), vcs, builtin::core_patterns())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    args: &ForkArgs,
    template: &ProjectTemplate,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", args.name))?;
    out.print(&format!("  Template:  {template}"))?;
    let source = if args.remote {
        "remote archive".to_string()
    } else {
        match &args.source {
            Some(p) => p.display().to_string(),
            None => "auto-detected local garden".into(),
        }
    };
    out.print(&format!("  Source:    {source}"))?;
    out.print(&format!("  Location:  {}", args.dest.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
