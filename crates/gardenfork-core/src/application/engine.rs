//! Fork Engine - main application orchestrator.
//!
//! Sequences a fork through its stages:
//!
//! `ResolvingSource → CopyingCore → OverlayingTemplate → WritingMetadata →
//! InitializingVcs (best-effort) → Done`
//!
//! Any structural failure before metadata is written moves to `Aborted`:
//! the partially created destination directory is deleted and the source
//! root's temporary storage is released, so listing operations never mistake
//! a half-forked tree for a valid project. Version-control failure is
//! non-fatal and only surfaces a warning.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::{SourceProvider, Vcs, WorkspaceFs};
use crate::application::{Copier, MetadataRecorder, PatternResolver, TemplateOverlay, copier};
use crate::domain::{CopyResult, CorePattern, ForkRecord, ProjectTemplate, validate_project_name};
use crate::error::ForkResult;

/// Stage of the fork state machine, for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkStage {
    ResolvingSource,
    CopyingCore,
    OverlayingTemplate,
    WritingMetadata,
    InitializingVcs,
}

impl std::fmt::Display for ForkStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ResolvingSource => "resolving source",
            Self::CopyingCore => "copying core files",
            Self::OverlayingTemplate => "overlaying template",
            Self::WritingMetadata => "writing metadata",
            Self::InitializingVcs => "initializing version control",
        };
        f.write_str(s)
    }
}

/// One fork request.
#[derive(Debug, Clone)]
pub struct ForkRequest {
    pub name: String,
    pub template: ProjectTemplate,
    /// Directory the project directory is created under.
    pub dest_root: PathBuf,
    /// Replace an existing destination instead of refusing. Off by default;
    /// the caller must have confirmed explicitly.
    pub overwrite: bool,
}

impl ForkRequest {
    pub fn new(
        name: impl Into<String>,
        template: ProjectTemplate,
        dest_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            template,
            dest_root: dest_root.into(),
            overwrite: false,
        }
    }

    pub fn overwrite(mut self, yes: bool) -> Self {
        self.overwrite = yes;
        self
    }
}

/// Everything a completed fork produced.
#[derive(Debug, Clone)]
pub struct ForkReport {
    pub project_dir: PathBuf,
    pub record: ForkRecord,
    pub copy: CopyResult,
    /// Non-fatal problems (version-control failure, zero files copied).
    pub warnings: Vec<String>,
}

/// Orchestrates source resolution, core copy, overlay, and metadata.
pub struct ForkEngine {
    source: Box<dyn SourceProvider>,
    fs: Arc<dyn WorkspaceFs>,
    vcs: Box<dyn Vcs>,
    patterns: Vec<CorePattern>,
}

impl ForkEngine {
    pub fn new(
        source: Box<dyn SourceProvider>,
        fs: Arc<dyn WorkspaceFs>,
        vcs: Box<dyn Vcs>,
        patterns: Vec<CorePattern>,
    ) -> Self {
        Self {
            source,
            fs,
            vcs,
            patterns,
        }
    }

    /// Run a full fork.
    #[instrument(skip_all, fields(project = %request.name, template = %request.template.id))]
    pub fn fork(&self, request: ForkRequest) -> ForkResult<ForkReport> {
        validate_project_name(&request.name)?;

        let project_dir = request.dest_root.join(&request.name);
        if self.fs.exists(&project_dir) && !request.overwrite {
            return Err(ApplicationError::DestinationExists {
                path: project_dir,
            }
            .into());
        }

        // The source root owns any temp storage; dropping it at the end of
        // this function releases it on success and on every failure path.
        debug!(stage = %ForkStage::ResolvingSource, "fork stage");
        let source_root = self.source.resolve()?;
        info!(source = %source_root.path().display(), "source resolved");

        // An existing destination is only removed once the source is in
        // hand, so an unreachable source never costs the user their
        // previous project.
        if self.fs.exists(&project_dir) {
            info!(path = %project_dir.display(), "replacing existing destination");
            self.fs.remove_dir_all(&project_dir)?;
        }

        self.fs.create_dir_all(&project_dir)?;

        let provenance = source_root.origin().provenance();
        let (record, copy) =
            match self.build(&request, &project_dir, source_root.path(), &provenance) {
                Ok(done) => done,
                Err(e) => {
                    warn!(error = %e, "fork aborted, rolling back destination");
                    self.rollback(&project_dir);
                    return Err(e);
                }
            };

        let mut warnings = Vec::new();
        if copy.total_files() == 0 {
            warnings.push(
                "no core files were copied; the source tree may not be a garden".to_string(),
            );
        }

        // Version control is best-effort: the file tree is already useful.
        debug!(stage = %ForkStage::InitializingVcs, "fork stage");
        let message = format!(
            "Initial commit: {} forked from {} ({})",
            request.name,
            record.forked_from,
            request.template.id,
        );
        if let Err(reason) = self.vcs.initialize(&project_dir, &message) {
            warn!(reason, "version-control init failed");
            warnings.push(format!("version-control init failed: {reason}"));
        }

        info!(
            files = copy.total_files(),
            missing = copy.missing_count(),
            failed = copy.failed_count(),
            "fork completed"
        );
        Ok(ForkReport {
            project_dir,
            record,
            copy,
            warnings,
        })
    }

    /// Discovery mode: resolve the source and report the copy result a real
    /// fork would produce, without writing anything.
    #[instrument(skip_all)]
    pub fn discover(&self) -> ForkResult<CopyResult> {
        let source_root = self.source.resolve()?;
        let plan =
            PatternResolver::new(self.fs.as_ref()).expand(&self.patterns, source_root.path())?;
        Ok(copier::discover(&plan))
    }

    // ── internal stages ───────────────────────────────────────────────────

    /// Copy, overlay, and record. Called with the destination directory
    /// already created; any error here triggers rollback in `fork`.
    fn build(
        &self,
        request: &ForkRequest,
        project_dir: &Path,
        source_root: &Path,
        provenance: &str,
    ) -> ForkResult<(ForkRecord, CopyResult)> {
        let fs = self.fs.as_ref();

        debug!(stage = %ForkStage::CopyingCore, "fork stage");
        let plan = PatternResolver::new(fs).expand(&self.patterns, source_root)?;
        let copy = Copier::new(fs).apply(&plan, project_dir);

        debug!(stage = %ForkStage::OverlayingTemplate, "fork stage");
        TemplateOverlay::new(fs).materialize(&request.template, project_dir, source_root)?;

        debug!(stage = %ForkStage::WritingMetadata, "fork stage");
        let record = ForkRecord::new(&request.name, &request.template.id, provenance);
        MetadataRecorder::new(fs).write(project_dir, &record)?;

        Ok((record, copy))
    }

    /// Best-effort rollback of a partially created destination.
    fn rollback(&self, project_dir: &Path) {
        if let Err(e) = self.fs.remove_dir_all(project_dir) {
            warn!(error = %e, path = %project_dir.display(), "rollback failed");
        } else {
            info!("rollback successful");
        }
    }
}
