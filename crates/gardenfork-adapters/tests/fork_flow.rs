//! End-to-end fork engine tests over the in-memory filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gardenfork_adapters::{MemoryFs, NoopVcs, StaticSource};
use gardenfork_core::RECORD_FILE;
use gardenfork_core::application::{
    ApplicationError, ForkEngine, ForkRequest, MetadataRecorder, SourceError,
    ports::{SourceProvider, WorkspaceFs},
};
use gardenfork_core::domain::{CorePattern, ProjectTemplate, SourceRoot};
use gardenfork_core::error::{ForkError, ForkResult};

const SOURCE: &str = "/garden";

fn template() -> ProjectTemplate {
    ProjectTemplate::new("nodepad", "Pure NodePad", "Clean NodePad", "nodepad.html")
}

/// Source tree used by most tests.
fn seeded_fs() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("/garden/README.md", "# Garden");
    fs.add_file("/garden/docs/a.md", "alpha");
    fs.add_file("/garden/docs/b.md", "beta");
    fs.add_file("/garden/docs/notes.txt", "not markdown");
    fs.add_file("/garden/contexts/ctx1.md", "context one");
    fs.add_file("/garden/contexts/deep/ctx2.md", "context two");
    fs
}

fn engine(fs: &MemoryFs, patterns: Vec<CorePattern>) -> ForkEngine {
    ForkEngine::new(
        Box::new(StaticSource::new(SOURCE)),
        Arc::new(fs.clone()),
        Box::new(NoopVcs::new()),
        patterns,
    )
}

fn scenario_patterns() -> Vec<CorePattern> {
    vec![
        CorePattern::filtered("docs", "md"),
        CorePattern::file("README.md"),
        CorePattern::file("missing.txt"),
    ]
}

#[test]
fn fork_copies_patterns_and_reports_missing() {
    let fs = seeded_fs();
    let engine = engine(&fs, scenario_patterns());

    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();

    // docs/a.md + docs/b.md + README.md; missing.txt reported, not fatal.
    assert_eq!(report.copy.total_files(), 3);
    assert_eq!(report.copy.missing_count(), 1);
    assert_eq!(report.copy.failed_count(), 0);

    assert!(fs.is_file(Path::new("/work/proj/docs/a.md")));
    assert!(fs.is_file(Path::new("/work/proj/docs/b.md")));
    assert!(fs.is_file(Path::new("/work/proj/README.md")));
    // Extension filter excluded the txt file.
    assert!(!fs.exists(Path::new("/work/proj/docs/notes.txt")));
    // Starter overlay and record were written.
    assert!(fs.is_file(Path::new("/work/proj/nodepad.html")));
    assert!(fs.is_file(&Path::new("/work/proj").join(RECORD_FILE)));
}

#[test]
fn existing_destination_is_refused_and_untouched() {
    let fs = seeded_fs();
    fs.add_file("/work/proj/precious.txt", "keep me");
    let engine = engine(&fs, scenario_patterns());

    let err = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap_err();

    assert!(matches!(
        err,
        ForkError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert_eq!(
        fs.file_content(Path::new("/work/proj/precious.txt")).as_deref(),
        Some("keep me")
    );
    assert!(!fs.exists(&Path::new("/work/proj").join(RECORD_FILE)));
}

#[test]
fn overwrite_replaces_existing_destination() {
    let fs = seeded_fs();
    fs.add_file("/work/proj/stale.txt", "old");
    let engine = engine(&fs, scenario_patterns());

    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work").overwrite(true))
        .unwrap();

    assert_eq!(report.copy.total_files(), 3);
    assert!(!fs.exists(Path::new("/work/proj/stale.txt")));
    assert!(fs.is_file(Path::new("/work/proj/README.md")));
}

/// Source provider whose resolution always fails with a network error.
struct UnreachableSource;

impl SourceProvider for UnreachableSource {
    fn resolve(&self) -> ForkResult<SourceRoot> {
        Err(ApplicationError::Source(SourceError::Network {
            url: "https://github.com/example/garden".to_string(),
            reason: "connection refused".to_string(),
        })
        .into())
    }
}

#[test]
fn overwrite_spares_destination_when_source_is_unreachable() {
    let fs = seeded_fs();
    fs.add_file("/work/proj/precious.txt", "keep me");
    let engine = ForkEngine::new(
        Box::new(UnreachableSource),
        Arc::new(fs.clone()),
        Box::new(NoopVcs::new()),
        scenario_patterns(),
    );

    let err = engine
        .fork(ForkRequest::new("proj", template(), "/work").overwrite(true))
        .unwrap_err();

    assert!(matches!(
        err,
        ForkError::Application(ApplicationError::Source(SourceError::Network { .. }))
    ));
    // The old project survives an aborted forced fork.
    assert_eq!(
        fs.file_content(Path::new("/work/proj/precious.txt")).as_deref(),
        Some("keep me")
    );
}

#[test]
fn whole_directory_copy_replaces_never_merges() {
    let fs = seeded_fs();
    let engine = engine(&fs, vec![CorePattern::directory("contexts")]);

    engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();
    assert!(fs.is_file(Path::new("/work/proj/contexts/deep/ctx2.md")));

    // Upstream removed a file; the second fork must not carry it over.
    fs.delete_file(Path::new("/garden/contexts/deep/ctx2.md"));
    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work").overwrite(true))
        .unwrap();

    assert_eq!(report.copy.total_files(), 1);
    assert!(fs.is_file(Path::new("/work/proj/contexts/ctx1.md")));
    assert!(!fs.exists(Path::new("/work/proj/contexts/deep/ctx2.md")));
}

#[test]
fn discovery_matches_real_copy_counts() {
    let fs = seeded_fs();
    let engine = engine(&fs, scenario_patterns());

    let discovered = engine.discover().unwrap();
    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();

    assert_eq!(discovered.total_files(), report.copy.total_files());
    assert_eq!(discovered.missing_count(), report.copy.missing_count());
    // Discovery wrote nothing.
    assert!(!fs.exists(Path::new("/work")));
}

#[test]
fn two_forks_produce_identical_trees() {
    let fs = seeded_fs();
    let engine = engine(&fs, scenario_patterns());

    engine
        .fork(ForkRequest::new("one", template(), "/work"))
        .unwrap();
    engine
        .fork(ForkRequest::new("two", template(), "/work"))
        .unwrap();

    let relative = |root: &str| -> Vec<(PathBuf, Option<String>)> {
        let root = PathBuf::from(root);
        let mut out: Vec<_> = fs
            .list_files()
            .into_iter()
            .filter(|p| p.starts_with(&root))
            .map(|p| {
                let rel = p.strip_prefix(&root).unwrap().to_path_buf();
                let content = if p.ends_with(RECORD_FILE) {
                    // Records differ by name/timestamp by design.
                    None
                } else {
                    Some(fs.file_content(&p).unwrap())
                };
                (rel, content)
            })
            .collect();
        out.sort();
        out
    };

    assert_eq!(relative("/work/one"), relative("/work/two"));
}

#[test]
fn record_round_trips_through_listing() {
    let fs = seeded_fs();
    let engine = engine(&fs, scenario_patterns());

    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();

    let recorder = MetadataRecorder::new(&fs);
    let loaded = recorder.read(Path::new("/work/proj")).unwrap();
    assert_eq!(loaded.template, report.record.template);
    assert_eq!(loaded.created, report.record.created);
    assert_eq!(loaded.forked_from, SOURCE);
    assert_eq!(loaded.deploy_status, "not deployed");

    let projects = recorder.scan(Path::new("/work")).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].1.name, "proj");
}

#[test]
fn directory_without_record_is_not_listed() {
    let fs = seeded_fs();
    fs.add_file("/work/garbage/leftover.txt", "");
    let engine = engine(&fs, scenario_patterns());
    engine
        .fork(ForkRequest::new("real", template(), "/work"))
        .unwrap();

    let projects = MetadataRecorder::new(&fs).scan(Path::new("/work")).unwrap();
    let names: Vec<_> = projects.iter().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(names, vec!["real"]);
}

#[test]
fn corrupt_record_is_skipped_by_listing() {
    let fs = seeded_fs();
    fs.add_file("/work/broken/.garden-project.json", "{not json");
    let engine = engine(&fs, scenario_patterns());
    engine
        .fork(ForkRequest::new("real", template(), "/work"))
        .unwrap();

    let projects = MetadataRecorder::new(&fs).scan(Path::new("/work")).unwrap();
    let names: Vec<_> = projects.iter().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(names, vec!["real"]);
}

#[test]
fn empty_source_warns_but_succeeds() {
    let fs = MemoryFs::new();
    fs.add_dir(SOURCE);
    let engine = engine(&fs, scenario_patterns());

    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();

    assert_eq!(report.copy.total_files(), 0);
    assert!(report.warnings.iter().any(|w| w.contains("no core files")));
    // The starter and record still make it a valid (if bare) fork.
    assert!(fs.is_file(Path::new("/work/proj/nodepad.html")));
}

#[test]
fn invalid_project_name_is_rejected_before_any_write() {
    let fs = seeded_fs();
    let engine = engine(&fs, scenario_patterns());

    assert!(engine
        .fork(ForkRequest::new("bad name", template(), "/work"))
        .is_err());
    assert!(!fs.exists(Path::new("/work")));
}

// ── per-entry continuation inside a filtered pattern ─────────────────────────

/// Delegating filesystem that refuses to copy one specific source file.
#[derive(Clone)]
struct OneCopyFails(MemoryFs, PathBuf);

impl WorkspaceFs for OneCopyFails {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        self.0.is_file(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        self.0.is_dir(path)
    }
    fn walk_files(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        self.0.walk_files(dir)
    }
    fn read_dir(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        self.0.read_dir(dir)
    }
    fn create_dir_all(&self, path: &Path) -> ForkResult<()> {
        self.0.create_dir_all(path)
    }
    fn copy_file(&self, src: &Path, dest: &Path) -> ForkResult<()> {
        if src == self.1 {
            return Err(ApplicationError::Filesystem {
                path: src.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        self.0.copy_file(src, dest)
    }
    fn write_file(&self, path: &Path, content: &str) -> ForkResult<()> {
        self.0.write_file(path, content)
    }
    fn read_file(&self, path: &Path) -> ForkResult<String> {
        self.0.read_file(path)
    }
    fn remove_dir_all(&self, path: &Path) -> ForkResult<()> {
        self.0.remove_dir_all(path)
    }
}

#[test]
fn filtered_pattern_continues_past_a_failing_entry() {
    let fs = seeded_fs();
    let failing = OneCopyFails(fs.clone(), PathBuf::from("/garden/docs/a.md"));
    let engine = ForkEngine::new(
        Box::new(StaticSource::new(SOURCE)),
        Arc::new(failing),
        Box::new(NoopVcs::new()),
        vec![CorePattern::filtered("docs", "md")],
    );

    let report = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap();

    // The sibling entry still lands even though one entry failed.
    assert_eq!(report.copy.failed_count(), 1);
    assert!(fs.is_file(Path::new("/work/proj/docs/b.md")));
    assert!(!fs.exists(Path::new("/work/proj/docs/a.md")));
    let failed = report
        .copy
        .outcomes()
        .iter()
        .find(|o| matches!(o, gardenfork_core::domain::CopyOutcome::Failed { .. }));
    assert!(failed.is_some());
}

// ── all-or-nothing on metadata failure ───────────────────────────────────────

/// Delegating filesystem whose record writes fail.
#[derive(Clone)]
struct RecordWriteFails(MemoryFs);

impl WorkspaceFs for RecordWriteFails {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        self.0.is_file(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        self.0.is_dir(path)
    }
    fn walk_files(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        self.0.walk_files(dir)
    }
    fn read_dir(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        self.0.read_dir(dir)
    }
    fn create_dir_all(&self, path: &Path) -> ForkResult<()> {
        self.0.create_dir_all(path)
    }
    fn copy_file(&self, src: &Path, dest: &Path) -> ForkResult<()> {
        self.0.copy_file(src, dest)
    }
    fn write_file(&self, path: &Path, content: &str) -> ForkResult<()> {
        if path.ends_with(RECORD_FILE) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.0.write_file(path, content)
    }
    fn read_file(&self, path: &Path) -> ForkResult<String> {
        self.0.read_file(path)
    }
    fn remove_dir_all(&self, path: &Path) -> ForkResult<()> {
        self.0.remove_dir_all(path)
    }
}

#[test]
fn metadata_failure_rolls_back_the_destination() {
    let fs = seeded_fs();
    let failing = RecordWriteFails(fs.clone());
    let engine = ForkEngine::new(
        Box::new(StaticSource::new(SOURCE)),
        Arc::new(failing),
        Box::new(NoopVcs::new()),
        scenario_patterns(),
    );

    let err = engine
        .fork(ForkRequest::new("proj", template(), "/work"))
        .unwrap_err();
    assert!(matches!(
        err,
        ForkError::Application(ApplicationError::MetadataWrite { .. })
    ));

    // All-or-nothing: nothing under /work/proj survives the abort.
    assert!(!fs.exists(Path::new("/work/proj")));
    assert!(fs.list_files().iter().all(|p| !p.starts_with("/work/proj")));
}
