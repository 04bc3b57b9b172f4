//! End-to-end CLI tests driving the real binary against a fixture garden.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gardenfork() -> Command {
    Command::cargo_bin("gardenfork").expect("binary builds")
}

/// Lay down a minimal but recognisable garden source tree.
fn fixture_garden(root: &Path) {
    fs::create_dir_all(root.join("contexts")).unwrap();
    fs::write(root.join("contexts/behindTheScenes.md"), "# context\n").unwrap();
    fs::create_dir_all(root.join("toolshed")).unwrap();
    fs::write(root.join("toolshed/nodepad-4.0.0.html"), "<html></html>\n").unwrap();
    fs::create_dir_all(root.join("sunflower")).unwrap();
    fs::write(root.join("sunflower/app.py"), "print('hi')\n").unwrap();
    fs::write(root.join("README.md"), "# Garden\n").unwrap();
    fs::write(root.join(".gitignore"), "__pycache__/\n").unwrap();
}

#[test]
fn help_lists_subcommands() {
    gardenfork()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fork"))
        .stdout(predicate::str::contains("templates"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    gardenfork()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    gardenfork().assert().failure().code(2);
}

#[test]
fn templates_table_lists_all_five() {
    let mut assert = gardenfork().arg("templates").assert().success();
    for id in ["recipe", "budget", "planning", "sailing", "nodepad"] {
        assert = assert.stdout(predicate::str::contains(id));
    }
}

#[test]
fn templates_list_format_is_ids_only() {
    gardenfork()
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe\n"))
        .stdout(predicate::str::contains("nodepad\n"));
}

#[test]
fn fork_creates_project_with_record() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(&dest).unwrap();

    gardenfork()
        .args(["fork", "my-recipes", "--template", "recipe", "--yes", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("patterns missing"))
        .stdout(predicate::str::contains("entries failed"))
        .stdout(predicate::str::contains("open recipe-nodepad.html"));

    let project = dest.join("my-recipes");
    assert!(project.join("contexts/behindTheScenes.md").is_file());
    assert!(project.join("README.md").is_file());
    assert!(project.join(".garden-project.json").is_file());
    // Starter overlay falls back to a placeholder when the starter file is
    // absent from the fixture.
    assert!(project.join("recipe-nodepad.html").is_file());

    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join(".garden-project.json")).unwrap())
            .unwrap();
    assert_eq!(record["name"], "my-recipes");
    assert_eq!(record["template"], "recipe");
    assert_eq!(record["deploy_status"], "not deployed");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(&dest).unwrap();

    gardenfork()
        .args(["fork", "preview", "--template", "nodepad", "--dry-run", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!dest.join("preview").exists());
}

#[test]
fn existing_destination_fails_without_force() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(dest.join("taken")).unwrap();
    fs::write(dest.join("taken/keep.txt"), "precious").unwrap();

    gardenfork()
        .args(["fork", "taken", "--template", "recipe", "--yes", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    // Untouched.
    assert_eq!(fs::read_to_string(dest.join("taken/keep.txt")).unwrap(), "precious");
}

#[test]
fn force_replaces_existing_destination() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(dest.join("taken")).unwrap();
    fs::write(dest.join("taken/stale.txt"), "old").unwrap();

    gardenfork()
        .args(["fork", "taken", "--template", "recipe", "--yes", "--force", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success();

    assert!(!dest.join("taken/stale.txt").exists());
    assert!(dest.join("taken/.garden-project.json").is_file());
}

#[test]
fn unknown_template_exits_not_found() {
    gardenfork()
        .args(["fork", "x", "--template", "garage", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn missing_source_exits_not_found() {
    let temp = TempDir::new().unwrap();
    gardenfork()
        .args(["fork", "x", "--template", "recipe", "--yes", "--no-git"])
        .arg("--source")
        .arg(temp.path().join("nowhere"))
        .assert()
        .failure()
        .code(3);
}

#[test]
fn list_shows_forked_projects_only() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(dest.join("not-a-fork")).unwrap();

    gardenfork()
        .args(["fork", "real-fork", "--template", "sailing", "--yes", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success();

    gardenfork()
        .arg("list")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("real-fork"))
        .stdout(predicate::str::contains("not-a-fork").not());
}

#[test]
fn status_reads_the_record_back() {
    let temp = TempDir::new().unwrap();
    let garden = temp.path().join("garden");
    let dest = temp.path().join("projects");
    fixture_garden(&garden);
    fs::create_dir_all(&dest).unwrap();

    gardenfork()
        .args(["fork", "voyage", "--template", "sailing", "--yes", "--no-git"])
        .arg("--source")
        .arg(&garden)
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success();

    gardenfork()
        .arg("status")
        .arg(dest.join("voyage"))
        .assert()
        .success()
        .stdout(predicate::str::contains("voyage"))
        .stdout(predicate::str::contains("sailing"))
        .stdout(predicate::str::contains("not deployed"));
}

#[test]
fn status_of_plain_directory_exits_not_found() {
    let temp = TempDir::new().unwrap();
    gardenfork()
        .arg("status")
        .arg(temp.path())
        .assert()
        .failure()
        .code(3);
}

#[test]
fn completions_generate_for_bash() {
    gardenfork()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gardenfork"));
}
