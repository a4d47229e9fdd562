//! Integration tests for the render command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

fn project_tree() -> Command {
    Command::cargo_bin("project-tree").unwrap()
}

fn create_node_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("node_modules/left-pad")).unwrap();
    File::create(root.join("node_modules/left-pad/index.js")).unwrap();
    File::create(root.join("x.ts")).unwrap();

    dir
}

#[test]
fn test_render_basic() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("a.txt")).unwrap();
    File::create(dir.path().join("b.txt")).unwrap();

    let output = project_tree()
        .arg("render")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "├── a.txt\n└── b.txt\n"
    );
}

#[test]
fn test_render_default_fallback_hides_node_modules() {
    let dir = create_node_project();

    project_tree()
        .arg("render")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x.ts"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("left-pad").not());
}

#[test]
fn test_render_gitignore_replaces_fallback() {
    let dir = create_node_project();
    // A present ignore file takes over entirely; the fallback defaults
    // (including node_modules) no longer apply.
    fs::write(dir.path().join(".gitignore"), "*.ts\n").unwrap();

    project_tree()
        .arg("render")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("x.ts").not());
}

#[test]
fn test_render_glob_pattern_at_depth() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("logs/archive")).unwrap();
    File::create(root.join("logs/archive/old.log")).unwrap();
    File::create(root.join("run.log")).unwrap();
    File::create(root.join("run.log.txt")).unwrap();
    fs::write(root.join(".gitignore"), "*.log\n").unwrap();

    project_tree()
        .arg("render")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("run.log.txt"))
        .stdout(predicate::str::contains("old.log").not())
        .stdout(predicate::str::contains("run.log\n").not());
}

#[test]
fn test_render_comments_and_directory_pattern() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("build")).unwrap();
    File::create(root.join("build/main.o")).unwrap();
    File::create(root.join("main.c")).unwrap();
    fs::write(root.join(".gitignore"), "# ignore build output\nbuild/\n").unwrap();

    project_tree()
        .arg("render")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("main.c"))
        .stdout(predicate::str::contains("build").not());
}

#[test]
fn test_render_nested_connectors() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("src")).unwrap();
    File::create(root.join("src/lib.rs")).unwrap();
    File::create(root.join("src/main.rs")).unwrap();
    File::create(root.join("zzz.toml")).unwrap();

    let output = project_tree().arg("render").arg(root).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "├── src\n│   ├── lib.rs\n│   └── main.rs\n└── zzz.toml\n"
    );
}

#[test]
fn test_render_custom_fallback_flag() {
    let dir = create_node_project();
    fs::create_dir(dir.path().join("dist")).unwrap();

    // Only "dist" in the fallback: node_modules becomes visible
    project_tree()
        .arg("render")
        .arg("--fallback")
        .arg("dist")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("dist").not());
}

#[test]
fn test_render_custom_ignore_file_name() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("keep.txt")).unwrap();
    File::create(dir.path().join("drop.txt")).unwrap();
    fs::write(dir.path().join(".treeignore"), "drop.txt\n").unwrap();

    project_tree()
        .arg("render")
        .arg("--ignore-file")
        .arg(".treeignore")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.txt"))
        .stdout(predicate::str::contains("drop.txt").not());
}

#[test]
fn test_render_config_file_fallback() {
    let dir = create_node_project();

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    let mut config = File::create(&config_path).unwrap();
    writeln!(config, "[ignore]\nfallback_patterns = [\"x.ts\"]").unwrap();

    project_tree()
        .arg("--config")
        .arg(&config_path)
        .arg("render")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("x.ts").not());
}

#[test]
fn test_render_parallel_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for d in 0..5 {
        let subdir = root.join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();
        for f in 0..5 {
            File::create(subdir.join(format!("file{}.txt", f))).unwrap();
        }
    }

    let sequential = project_tree().arg("render").arg(root).output().unwrap();
    let parallel = project_tree()
        .arg("render")
        .arg("--parallel")
        .arg(root)
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_render_empty_directory_prints_nothing() {
    let dir = TempDir::new().unwrap();

    let output = project_tree()
        .arg("render")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_render_nonexistent_path_fails() {
    project_tree()
        .arg("render")
        .arg("/nonexistent/path/12345")
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn test_render_unreadable_subdirectory_fails() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    File::create(dir.path().join("ok.txt")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Running as root, the directory stays readable and the failure cannot
    // be provoked; skip in that case.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    project_tree()
        .arg("render")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_render_with_verbose_flag() {
    let dir = TempDir::new().unwrap();

    project_tree()
        .arg("-v")
        .arg("render")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_completions_bash() {
    project_tree()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("project-tree"));
}
