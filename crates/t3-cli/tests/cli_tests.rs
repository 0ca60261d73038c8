//! End-to-end tests for the `t3` binary.
//!
//! Every invocation points `--config` into a temp dir and runs with a
//! non-terminal stdin, so prompts refuse instead of blocking.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_file(&self) -> PathBuf {
        self.path().join("settings/config.json")
    }

    fn t3(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("t3");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("T3_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_file());
        cmd
    }
}

// ── general ──────────────────────────────────────────────────────────────────

#[test]
fn version_flag() {
    cargo_bin_cmd!("t3")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cargo_bin_cmd!("t3").arg("frobnicate").assert().code(2);
}

#[test]
fn hello_greets() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["hello", "--name", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ada!"));
}

#[test]
fn status_shows_settings_location() {
    let sb = Sandbox::new();
    sb.t3()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("settings/config.json"))
        .stdout(predicate::str::contains("Templates"));
}

#[test]
fn no_color_env_accepts_conventional_values() {
    let sb = Sandbox::new();
    for value in ["1", "yes", "anything"] {
        sb.t3()
            .env("NO_COLOR", value)
            .args(["config", "set", "editor", "vim"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Set editor = vim"));
    }
}

#[test]
fn empty_no_color_env_is_ignored() {
    let sb = Sandbox::new();
    sb.t3()
        .env("NO_COLOR", "")
        .args(["hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"));
}

#[test]
fn completions_for_bash() {
    cargo_bin_cmd!("t3")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("t3"));
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn config_set_then_get() {
    let sb = Sandbox::new();

    sb.t3()
        .args(["config", "set", "editor", "vim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set editor = vim"));

    sb.t3()
        .args(["config", "get", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("editor = vim"));

    let raw = fs::read_to_string(sb.config_file()).unwrap();
    assert!(raw.contains("\"editor\": \"vim\""));
}

#[test]
fn config_get_missing_key_fails() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["config", "get", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key 'nope' not found"));
}

#[test]
fn config_delete_missing_key_fails_without_writing() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["config", "delete", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key 'nope' not found"));
    assert!(!sb.config_file().exists());
}

#[test]
fn get_and_delete_report_missing_key_identically() {
    let sb = Sandbox::new();
    let get = sb.t3().args(["config", "get", "nope"]).output().unwrap();
    let delete = sb.t3().args(["config", "delete", "nope"]).output().unwrap();

    assert_eq!(get.status.code(), Some(1));
    assert_eq!(delete.status.code(), Some(1));
    assert_eq!(get.stderr, delete.stderr);
    assert!(String::from_utf8_lossy(&get.stderr).contains("t3 config show"));
}

#[test]
fn config_delete_existing_key() {
    let sb = Sandbox::new();
    sb.t3().args(["config", "set", "a", "1"]).assert().success();

    sb.t3()
        .args(["config", "delete", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'a'"));

    assert_eq!(fs::read_to_string(sb.config_file()).unwrap().trim(), "{}");
}

#[test]
fn config_show_empty() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration found"));
}

#[test]
fn config_show_lists_entries() {
    let sb = Sandbox::new();
    sb.t3().args(["config", "set", "editor", "vim"]).assert().success();
    sb.t3().args(["config", "set", "theme", "dark"]).assert().success();

    sb.t3()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T3 CLI Configuration"))
        .stdout(predicate::str::contains("editor"))
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn config_show_json() {
    let sb = Sandbox::new();
    sb.t3().args(["config", "set", "editor", "vim"]).assert().success();

    let out = sb
        .t3()
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({ "editor": "vim" }));
}

#[test]
fn corrupt_settings_are_treated_as_empty() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.config_file().parent().unwrap()).unwrap();
    fs::write(sb.config_file(), "not valid json").unwrap();

    sb.t3()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration found"));
}

#[test]
fn config_reset_with_yes_removes_file() {
    let sb = Sandbox::new();
    sb.t3().args(["config", "set", "a", "1"]).assert().success();
    assert!(sb.config_file().exists());

    sb.t3()
        .args(["config", "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration reset"));
    assert!(!sb.config_file().exists());
}

#[test]
fn config_reset_without_terminal_is_refused() {
    let sb = Sandbox::new();
    sb.t3().args(["config", "set", "a", "1"]).assert().success();

    sb.t3().args(["config", "reset"]).assert().code(1);
    assert!(sb.config_file().exists());
}

#[test]
fn config_path_prints_override() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn config_set_into_unwritable_location_fails() {
    let sb = Sandbox::new();
    // A regular file where the parent directory should be.
    fs::write(sb.path().join("settings"), "").unwrap();

    sb.t3()
        .args(["config", "set", "a", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Set a").not());
}

// ── init ─────────────────────────────────────────────────────────────────────

#[test]
fn init_python_project() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["init", "project", "--name", "my-app", "--template", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-app' initialized successfully!"));

    let root = sb.path().join("my-app");
    assert!(fs::read_to_string(root.join("README.md")).unwrap().contains("# my-app"));
    assert!(root.join(".gitignore").is_file());
    assert!(fs::read_to_string(root.join("src/main.py"))
        .unwrap()
        .contains("Hello from my-app!"));
    assert!(fs::read_to_string(root.join("pyproject.toml"))
        .unwrap()
        .contains(r#"name = "my-app""#));
}

#[test]
fn init_uses_template_setting() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["config", "set", "init.template", "web"])
        .assert()
        .success();

    sb.t3()
        .args(["init", "project", "--name", "site"])
        .assert()
        .success();

    assert!(sb.path().join("site/public/index.html").is_file());
}

#[test]
fn init_unknown_template_falls_back_to_basic() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["init", "project", "-n", "fb", "-t", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("used 'basic'"));

    assert!(sb.path().join("fb/src/main.py").is_file());
    assert!(!sb.path().join("fb/pyproject.toml").exists());
}

#[test]
fn init_invalid_name_fails_and_creates_nothing() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["init", "project", "--name", "bad:name"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad:name"));

    let entries: Vec<_> = fs::read_dir(sb.path()).unwrap().collect();
    assert!(entries.is_empty());
}

#[test]
fn init_without_name_and_terminal_fails() {
    let sb = Sandbox::new();
    sb.t3().args(["init", "project"]).assert().code(1);
}

#[test]
fn init_existing_directory_is_refused_without_terminal() {
    let sb = Sandbox::new();
    let root = sb.path().join("dup");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("README.md"), "mine").unwrap();

    sb.t3()
        .args(["init", "project", "--name", "dup"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "mine");
}

#[test]
fn init_existing_directory_with_yes_writes_into_it() {
    let sb = Sandbox::new();
    let root = sb.path().join("dup");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep").unwrap();

    sb.t3()
        .args(["init", "project", "--name", "dup", "--yes"])
        .assert()
        .success();

    assert!(root.join("src/main.py").is_file());
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep");
}

#[test]
fn init_dry_run_writes_nothing() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["init", "project", "--name", "plan", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("src/main.py"));

    assert!(!sb.path().join("plan").exists());
}

#[test]
fn init_list_shows_templates() {
    let sb = Sandbox::new();
    sb.t3()
        .args(["init", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("basic"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("web"));
}
