//! End-to-end tests for the `pyinit` binary.
//!
//! Every test runs in its own temp directory with an empty `--config` file,
//! so the user's real configuration never leaks in. Poetry is not assumed
//! to be installed: tests either pass `--no-package-init` or point the
//! package manager at a program that does not exist.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_PROGRAM: &str = "pyinit-test-no-such-program";

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn pyinit(&self) -> Command {
        let mut cmd = Command::cargo_bin("pyinit").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path().join("config.toml"));
        cmd
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_creates_the_project_tree() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .args(["init", "demo", "--license", "MIT", "--no-package-init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project 'demo' has been successfully initialized!",
        ));

    let root = sandbox.path().join("demo");
    for file in [
        "README.md",
        ".gitignore",
        "Makefile",
        "LICENSE",
        "requirements.txt",
        "tests/test_demo.py",
        "src/demo/__init__.py",
        ".github/workflows/ci.yml",
        ".github/dependabot.yml",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
    assert!(fs::read_to_string(root.join("LICENSE")).unwrap().contains("MIT License"));
    assert!(!root.join("venv").exists());
    assert!(!root.join(".git").exists());
}

#[test]
fn metadata_flags_are_rendered() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .args([
            "init",
            "demo",
            "--description",
            "Does things",
            "--author",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--no-package-init",
        ])
        .assert()
        .success();

    let root = sandbox.path().join("demo");
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("Does things"));
    assert!(fs::read_to_string(root.join("LICENSE")).unwrap().contains("Jane Doe"));
}

#[test]
fn output_flag_selects_the_parent_directory() {
    let sandbox = Sandbox::new();
    fs::create_dir(sandbox.path().join("work")).unwrap();

    sandbox
        .pyinit()
        .args(["init", "demo", "-o", "work", "--no-package-init"])
        .assert()
        .success();

    assert!(sandbox.path().join("work/demo/README.md").is_file());
}

#[test]
fn existing_directory_is_rejected() {
    let sandbox = Sandbox::new();
    fs::create_dir(sandbox.path().join("demo")).unwrap();
    fs::write(sandbox.path().join("demo/keep.txt"), "mine").unwrap();

    sandbox
        .pyinit()
        .args(["init", "demo", "--no-package-init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let entries = fs::read_dir(sandbox.path().join("demo")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn invalid_name_is_a_user_error() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .args(["init", ".hidden", "--no-package-init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!sandbox.path().join(".hidden").exists());
}

#[test]
fn unknown_license_is_rejected_by_the_parser() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .args(["init", "demo", "--license", "BSD"])
        .assert()
        .code(2);

    assert!(!sandbox.path().join("demo").exists());
}

#[test]
fn missing_git_only_warns() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .env("PYINIT_TOOLS__GIT", MISSING_PROGRAM)
        .args(["init", "demo", "--git", "--no-package-init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git step failed"))
        .stdout(predicate::str::contains("successfully initialized"));
}

#[test]
fn missing_package_manager_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .env("PYINIT_TOOLS__PACKAGE_MANAGER", MISSING_PROGRAM)
        .args(["init", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("package-manager"));

    // Files written before the failure stay on disk.
    assert!(sandbox.path().join("demo/README.md").is_file());
}

#[test]
fn dry_run_creates_nothing() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .args(["init", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("README.md"));

    assert!(!sandbox.path().join("demo").exists());
}

#[test]
fn json_output_reports_created_files() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .pyinit()
        .args(["--output-format", "json", "init", "demo", "--no-package-init"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["project_name"], "demo");
    assert_eq!(
        report["materialization"]["created_files"]
            .as_array()
            .map(Vec::len),
        Some(9)
    );
}

#[test]
fn config_defaults_are_applied() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path().join("config.toml"),
        "[defaults]\nauthor = \"Config Author\"\nlicense = \"gpl-3.0\"\n",
    )
    .unwrap();

    sandbox
        .pyinit()
        .args(["init", "demo", "--no-package-init"])
        .assert()
        .success();

    let license = fs::read_to_string(sandbox.path().join("demo/LICENSE")).unwrap();
    assert!(license.contains("GNU General Public License"));
    assert!(license.contains("Config Author"));
}

// ── template overrides ────────────────────────────────────────────────────────

#[test]
fn template_directory_overrides_builtins() {
    let sandbox = Sandbox::new();
    let templates = sandbox.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("README.md.j2"), "Custom {{ project_name }}\n").unwrap();

    sandbox
        .pyinit()
        .env("PYINIT_TEMPLATES__DIR", &templates)
        .args(["init", "demo", "--no-package-init"])
        .assert()
        .success();

    let readme = fs::read_to_string(sandbox.path().join("demo/README.md")).unwrap();
    assert_eq!(readme, "Custom demo\n");
    assert!(sandbox.path().join("demo/Makefile").is_file());
}

#[test]
fn missing_template_directory_is_a_configuration_error() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .env("PYINIT_TEMPLATES__DIR", sandbox.path().join("nope"))
        .args(["init", "demo", "--no-package-init"])
        .assert()
        .code(4);

    assert!(!sandbox.path().join("demo").exists());
}

#[test]
fn runs_without_any_config_file() {
    let sandbox = Sandbox::new();
    let home = sandbox.path().join("home");
    fs::create_dir(&home).unwrap();

    Command::cargo_bin("pyinit")
        .unwrap()
        .current_dir(sandbox.path())
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .args(["init", "demo", "--license", "MIT", "--no-package-init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully initialized"));

    let root = sandbox.path().join("demo");
    assert!(fs::read_to_string(root.join("README.md")).unwrap().contains("demo"));
    assert!(!root.join("venv").exists());
    assert!(!root.join(".git").exists());
}

#[test]
fn environment_alone_configures_tools() {
    let sandbox = Sandbox::new();
    let home = sandbox.path().join("home");
    fs::create_dir(&home).unwrap();

    Command::cargo_bin("pyinit")
        .unwrap()
        .current_dir(sandbox.path())
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("PYINIT_TOOLS__PYTHON", "python3.12")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python = \"python3.12\""))
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let sandbox = Sandbox::new();

    Command::cargo_bin("pyinit")
        .unwrap()
        .current_dir(sandbox.path())
        .args(["--config", "absent.toml", "templates"])
        .assert()
        .code(4);
}

// ── templates / completions / config ──────────────────────────────────────────

#[test]
fn templates_lists_the_table() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md.j2"))
        .stdout(predicate::str::contains("src/{project_name}/__init__.py"));
}

#[test]
fn templates_as_json() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .pyinit()
        .args(["templates", "--format", "json"])
        .assert()
        .success();

    let list: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 9);
    assert!(list.iter().all(|t| t["available"] == true));
}

#[test]
fn completions_for_bash() {
    Command::cargo_bin("pyinit")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyinit"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let sandbox = Sandbox::new();
    let path = sandbox.path().join("fresh.toml");

    let mut first = Command::cargo_bin("pyinit").unwrap();
    first
        .current_dir(sandbox.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[defaults]"));

    let mut second = Command::cargo_bin("pyinit").unwrap();
    second
        .current_dir(sandbox.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_merges_environment() {
    let sandbox = Sandbox::new();

    sandbox
        .pyinit()
        .env("PYINIT_TOOLS__PYTHON", "python3.12")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python = \"python3.12\""));
}

#[test]
fn no_arguments_prints_help() {
    Command::cargo_bin("pyinit")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
