//! End-to-end `init` workflow over real adapters, with external tools faked.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use pyinit_adapters::{
    BuiltinTemplateStore, FixedClock, LocalFilesystem, MemoryFilesystem, OverlayTemplateStore,
};
use pyinit_core::{
    application::ApplicationError,
    prelude::*,
};
use tempfile::TempDir;

/// Records every command and exits with the scripted code for its program.
#[derive(Clone, Default)]
struct ScriptedRunner {
    log: Arc<Mutex<Vec<(CommandSpec, PathBuf)>>>,
    failing: Arc<Mutex<Vec<(String, Option<i32>)>>>,
}

impl ScriptedRunner {
    /// `code: None` means the program is missing.
    fn fail(self, program: &str, code: Option<i32>) -> Self {
        self.failing.lock().unwrap().push((program.to_string(), code));
        self
    }

    fn commands(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.to_string())
            .collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec, working_dir: &Path) -> PyinitResult<CommandStatus> {
        self.log
            .lock()
            .unwrap()
            .push((command.clone(), working_dir.to_path_buf()));

        let failing = self.failing.lock().unwrap();
        match failing.iter().find(|(p, _)| *p == command.program) {
            Some((_, Some(code))) => Ok(CommandStatus::from_code(*code)),
            Some((program, None)) => Err(ApplicationError::ToolUnavailable {
                program: program.clone(),
                reason: "program not found".into(),
            }
            .into()),
            None => Ok(CommandStatus::success()),
        }
    }
}

const OUTPUTS: &[&str] = &[
    "README.md",
    ".gitignore",
    "Makefile",
    "LICENSE",
    "requirements.txt",
    "tests/test_demo.py",
    "src/demo/__init__.py",
    ".github/workflows/ci.yml",
    ".github/dependabot.yml",
];

fn config(flags: InitFlags) -> ProjectConfig {
    ProjectConfig::builder("demo")
        .description("Demo project")
        .author("Jane Doe")
        .email("jane@example.com")
        .license(License::Mit)
        .flags(flags)
        .build()
        .unwrap()
}

fn memory_service(fs: &MemoryFilesystem, runner: &ScriptedRunner) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinTemplateStore),
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Box::new(FixedClock(2024)),
    )
}

#[test]
fn every_output_exists_and_is_non_empty() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();
    let root = Path::new("/work/demo");

    memory_service(&fs, &runner)
        .init(&config(InitFlags::default()), root)
        .unwrap();

    for output in OUTPUTS {
        let content = fs
            .read_file(&root.join(output))
            .unwrap_or_else(|| panic!("{output} missing"));
        assert!(!content.is_empty(), "{output} is empty");
    }
    assert_eq!(fs.list_files().len(), OUTPUTS.len());
}

#[test]
fn rendered_files_and_package_init_agree_on_metadata() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();
    let root = Path::new("/work/demo");

    memory_service(&fs, &runner)
        .init(&config(InitFlags::default()), root)
        .unwrap();

    let readme = fs.read_to_string(&root.join("README.md")).unwrap();
    assert!(readme.contains("demo"));
    assert!(readme.contains("Jane Doe"));
    let license = fs.read_to_string(&root.join("LICENSE")).unwrap();
    assert!(license.contains("2024 Jane Doe"));

    let commands = runner.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains("--name demo"));
    assert!(commands[0].contains("--author \"Jane Doe <jane@example.com>\""));
    assert!(commands[0].contains("--license MIT"));
}

#[test]
fn tools_run_inside_the_project_root() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();
    let root = Path::new("/work/demo");
    let flags = InitFlags {
        init_git: true,
        ..InitFlags::default()
    };

    memory_service(&fs, &runner).init(&config(flags), root).unwrap();

    let log = runner.log.lock().unwrap();
    assert_eq!(log.len(), 4);
    assert!(log.iter().all(|(_, cwd)| cwd == root));
}

#[test]
fn second_run_fails_and_changes_nothing() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();
    let root = Path::new("/work/demo");
    let service = memory_service(&fs, &runner);

    service.init(&config(InitFlags::default()), root).unwrap();
    let before = fs.list_files();

    let err = service
        .init(&config(InitFlags::default()), root)
        .unwrap_err();

    assert!(err.is_precondition());
    assert_eq!(fs.list_files(), before);
    assert_eq!(runner.commands().len(), 1);
}

#[test]
fn venv_commands_run_in_order_when_requested() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();
    let flags = InitFlags {
        create_venv: true,
        package_init: false,
        ..InitFlags::default()
    };

    memory_service(&fs, &runner)
        .init(&config(flags), Path::new("/work/demo"))
        .unwrap();

    let commands = runner.commands();
    assert_eq!(commands.len(), 3);
    assert!(commands[0].contains("-m venv"));
    assert!(commands[1].ends_with("install --upgrade pip"));
    assert!(commands[2].contains("install -r"));
    assert!(commands[2].ends_with("requirements.txt"));
}

#[test]
fn no_venv_flag_means_no_venv_step() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();

    let report = memory_service(&fs, &runner)
        .init(&config(InitFlags::default()), Path::new("/work/demo"))
        .unwrap();

    assert!(runner.commands().iter().all(|c| !c.contains("venv")));
    assert!(!fs.exists(Path::new("/work/demo/venv")));
    assert_eq!(
        report.post_init.state_of(PostInitStep::VirtualEnv),
        Some(&StepState::Skipped)
    );
}

#[test]
fn missing_git_does_not_fail_the_run() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default().fail("git", None);
    let flags = InitFlags {
        init_git: true,
        ..InitFlags::default()
    };

    let report = memory_service(&fs, &runner)
        .init(&config(flags), Path::new("/work/demo"))
        .unwrap();

    assert_eq!(report.post_init.warnings().count(), 1);
    assert_eq!(fs.list_files().len(), OUTPUTS.len());
}

#[test]
fn failing_package_manager_fails_the_run_but_keeps_files() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default().fail("poetry", Some(1));

    let err = memory_service(&fs, &runner)
        .init(&config(InitFlags::default()), Path::new("/work/demo"))
        .unwrap_err();

    assert!(err.to_string().starts_with("Error during package-manager step"));
    assert_eq!(fs.list_files().len(), OUTPUTS.len());
}

#[test]
fn write_failure_leaves_partial_tree() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/work/demo/LICENSE");
    let runner = ScriptedRunner::default();

    let err = memory_service(&fs, &runner)
        .init(&config(InitFlags::default()), Path::new("/work/demo"))
        .unwrap_err();

    assert!(matches!(
        err,
        PyinitError::Application(ApplicationError::Filesystem { .. })
    ));
    // README, .gitignore and Makefile were written before LICENSE.
    assert_eq!(fs.list_files().len(), 3);
    assert!(runner.commands().is_empty());
}

#[test]
fn local_filesystem_materializes_real_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nested/parent/demo");
    let runner = ScriptedRunner::default();
    let service = ScaffoldService::new(
        Box::new(BuiltinTemplateStore),
        Box::new(LocalFilesystem),
        Box::new(runner.clone()),
        Box::new(FixedClock(2024)),
    );

    let report = service.init(&config(InitFlags::default()), &root).unwrap();

    for output in OUTPUTS {
        let path = root.join(output);
        assert!(path.is_file(), "{} missing", path.display());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
    assert!(!root.join("venv").exists());
    assert!(!root.join(".git").exists());
    assert_eq!(report.materialization.created_root, root);
}

#[test]
fn overlay_templates_reach_the_output() {
    let templates = TempDir::new().unwrap();
    std::fs::write(
        templates.path().join("README.md.j2"),
        "Custom readme for {{ project_name }} ({{ year }})\n",
    )
    .unwrap();
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(OverlayTemplateStore::load(templates.path()).unwrap()),
        Box::new(fs.clone()),
        Box::new(ScriptedRunner::default()),
        Box::new(FixedClock(2031)),
    );

    service
        .init(&config(InitFlags::default()), Path::new("demo"))
        .unwrap();

    assert_eq!(
        fs.read_to_string(Path::new("demo/README.md")).as_deref(),
        Some("Custom readme for demo (2031)\n")
    );
}

#[test]
fn dry_run_creates_nothing() {
    let fs = MemoryFilesystem::new();
    let runner = ScriptedRunner::default();

    let plan = memory_service(&fs, &runner)
        .plan(&config(InitFlags::default()), Path::new("demo"))
        .unwrap();

    assert_eq!(plan.created_files.len(), OUTPUTS.len());
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("demo")));
    assert!(runner.commands().is_empty());
}
