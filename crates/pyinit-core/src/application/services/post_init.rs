//! Post-init orchestrator - runs external bootstrap tools in a fixed order.
//!
//! | Step            | Flag                 | Failure       |
//! |-----------------|----------------------|---------------|
//! | package-manager | `package_init`       | aborts        |
//! | ci              | `setup_ci`           | cannot fail   |
//! | venv            | `create_venv`        | aborts        |
//! | git             | `init_git`           | recorded only |

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandSpec, ProcessRunner},
    },
    domain::{PostInitReport, PostInitStep, ProjectConfig, StepState},
    error::{PyinitError, PyinitResult},
};

/// Program names for the external tools. Overridable from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommands {
    pub package_manager: String,
    pub python: String,
    pub git: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            package_manager: "poetry".to_string(),
            python: if cfg!(windows) { "python" } else { "python3" }.to_string(),
            git: "git".to_string(),
        }
    }
}

pub struct PostInitOrchestrator {
    runner: Box<dyn ProcessRunner>,
    tools: ToolCommands,
}

impl PostInitOrchestrator {
    /// Uses [`ToolCommands::default`] until [`Self::with_tools`] says otherwise.
    pub fn new(runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            tools: ToolCommands::default(),
        }
    }

    pub fn with_tools(mut self, tools: ToolCommands) -> Self {
        self.tools = tools;
        self
    }

    /// Run every enabled step inside `root`.
    ///
    /// `root` is made absolute first: commands run with it as their working
    /// directory, so a relative root would be applied twice in their paths.
    /// Returns on the first fatal failure. A version-control failure is
    /// logged and recorded in the report instead.
    #[instrument(skip_all, fields(project = %config.name(), root = %root.display()))]
    pub fn run(&self, config: &ProjectConfig, root: &Path) -> PyinitResult<PostInitReport> {
        let root = std::path::absolute(root).map_err(|e| ApplicationError::Filesystem {
            path: root.to_path_buf(),
            reason: format!("cannot resolve absolute path: {e}"),
        })?;
        let root = root.as_path();
        let mut report = PostInitReport::default();

        for step in PostInitStep::ORDER {
            let Some(commands) = self.commands_for(step, config, root) else {
                report.record(step, StepState::Skipped);
                continue;
            };

            info!(step = %step, "Running post-init step");
            match self.run_step(step, &commands, root) {
                Ok(()) => report.record(step, StepState::Succeeded),
                Err(err) if !step.is_fatal() => {
                    warn!(step = %step, error = %err, "Post-init step failed, continuing");
                    report.record(
                        step,
                        StepState::Failed {
                            reason: err.to_string(),
                        },
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }

    /// `None` when the step's flag is off.
    fn commands_for(
        &self,
        step: PostInitStep,
        config: &ProjectConfig,
        root: &Path,
    ) -> Option<Vec<CommandSpec>> {
        let flags = config.flags();
        match step {
            PostInitStep::PackageManager => flags
                .package_init
                .then(|| vec![package_init_command(&self.tools.package_manager, config)]),
            // Workflow files are already part of the template table.
            PostInitStep::ContinuousIntegration => flags.setup_ci.then(Vec::new),
            PostInitStep::VirtualEnv => flags
                .create_venv
                .then(|| venv_commands(&self.tools.python, root)),
            PostInitStep::VersionControl => {
                flags.init_git.then(|| git_commands(&self.tools.git))
            }
        }
    }

    fn run_step(
        &self,
        step: PostInitStep,
        commands: &[CommandSpec],
        root: &Path,
    ) -> PyinitResult<()> {
        for command in commands {
            info!(command = %command, "Running");
            let status = self
                .runner
                .run(command, root)
                .map_err(|err| external_tool_error(step, command, err))?;

            if !status.is_success() {
                return Err(ApplicationError::ExternalTool {
                    step: step.to_string(),
                    command: command.to_string(),
                    reason: status.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn external_tool_error(step: PostInitStep, command: &CommandSpec, err: PyinitError) -> PyinitError {
    let reason = match err {
        PyinitError::Application(ApplicationError::ToolUnavailable { reason, .. }) => {
            format!("could not be started: {reason}")
        }
        other => other.to_string(),
    };
    ApplicationError::ExternalTool {
        step: step.to_string(),
        command: command.to_string(),
        reason,
    }
    .into()
}

/// `<pm> init [--no-interaction] --name .. --description .. --author "<author> <email>" --license ..`
pub fn package_init_command(package_manager: &str, config: &ProjectConfig) -> CommandSpec {
    let mut command = CommandSpec::new(package_manager).arg("init");
    if !config.flags().interactive_package_init {
        command = command.arg("--no-interaction");
    }
    command.args([
        "--name".to_string(),
        config.name().to_string(),
        "--description".to_string(),
        config.description().to_string(),
        "--author".to_string(),
        format!("{} <{}>", config.author(), config.email()),
        "--license".to_string(),
        config.license().to_string(),
    ])
}

/// Create `root/venv`, upgrade its pip, then install `requirements.txt`.
///
/// `root` should be absolute; the paths are passed to tools running in it.
pub fn venv_commands(python: &str, root: &Path) -> Vec<CommandSpec> {
    let venv = root.join("venv");
    let pip = if cfg!(windows) {
        venv.join("Scripts").join("pip.exe")
    } else {
        venv.join("bin").join("pip")
    };
    let pip = pip.display().to_string();

    vec![
        CommandSpec::new(python).args(["-m".to_string(), "venv".to_string(), venv.display().to_string()]),
        CommandSpec::new(pip.as_str()).args(["install", "--upgrade", "pip"]),
        CommandSpec::new(pip.as_str()).args([
            "install".to_string(),
            "-r".to_string(),
            root.join("requirements.txt").display().to_string(),
        ]),
    ]
}

pub fn git_commands(git: &str) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(git).arg("init"),
        CommandSpec::new(git).args(["add", "."]),
        CommandSpec::new(git).args(["commit", "-m", "Initial commit"]),
    ]
}
