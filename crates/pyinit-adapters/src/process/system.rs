//! Runs external programs with `std::process`.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use pyinit_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, CommandStatus, ProcessRunner},
    },
    error::PyinitResult,
};

/// Production runner. Stdio is inherited so the user sees tool output;
/// each call blocks until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandSpec, working_dir: &Path) -> PyinitResult<CommandStatus> {
        debug!(command = %command, cwd = %working_dir.display(), "Spawning");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(working_dir)
            .status()
            .map_err(|e| spawn_error(&command.program, &e))?;

        debug!(code = ?status.code(), "Child exited");
        Ok(CommandStatus { code: status.code() })
    }
}

fn spawn_error(program: &str, e: &io::Error) -> ApplicationError {
    let reason = match e.kind() {
        io::ErrorKind::NotFound => "program not found".to_string(),
        _ => e.to_string(),
    };
    ApplicationError::ToolUnavailable {
        program: program.to_string(),
        reason,
    }
}
