//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyinit-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::RenderContext;
use crate::error::PyinitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyinit_adapters::filesystem::LocalFilesystem` (production)
/// - `pyinit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> PyinitResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &[u8]) -> PyinitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup and rendering.
///
/// Implemented by:
/// - `pyinit_adapters::template_store::BuiltinTemplateStore` (compiled-in templates)
/// - `pyinit_adapters::template_store::OverlayTemplateStore` (user directory over built-ins)
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Render a named template.
    ///
    /// Fails with `TemplateNotFound` for unknown names and `TemplateRender`
    /// when the content references an undefined variable.
    fn render(&self, name: &str, context: &RenderContext) -> PyinitResult<Vec<u8>>;

    /// Names this store can render, sorted.
    fn names(&self) -> Vec<String>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `pyinit_adapters::process::SystemProcessRunner` (std::process)
#[cfg_attr(test, automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` in `working_dir` and block until it exits.
    ///
    /// A program that cannot be started is `ToolUnavailable`; a program that
    /// ran and failed is a non-success [`CommandStatus`], not an error.
    fn run(&self, command: &CommandSpec, working_dir: &Path) -> PyinitResult<CommandStatus>;
}

/// Port for the wall clock.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-like rendering for logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// How a finished process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn success() -> Self {
        Self::from_code(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exited with status {code}"),
            None => f.write_str("was terminated by a signal"),
        }
    }
}
