//! Errors surfaced by the `pyinit` binary and their exit codes.

use std::{error::Error as _, fmt::Write as _, io, path::PathBuf};

use owo_colors::OwoColorize;
use thiserror::Error;

use pyinit_core::error::{ErrorCategory as CoreCategory, PyinitError};

use crate::config::AppConfig;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or value could not be used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration file already exists at {}", path.display())]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    Core(#[from] PyinitError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },
}

/// What kind of failure, as far as the shell is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, invalid name or email, existing directory.
    UserError,
    /// Unknown template.
    NotFound,
    /// Config file, environment, or template override problem.
    Configuration,
    /// Filesystem or external tool failure, or a bug.
    Internal,
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// `anyhow` only reaches the CLI from configuration loading.
impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Precondition => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                // Built-in templates always render; only an override can fail.
                CoreCategory::Template | CoreCategory::Configuration => {
                    ErrorCategory::Configuration
                }
                CoreCategory::Filesystem | CoreCategory::ExternalTool | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Next steps for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the config file (default: {})",
                    AppConfig::config_path().display()
                ),
                "Check PYINIT_* environment variables".into(),
                "Run 'pyinit config init' to start from the defaults".into(),
            ],
            Self::ConfigExists { .. } => {
                vec!["Pass --force to replace it with the defaults".into()]
            }
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check permissions on the target directory".into(),
                "Check free disk space".into(),
            ],
        }
    }

    /// Causes below the top-level message, outermost first.
    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(err) = next {
            let text = err.to_string();
            // `#[error("{0}")]` wrappers repeat their inner message.
            if causes.last() != Some(&text) && text != self.to_string() {
                causes.push(text);
            }
            next = err.source();
        }
        causes
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{} {}", "\u{2717} Error:".red().bold(), self.red());
        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "  {} {}", "caused by:".dimmed(), cause.dimmed());
            }
        }
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            for s in &suggestions {
                let _ = writeln!(out, "  - {s}");
            }
        }
        if !verbose {
            let _ = writeln!(out, "\n{}", "Run with -v for more details.".dimmed());
        }
        out
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");
        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "  caused by: {cause}");
            }
        }
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\nSuggestions:");
            for s in &suggestions {
                let _ = writeln!(out, "  - {s}");
            }
        }
        if !verbose {
            let _ = writeln!(out, "\nRun with -v for more details.");
        }
        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}")
            }
        }
        for cause in self.causes() {
            tracing::debug!("caused by: {cause}");
        }
    }
}
