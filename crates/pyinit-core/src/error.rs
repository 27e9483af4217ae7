//! Unified error handling for PyInit Core.
//!
//! [`PyinitError`] is what every public core operation returns. The CLI
//! turns its [`ErrorCategory`] into an exit code and prints its suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for PyInit Core operations.
#[derive(Debug, Error, Clone)]
pub enum PyinitError {
    /// Errors from the domain layer (invalid input, malformed templates).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, external tools).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unusable settings, e.g. a template override directory that is missing.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A broken invariant inside pyinit itself.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PyinitError {
    /// What the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Fix the setting: {message}"),
                "Run 'pyinit config show' to see the effective configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in pyinit".into(),
                "Please report this issue at: https://github.com/bkovaluk/pyinit/issues".into(),
            ],
        }
    }

    /// Drives exit codes and log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the run was refused before anything was written.
    pub fn is_precondition(&self) -> bool {
        self.category() == ErrorCategory::Precondition
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid user-supplied value (name, email, license).
    Validation,
    /// The destination already exists; nothing was touched.
    Precondition,
    /// A named template does not exist.
    NotFound,
    /// A template could not be rendered.
    Template,
    /// Directory or file creation failed.
    Filesystem,
    /// An external tool exited non-zero or could not be started.
    ExternalTool,
    Configuration,
    Internal,
}

pub type PyinitResult<T> = Result<T, PyinitError>;
