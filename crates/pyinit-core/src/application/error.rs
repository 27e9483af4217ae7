//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Destination already exists; nothing was written.
    #[error("Directory '{path}' already exists")]
    ProjectExists { path: PathBuf },

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Rendering failed (undefined variable, malformed placeholder).
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The program could not be started at all.
    #[error("Could not run '{program}': {reason}")]
    ToolUnavailable { program: String, reason: String },

    /// A post-init step's command failed.
    #[error("Error during {step} step: `{command}` {reason}")]
    ExternalTool {
        step: String,
        command: String,
        reason: String,
    },

    /// Shared state lock poisoned (in-memory adapters).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{name}'"),
                "List available templates: pyinit templates".into(),
                "Check the files in your templates directory override".into(),
            ],
            Self::TemplateRender { template, .. } => vec![
                format!("Fix the placeholders in '{template}'"),
                "Available variables: project_name, description, author, email, license, year"
                    .into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "The partially created project was left in place for inspection".into(),
            ],
            Self::ToolUnavailable { program, .. } => vec![
                format!("Ensure '{program}' is installed and on your PATH"),
                "Or point pyinit at it in the [tools] section of the config file".into(),
            ],
            Self::ExternalTool { .. } => vec![
                "Check the command output above for details".into(),
                "The project files were created; fix the tool and re-run it by hand".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Precondition,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateRender { .. } => ErrorCategory::Template,
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::ToolUnavailable { .. } | Self::ExternalTool { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
