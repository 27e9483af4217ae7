use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports and tests hold on to them)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input validation
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid email '{email}': {reason}")]
    InvalidEmail { email: String, reason: String },

    #[error("Unknown license '{0}'")]
    UnknownLicense(String),

    // ========================================================================
    // Template table / output paths
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate output path: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("undefined variable '{variable}'")]
    UndefinedVariable { variable: String },

    #[error("malformed placeholder at byte {offset}: {reason}")]
    MalformedPlaceholder { offset: usize, reason: String },

    #[error("no variant for {key} = '{value}'")]
    MissingVariant { key: String, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use ASCII letters, digits, '-', '_' or '.'".into(),
                "Do not start the name with '.' or include path separators".into(),
                "Examples: demo, my_project, api-client".into(),
            ],
            Self::InvalidEmail { .. } => vec![
                "Provide an address of the form user@example.com".into(),
            ],
            Self::UnknownLicense(_) => vec![
                "Supported licenses:".into(),
                "  • MIT".into(),
                "  • Apache-2.0".into(),
                "  • GPL-3.0".into(),
            ],
            Self::UndefinedVariable { variable } => vec![
                format!("The template references '{{{{ {variable} }}}}' which is not provided"),
                "Available variables: project_name, description, author, email, license, year"
                    .into(),
            ],
            Self::MalformedPlaceholder { .. } => vec![
                "Every '{{' must be closed by '}}'".into(),
                "Write '\\{{' to emit a literal '{{'".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidEmail { .. }
            | Self::UnknownLicense(_) => ErrorCategory::Validation,
            Self::UndefinedVariable { .. }
            | Self::MalformedPlaceholder { .. }
            | Self::MissingVariant { .. } => ErrorCategory::Template,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}
