use std::collections::HashSet;

use crate::domain::{entities::template::ResolvedTemplate, error::DomainError};

/// Longest name accepted for the project directory (npm/PyPI-style bound).
const MAX_NAME_LEN: usize = 214;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be '.' or '..'"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 214 characters"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidEmail {
            email: email.to_string(),
            reason: reason.to_string(),
        };

        if email.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                if domain.contains('@') {
                    Err(invalid("must contain exactly one '@'"))
                } else {
                    Ok(())
                }
            }
            _ => Err(invalid("expected user@domain")),
        }
    }

    /// No two templates may write the same output path.
    pub fn validate_resolved_templates(templates: &[ResolvedTemplate]) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for template in templates {
            if !seen.insert(template.output.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: template.output.to_string(),
                });
            }
        }
        Ok(())
    }
}
