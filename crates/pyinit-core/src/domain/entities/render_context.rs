//! Template rendering context and the strict placeholder substitution.

use std::collections::BTreeMap;

use crate::domain::{entities::project_config::ProjectConfig, error::DomainError};

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a template.
/// Built once per run and read by every render call.
///
/// ## Variables
///
/// | Variable       | Example              | Source     |
/// |----------------|----------------------|------------|
/// | `project_name` | `demo`               | User input |
/// | `description`  | `A new Python project.` | User input |
/// | `author`       | `Jane Doe`           | User input |
/// | `email`        | `jane@example.com`   | User input |
/// | `license`      | `MIT`                | User input |
/// | `year`         | `2026`               | Clock      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    year: i32,
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context with only `year` set. Most callers want [`RenderContext::from_config`].
    pub fn new(year: i32) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("year".to_string(), year.to_string());
        Self { year, variables }
    }

    pub fn from_config(config: &ProjectConfig, year: i32) -> Self {
        Self::new(year)
            .with_variable("project_name", config.name())
            .with_variable("description", config.description())
            .with_variable("author", config.author())
            .with_variable("email", config.email())
            .with_variable("license", config.license().as_str())
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Empty when the context was not built from a config.
    pub fn project_name(&self) -> &str {
        self.get("project_name").unwrap_or_default()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every `{{ key }}` placeholder with its value.
    ///
    /// Rendering is strict: an unknown key is [`DomainError::UndefinedVariable`]
    /// and an unterminated or empty placeholder is
    /// [`DomainError::MalformedPlaceholder`]. `\{{` emits a literal `{{`.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let offset = template.len() - rest.len() + start;

            if rest[..start].ends_with('\\') {
                out.push_str(&rest[..start - 1]);
                out.push_str("{{");
                rest = &rest[start + 2..];
                continue;
            }

            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| DomainError::MalformedPlaceholder {
                    offset,
                    reason: "missing closing '}}'".into(),
                })?;

            let key = after[..end].trim();
            if !is_identifier(key) {
                return Err(DomainError::MalformedPlaceholder {
                    offset,
                    reason: format!("'{key}' is not a variable name"),
                });
            }

            let value = self
                .get(key)
                .ok_or_else(|| DomainError::UndefinedVariable {
                    variable: key.to_string(),
                })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
