//! Validated, immutable description of the project to create.

use serde::Serialize;

use crate::domain::{DomainValidator as validator, error::DomainError, value_objects::License};

pub const DEFAULT_DESCRIPTION: &str = "A new Python project.";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_EMAIL: &str = "you@example.com";

/// Optional bootstrap behaviour selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitFlags {
    /// Create `venv/` and install `requirements.txt` into it.
    pub create_venv: bool,
    /// `git init` + initial commit.
    pub init_git: bool,
    /// Report the CI step; the workflow files are always rendered.
    pub setup_ci: bool,
    /// Let the package manager prompt instead of passing `--no-interaction`.
    pub interactive_package_init: bool,
    /// Run the package manager's `init` at all.
    pub package_init: bool,
}

impl Default for InitFlags {
    fn default() -> Self {
        Self {
            create_venv: false,
            init_git: false,
            setup_ci: false,
            interactive_package_init: false,
            package_init: true,
        }
    }
}

/// Project metadata. Only obtainable through [`ProjectConfigBuilder::build`],
/// so every instance has a filesystem-safe name and a plausible email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    name: String,
    description: String,
    author: String,
    email: String,
    license: License,
    flags: InitFlags,
}

impl ProjectConfig {
    pub fn builder(name: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn license(&self) -> License {
        self.license
    }

    pub fn flags(&self) -> InitFlags {
        self.flags
    }
}

#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    name: String,
    description: String,
    author: String,
    email: String,
    license: License,
    flags: InitFlags,
}

impl ProjectConfigBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            license: License::default(),
            flags: InitFlags::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    pub fn flags(mut self, flags: InitFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        validator::validate_project_name(&self.name)?;
        validator::validate_email(&self.email)?;

        Ok(ProjectConfig {
            name: self.name,
            description: self.description,
            author: self.author,
            email: self.email,
            license: self.license,
            flags: self.flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_original_defaults() {
        let config = ProjectConfig::builder("demo").build().unwrap();
        assert_eq!(config.name(), "demo");
        assert_eq!(config.description(), "A new Python project.");
        assert_eq!(config.author(), "Your Name");
        assert_eq!(config.email(), "you@example.com");
        assert_eq!(config.license(), License::Mit);
        assert!(config.flags().package_init);
        assert!(!config.flags().create_venv);
    }

    #[test]
    fn builder_rejects_bad_name() {
        let result = ProjectConfig::builder("../escape").build();
        assert!(matches!(
            result,
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn builder_rejects_bad_email() {
        let result = ProjectConfig::builder("demo").email("nobody").build();
        assert!(matches!(result, Err(DomainError::InvalidEmail { .. })));
    }

    #[test]
    fn builder_keeps_flags() {
        let flags = InitFlags {
            create_venv: true,
            init_git: true,
            ..InitFlags::default()
        };
        let config = ProjectConfig::builder("demo").flags(flags).build().unwrap();
        assert!(config.flags().create_venv);
        assert!(config.flags().init_git);
        assert!(!config.flags().setup_ci);
    }
}
