//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PYINIT_<SECTION>__<KEY>`, e.g. `PYINIT_TOOLS__GIT`
//! 3. Config file: `--config <FILE>`, else the platform config dir (optional)
//! 4. Built-in defaults (always present)
//!
//! A `.env` file in the working directory is loaded into the environment
//! before any of this runs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use pyinit_core::{
    application::ToolCommands,
    domain::{
        License,
        entities::project_config::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_EMAIL},
    },
};

const ENV_PREFIX: &str = "PYINIT";

/// Application configuration.
///
/// Every section and key is optional in files and the environment; the
/// `config` crate drops empty tables, so missing ones fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// External tool program names.
    pub tools: ToolsConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub description: String,
    pub author: String,
    pub email: String,
    /// Parsed case-insensitively, like `--license`.
    pub license: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.into(),
            author: DEFAULT_AUTHOR.into(),
            email: DEFAULT_EMAIL.into(),
            license: License::default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub package_manager: String,
    pub python: String,
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let tools = ToolCommands::default();
        Self {
            package_manager: tools.package_manager,
            python: tools.python,
            git: tools.git,
        }
    }
}

impl From<ToolsConfig> for ToolCommands {
    fn from(tools: ToolsConfig) -> Self {
        Self {
            package_manager: tools.package_manager,
            python: tools.python,
            git: tools.git,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files override the built-in templates by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is used if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pyinit", "pyinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyinit.toml"))
    }

    /// TOML rendering used by `config show` and `config init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
