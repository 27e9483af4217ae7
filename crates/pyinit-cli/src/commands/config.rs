//! `pyinit config`: inspect and create the configuration file.

use std::{fs, path::PathBuf};

use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current configuration:")?;
                output.print(&render_toml(config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&config_file(global).display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = config_file(global);
            write_default_config(&path, force)?;
            output.success(&format!("Wrote default configuration to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// `--config` if given, else the platform default.
fn config_file(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn render_toml(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn write_default_config(path: &std::path::Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_toml(&AppConfig::default())?)?;

    info!(path = %path.display(), "Configuration file written");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
