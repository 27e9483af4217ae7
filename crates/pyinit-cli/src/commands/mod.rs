//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod templates;

use pyinit_adapters::{BuiltinTemplateStore, OverlayTemplateStore};
use pyinit_core::application::ports::TemplateStore;
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// The template store selected by `templates.dir`.
pub(crate) fn template_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    match &config.templates.dir {
        Some(dir) => {
            let store = OverlayTemplateStore::load(dir)?;
            let overridden: Vec<&str> = store.overridden().collect();
            debug!(dir = %dir.display(), ?overridden, "Using template overrides");
            Ok(Box::new(store))
        }
        None => Ok(Box::new(BuiltinTemplateStore::new())),
    }
}
