//! User templates directory layered over the built-in templates.
//!
//! Every regular file directly inside the directory replaces the built-in
//! template of the same name (e.g. `README.md.j2`). Overrides are always
//! parameterized, so a literal `{{` must be written as `\{{`. Names the
//! directory does not provide fall through to [`BuiltinTemplateStore`].

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use pyinit_core::{
    application::ports::TemplateStore,
    domain::{RenderContext, TemplateContent},
    error::{PyinitError, PyinitResult},
};

use super::{BuiltinTemplateStore, render_content};

#[derive(Debug)]
pub struct OverlayTemplateStore {
    overrides: BTreeMap<String, TemplateContent>,
    fallback: BuiltinTemplateStore,
}

impl OverlayTemplateStore {
    /// Read every override in `dir` up front.
    ///
    /// A missing or unreadable directory is a configuration error.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> PyinitResult<Self> {
        if !dir.is_dir() {
            return Err(config_error(format!(
                "templates directory not found: {}",
                dir.display()
            )));
        }

        let mut overrides = BTreeMap::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                config_error(format!("failed to read templates directory: {e}"))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let content = fs::read_to_string(entry.path()).map_err(|e| {
                config_error(format!(
                    "failed to read template '{}': {e}",
                    entry.path().display()
                ))
            })?;

            debug!(template = %name, "Loaded template override");
            overrides.insert(name, TemplateContent::Parameterized(content.into()));
        }

        Ok(Self {
            overrides,
            fallback: BuiltinTemplateStore,
        })
    }

    /// Names provided by the directory, sorted.
    pub fn overridden(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}

impl TemplateStore for OverlayTemplateStore {
    fn render(&self, name: &str, context: &RenderContext) -> PyinitResult<Vec<u8>> {
        match self.overrides.get(name) {
            Some(content) => render_content(name, content, context),
            None => self.fallback.render(name, context),
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names = self.fallback.names();
        names.extend(self.overrides.keys().cloned());
        names.sort();
        names.dedup();
        names
    }
}

fn config_error(message: String) -> PyinitError {
    PyinitError::Configuration { message }
}
