//! Template Service - template listing.
//!
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{TEMPLATE_SPECS, TemplateSpec},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    /// Output path pattern, e.g. `src/{project_name}/__init__.py`.
    pub output: String,
    /// Whether the store can render it.
    pub available: bool,
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Every template in the table, in write order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.describe(TEMPLATE_SPECS)
    }

    /// Names the store can render that no table entry uses.
    pub fn unused(&self) -> Vec<String> {
        self.store
            .names()
            .into_iter()
            .filter(|name| !TEMPLATE_SPECS.iter().any(|s| s.source_name == name))
            .collect()
    }

    fn describe(&self, specs: &[TemplateSpec]) -> Vec<TemplateInfo> {
        let names = self.store.names();
        specs
            .iter()
            .map(|spec| TemplateInfo {
                name: spec.source_name.to_string(),
                output: spec.output.to_string(),
                available: names.iter().any(|n| n == spec.source_name),
            })
            .collect()
    }
}
