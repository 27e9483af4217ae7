use std::collections::HashSet;

use crate::domain::entities::{common::RelativePath, template::ResolvedTemplate};

/// Directories that must exist before any file is written, parents first.
///
/// Derived from the resolved template outputs: every proper ancestor of
/// every output path, deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPlan {
    directories: Vec<RelativePath>,
}

impl DirectoryPlan {
    pub fn from_templates(templates: &[ResolvedTemplate]) -> Self {
        let mut seen = HashSet::new();
        let mut directories = Vec::new();

        for template in templates {
            for dir in template.output.ancestors() {
                if seen.insert(dir.clone()) {
                    directories.push(dir);
                }
            }
        }

        Self { directories }
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}
