//! Template table and template content.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TEMPLATE_SPECS (static table)                              │
//! │  └── TemplateSpec { source_name, output }                   │
//! │        output may embed {project_name}                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ResolvedTemplate (per run)                                 │
//! │  └── output: RelativePath with the name substituted         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateContent (owned by a TemplateStore)                 │
//! │  ├── Literal        copied as-is                            │
//! │  ├── Parameterized  {{ var }} substitution                  │
//! │  └── Selected       pick a variant by a context value       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output paths use single braces (`{project_name}`) so they can never be
//! confused with content placeholders.

use crate::domain::{
    DomainValidator as validator,
    entities::{common::RelativePath, render_context::RenderContext},
    error::DomainError,
};

const PROJECT_NAME_SEGMENT: &str = "{project_name}";

/// Maps a template name to where its rendered output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    pub source_name: &'static str,
    pub output: &'static str,
}

impl TemplateSpec {
    pub const fn new(source_name: &'static str, output: &'static str) -> Self {
        Self {
            source_name,
            output,
        }
    }

    /// Substitute the project name into the output pattern.
    pub fn resolve(&self, project_name: &str) -> Result<ResolvedTemplate, DomainError> {
        let output = self.output.replace(PROJECT_NAME_SEGMENT, project_name);
        Ok(ResolvedTemplate {
            source_name: self.source_name,
            output: RelativePath::try_new(output)?,
        })
    }
}

/// Every file a new project gets, in write order.
pub const TEMPLATE_SPECS: &[TemplateSpec] = &[
    TemplateSpec::new("README.md.j2", "README.md"),
    TemplateSpec::new(".gitignore.j2", ".gitignore"),
    TemplateSpec::new("Makefile.j2", "Makefile"),
    TemplateSpec::new("LICENSE.j2", "LICENSE"),
    TemplateSpec::new("requirements.txt.j2", "requirements.txt"),
    TemplateSpec::new("test_project.py.j2", "tests/test_{project_name}.py"),
    TemplateSpec::new("src_init.py.j2", "src/{project_name}/__init__.py"),
    TemplateSpec::new("ci.yml.j2", ".github/workflows/ci.yml"),
    TemplateSpec::new("dependabot.yml.j2", ".github/dependabot.yml"),
];

/// A [`TemplateSpec`] bound to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub source_name: &'static str,
    pub output: RelativePath,
}

/// Resolve a spec table for `project_name`, rejecting duplicate outputs.
pub fn resolve_specs(
    specs: &[TemplateSpec],
    project_name: &str,
) -> Result<Vec<ResolvedTemplate>, DomainError> {
    let resolved = specs
        .iter()
        .map(|spec| spec.resolve(project_name))
        .collect::<Result<Vec<_>, _>>()?;
    validator::validate_resolved_templates(&resolved)?;
    Ok(resolved)
}

/// Content specification for a template.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided; `{{` is not interpreted.
    Literal(TemplateSource),

    /// Content with `{{ variable }}` placeholders to be substituted.
    Parameterized(TemplateSource),

    /// One of several parameterized bodies, chosen by the value of `key`
    /// in the context (e.g. the license text by `license`).
    Selected {
        key: &'static str,
        variants: &'static [(&'static str, &'static str)],
    },
}

impl TemplateContent {
    pub fn render(&self, context: &RenderContext) -> Result<String, DomainError> {
        match self {
            Self::Literal(source) => Ok(source.as_str().to_string()),
            Self::Parameterized(source) => context.render(source.as_str()),
            Self::Selected { key, variants } => {
                let value = context
                    .get(key)
                    .ok_or_else(|| DomainError::UndefinedVariable {
                        variable: (*key).to_string(),
                    })?;
                let body = variants
                    .iter()
                    .find(|(label, _)| *label == value)
                    .map(|(_, body)| *body)
                    .ok_or_else(|| DomainError::MissingVariant {
                        key: (*key).to_string(),
                        value: value.to_string(),
                    })?;
                context.render(body)
            }
        }
    }
}

/// Source of template content: either compile-time or runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g. `include_str!("README.md.j2")`)
    Static(&'static str),

    /// Runtime-owned string (loaded from a templates directory)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}
