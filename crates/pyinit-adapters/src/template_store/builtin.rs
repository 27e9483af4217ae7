//! Templates compiled into the binary.

use pyinit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{RenderContext, TemplateContent, TemplateSource},
    error::PyinitResult,
};

use super::render_content;

/// License bodies, keyed by the `license` context value.
const LICENSE_VARIANTS: &[(&str, &str)] = &[
    ("MIT", include_str!("../../templates/license/MIT.j2")),
    (
        "Apache-2.0",
        include_str!("../../templates/license/Apache-2.0.j2"),
    ),
    ("GPL-3.0", include_str!("../../templates/license/GPL-3.0.j2")),
];

const fn parameterized(source: &'static str) -> TemplateContent {
    TemplateContent::Parameterized(TemplateSource::Static(source))
}

const fn literal(source: &'static str) -> TemplateContent {
    TemplateContent::Literal(TemplateSource::Static(source))
}

/// Sorted by name.
static BUILTIN_TEMPLATES: &[(&str, TemplateContent)] = &[
    (
        ".gitignore.j2",
        literal(include_str!("../../templates/.gitignore.j2")),
    ),
    (
        "LICENSE.j2",
        TemplateContent::Selected {
            key: "license",
            variants: LICENSE_VARIANTS,
        },
    ),
    (
        "Makefile.j2",
        parameterized(include_str!("../../templates/Makefile.j2")),
    ),
    (
        "README.md.j2",
        parameterized(include_str!("../../templates/README.md.j2")),
    ),
    // GitHub Actions expressions use `${{ }}`, so the workflow is copied as-is.
    ("ci.yml.j2", literal(include_str!("../../templates/ci.yml.j2"))),
    (
        "dependabot.yml.j2",
        literal(include_str!("../../templates/dependabot.yml.j2")),
    ),
    (
        "requirements.txt.j2",
        parameterized(include_str!("../../templates/requirements.txt.j2")),
    ),
    (
        "src_init.py.j2",
        parameterized(include_str!("../../templates/src_init.py.j2")),
    ),
    (
        "test_project.py.j2",
        parameterized(include_str!("../../templates/test_project.py.j2")),
    ),
];

/// The templates that ship with pyinit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, name: &str) -> Option<&'static TemplateContent> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, content)| content)
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn render(&self, name: &str, context: &RenderContext) -> PyinitResult<Vec<u8>> {
        let content = self
            .get(name)
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                name: name.to_string(),
            })?;
        render_content(name, content, context)
    }

    fn names(&self) -> Vec<String> {
        BUILTIN_TEMPLATES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyinit_core::{
        domain::{License, ProjectConfig, TEMPLATE_SPECS},
        error::PyinitError,
    };

    fn context(license: License) -> RenderContext {
        let config = ProjectConfig::builder("demo")
            .author("Jane Doe")
            .email("jane@example.com")
            .license(license)
            .build()
            .unwrap();
        RenderContext::from_config(&config, 2024)
    }

    fn render(name: &str, license: License) -> String {
        let bytes = BuiltinTemplateStore.render(name, &context(license)).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn every_table_entry_renders_for_every_license() {
        for license in License::ALL {
            for spec in TEMPLATE_SPECS {
                let out = render(spec.source_name, license);
                assert!(!out.is_empty(), "{} rendered empty", spec.source_name);
            }
        }
    }

    #[test]
    fn names_are_sorted_and_cover_the_table() {
        let names = BuiltinTemplateStore.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(
            TEMPLATE_SPECS
                .iter()
                .all(|s| names.iter().any(|n| n == s.source_name))
        );
    }

    #[test]
    fn readme_carries_name_and_author() {
        let readme = render("README.md.j2", License::Mit);
        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("Jane Doe"));
        assert!(readme.contains("2024"));
    }

    #[test]
    fn license_follows_the_selected_license() {
        let mit = render("LICENSE.j2", License::Mit);
        assert!(mit.starts_with("MIT License"));
        assert!(mit.contains("Copyright (c) 2024 Jane Doe"));

        assert!(render("LICENSE.j2", License::Apache2).contains("Apache License, Version 2.0"));
        assert!(render("LICENSE.j2", License::Gpl3).contains("GNU General Public License"));
    }

    #[test]
    fn ci_workflow_keeps_actions_expressions() {
        let ci = render("ci.yml.j2", License::Mit);
        assert!(ci.contains("${{ matrix.python-version }}"));
    }

    #[test]
    fn makefile_keeps_tab_indentation() {
        let makefile = render("Makefile.j2", License::Mit);
        assert!(makefile.contains("\tpytest tests"));
        assert!(makefile.contains("flake8 src/demo tests"));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = BuiltinTemplateStore
            .render("setup.py.j2", &context(License::Mit))
            .unwrap_err();
        assert!(matches!(
            err,
            PyinitError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }
}
