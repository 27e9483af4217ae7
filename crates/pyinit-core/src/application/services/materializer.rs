//! Materializer - turns the template table into files on disk.
//!
//! Workflow:
//! 1. Refuse an existing root (the only precondition gate)
//! 2. Create every directory in the [`DirectoryPlan`]
//! 3. Render and write each template in table order, stopping at the first error
//!
//! A failure part-way leaves the partial tree in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{
        DirectoryPlan, MaterializationResult, RelativePath, RenderContext, TemplateSpec,
        resolve_specs,
    },
    error::PyinitResult,
};

pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn TemplateStore>,
}

impl Materializer {
    pub fn new(filesystem: Box<dyn Filesystem>, store: Box<dyn TemplateStore>) -> Self {
        Self { filesystem, store }
    }

    /// Create the project root. Missing parents are created too.
    pub fn create_root(&self, root: &Path) -> PyinitResult<()> {
        self.check_root_free(root)?;
        self.filesystem.create_dir_all(root)?;
        info!(path = %root.display(), "Created project root");
        Ok(())
    }

    /// Create each planned directory under `root`. Existing ones are left alone.
    pub fn ensure_directories(
        &self,
        root: &Path,
        plan: &DirectoryPlan,
    ) -> PyinitResult<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(plan.len());
        for dir in plan.directories() {
            let path = root.join(dir);
            self.filesystem.create_dir_all(&path)?;
            debug!(path = %path.display(), "Created directory");
            created.push(path);
        }
        Ok(created)
    }

    /// Write `content` to `root/relative`, creating its parent first.
    pub fn write_file(
        &self,
        root: &Path,
        relative: &RelativePath,
        content: &[u8],
    ) -> PyinitResult<PathBuf> {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(path)
    }

    #[instrument(
        skip_all,
        fields(root = %root.display(), project = %context.project_name())
    )]
    pub fn materialize(
        &self,
        root: &Path,
        specs: &[TemplateSpec],
        context: &RenderContext,
    ) -> PyinitResult<MaterializationResult> {
        let templates = resolve_specs(specs, context.project_name())?;
        let plan = DirectoryPlan::from_templates(&templates);

        self.create_root(root)?;

        let mut result = MaterializationResult::new(root);
        result.created_dirs = self.ensure_directories(root, &plan)?;

        for template in &templates {
            let content = self.store.render(template.source_name, context)?;
            let path = self.write_file(root, &template.output, &content)?;
            result.created_files.push(path);
        }

        info!(
            directories = result.created_dirs.len(),
            files = result.created_files.len(),
            "Materialization complete"
        );
        Ok(result)
    }

    /// What [`Materializer::materialize`] would create, without writing.
    ///
    /// Every template is still rendered so that undefined variables surface.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn plan(
        &self,
        root: &Path,
        specs: &[TemplateSpec],
        context: &RenderContext,
    ) -> PyinitResult<MaterializationResult> {
        self.check_root_free(root)?;

        let templates = resolve_specs(specs, context.project_name())?;
        let plan = DirectoryPlan::from_templates(&templates);

        let mut result = MaterializationResult::new(root);
        result.created_dirs = plan.directories().iter().map(|d| root.join(d)).collect();

        for template in &templates {
            self.store.render(template.source_name, context)?;
            result.created_files.push(root.join(&template.output));
        }

        Ok(result)
    }

    fn check_root_free(&self, root: &Path) -> PyinitResult<()> {
        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}
