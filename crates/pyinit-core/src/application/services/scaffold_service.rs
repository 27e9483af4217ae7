//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire `init` workflow:
//! 1. Build the render context from the validated config
//! 2. Materialize the template table under the project root
//! 3. Run the post-init steps inside the new root
//!
//! It is the driving entry point used by the CLI and wires the driven ports
//! (filesystem, template store, process runner, clock) together.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Clock, Filesystem, ProcessRunner, TemplateStore},
        services::{ContextBuilder, Materializer, PostInitOrchestrator, ToolCommands},
    },
    domain::{InitReport, MaterializationResult, ProjectConfig, TEMPLATE_SPECS},
    error::PyinitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    context: ContextBuilder,
    materializer: Materializer,
    post_init: PostInitOrchestrator,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pyinit_core::prelude::*;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl ProcessRunner
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            context: ContextBuilder::new(clock),
            materializer: Materializer::new(filesystem, store),
            post_init: PostInitOrchestrator::new(runner),
        }
    }

    /// Replace the default tool program names.
    pub fn with_tools(mut self, tools: ToolCommands) -> Self {
        self.post_init = self.post_init.with_tools(tools);
        self
    }

    /// Create the project at `root` and bootstrap it.
    ///
    /// `root` is the project directory itself, not its parent.
    #[instrument(
        skip_all,
        fields(project = %config.name(), root = %root.display())
    )]
    pub fn init(&self, config: &ProjectConfig, root: &Path) -> PyinitResult<InitReport> {
        info!("Initializing project");

        let context = self.context.build(config);
        let materialization = self.materializer.materialize(root, TEMPLATE_SPECS, &context)?;
        let post_init = self.post_init.run(config, root)?;

        info!(warnings = post_init.warnings().count(), "Project initialized");
        Ok(InitReport {
            project_name: config.name().to_string(),
            materialization,
            post_init,
        })
    }

    /// Dry run: what [`ScaffoldService::init`] would create. No tools are run.
    pub fn plan(&self, config: &ProjectConfig, root: &Path) -> PyinitResult<MaterializationResult> {
        let context = self.context.build(config);
        self.materializer.plan(root, TEMPLATE_SPECS, &context)
    }
}
