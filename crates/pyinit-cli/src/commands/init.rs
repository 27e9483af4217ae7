//! Implementation of the `pyinit init` command.
//!
//! Responsibility: merge CLI arguments with the configured defaults into a
//! `ProjectConfig`, call the core scaffold service, and display results. No
//! business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use pyinit_adapters::{LocalFilesystem, SystemClock, SystemProcessRunner};
use pyinit_core::{
    application::ScaffoldService,
    domain::{InitFlags, InitReport, License, MaterializationResult, ProjectConfig, StepState},
};

use crate::{
    cli::InitArgs,
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pyinit init` command.
///
/// 1. Build the validated `ProjectConfig`
/// 2. Dry run: print the plan and stop
/// 3. Scaffold and run the post-init steps
/// 4. Report warnings and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let project = build_project_config(&args, config)?;
    let root = project_root(&args.output, project.name())?;

    debug!(
        license = %project.license(),
        flags = ?project.flags(),
        root = %root.display(),
        "Project configuration resolved"
    );

    let service = ScaffoldService::new(
        template_store(config)?,
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
        Box::new(SystemClock),
    )
    .with_tools(config.tools.clone().into());

    if args.dry_run {
        let plan = service.plan(&project, &root)?;
        return show_plan(&plan, output);
    }

    output.header(&format!("Creating '{}'...", project.name()))?;
    info!(path = %root.display(), "Scaffold started");

    let report = service.init(&project, &root)?;

    info!(project = %project.name(), "Scaffold completed");
    show_report(&report, output)
}

// ── Config construction ───────────────────────────────────────────────────────

/// CLI values win; anything unset comes from `[defaults]`.
fn build_project_config(args: &InitArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
    let defaults = &config.defaults;

    let license = match args.license {
        Some(license) => license,
        None => defaults
            .license
            .parse::<License>()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.license: {e}"),
                source: Some(Box::new(e)),
            })?,
    };

    let flags = InitFlags {
        create_venv: args.venv,
        init_git: args.git,
        setup_ci: args.ci,
        interactive_package_init: args.interactive,
        package_init: !args.no_package_init,
    };

    ProjectConfig::builder(args.name.as_str())
        .description(args.description.as_deref().unwrap_or(defaults.description.as_str()))
        .author(args.author.as_deref().unwrap_or(defaults.author.as_str()))
        .email(args.email.as_deref().unwrap_or(defaults.email.as_str()))
        .license(license)
        .flags(flags)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

/// Absolute, so post-init commands running inside it see the same paths.
fn project_root(output_dir: &Path, name: &str) -> CliResult<PathBuf> {
    Ok(std::path::absolute(output_dir.join(name))?)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &MaterializationResult, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {}",
        plan.created_root.display()
    ))?;
    for dir in &plan.created_dirs {
        output.print(&format!("  {}/", dir.display()))?;
    }
    for file in &plan.created_files {
        output.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}

fn show_report(report: &InitReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for outcome in report.post_init.warnings() {
        if let StepState::Failed { reason } = &outcome.state {
            output.warning(&format!("{} step failed: {reason}", outcome.step))?;
        }
    }

    output.success(&format!(
        "Project '{}' has been successfully initialized!",
        report.project_name
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  cd {}",
            report.materialization.created_root.display()
        ))?;
        output.print("  make test")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
