//! Core domain layer for PyInit.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! lookup, process execution and the wall clock are reached through ports
//! defined in the application layer.
//!
//! - **No I/O**: no filesystem, network, or subprocess calls
//! - **Immutable values**: configuration and context never change after construction
//! - **Static data**: the template list is a `const` table, not branching code
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    directory_plan::DirectoryPlan,
    project_config::{InitFlags, ProjectConfig, ProjectConfigBuilder},
    render_context::RenderContext,
    report::{
        InitReport, MaterializationResult, PostInitReport, PostInitStep, StepOutcome, StepState,
    },
    template::{
        ResolvedTemplate, TEMPLATE_SPECS, TemplateContent, TemplateSource, TemplateSpec,
        resolve_specs,
    },
};

pub use error::DomainError;

pub use value_objects::License;

pub use validation::DomainValidator;
