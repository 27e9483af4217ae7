//! PyInit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `pyinit`
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pyinit-cli (CLI)             │
//! │     (Builds ProjectConfig, prints)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, Materializer,        │
//! │   PostInitOrchestrator, ContextBuilder) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore,             │
//! │  ProcessRunner, Clock)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyinit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinTemplateStore, │
//! │  SystemProcessRunner, SystemClock)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyinit_core::prelude::*;
//!
//! let config = ProjectConfig::builder("demo")
//!     .author("Jane Doe")
//!     .license(License::Mit)
//!     .build()?;
//!
//! let service = ScaffoldService::new(store, filesystem, runner, clock);
//! let report = service.init(&config, Path::new("./demo"))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContextBuilder, Materializer, PostInitOrchestrator, ScaffoldService, TemplateInfo,
        TemplateService, ToolCommands,
        ports::{Clock, CommandSpec, CommandStatus, Filesystem, ProcessRunner, TemplateStore},
    };
    pub use crate::domain::{
        DirectoryPlan, InitFlags, InitReport, License, MaterializationResult, PostInitReport,
        PostInitStep, ProjectConfig, ProjectConfigBuilder, RenderContext, StepOutcome, StepState,
        TEMPLATE_SPECS, TemplateContent, TemplateSpec,
    };
    pub use crate::error::{PyinitError, PyinitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
