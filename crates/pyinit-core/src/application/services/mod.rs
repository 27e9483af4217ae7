//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a project" or "list templates".

pub mod context_builder;
pub mod materializer;
pub mod post_init;
pub mod scaffold_service;
pub mod template_service;

pub use context_builder::ContextBuilder;
pub use materializer::Materializer;
pub use post_init::{PostInitOrchestrator, ToolCommands};
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateService};
