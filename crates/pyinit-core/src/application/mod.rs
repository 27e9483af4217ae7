//! Application layer for PyInit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer, PostInitOrchestrator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Validation and rendering live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ContextBuilder, Materializer, PostInitOrchestrator, ScaffoldService, TemplateInfo,
    TemplateService, ToolCommands,
};

pub use ports::{Clock, CommandSpec, CommandStatus, Filesystem, ProcessRunner, TemplateStore};

pub use error::ApplicationError;
