//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pyinit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file creation
//!   - `TemplateStore`: template lookup and rendering
//!   - `ProcessRunner`: blocking subprocess execution
//!   - `Clock`: current calendar year
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{Clock, CommandSpec, CommandStatus, Filesystem, ProcessRunner, TemplateStore};
