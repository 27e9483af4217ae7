//! Infrastructure adapters for PyInit.
//!
//! This crate implements the ports defined in `pyinit-core::application::ports`.
//! It contains all I/O: the local filesystem, the compiled-in and on-disk
//! templates, child processes, and the wall clock.

pub mod clock;
pub mod filesystem;
pub mod process;
pub mod template_store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemProcessRunner;
pub use template_store::{BuiltinTemplateStore, OverlayTemplateStore};
