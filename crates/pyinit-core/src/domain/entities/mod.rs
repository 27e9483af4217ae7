pub mod common;
pub mod directory_plan;
pub mod project_config;
pub mod render_context;
pub mod report;
pub mod template;
