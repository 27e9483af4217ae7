//! Builds the render context for a run.

use crate::{
    application::ports::Clock,
    domain::{ProjectConfig, RenderContext},
};

/// Turns a validated [`ProjectConfig`] into a [`RenderContext`].
///
/// The only input not taken from the config is the year, read from the clock.
pub struct ContextBuilder {
    clock: Box<dyn Clock>,
}

impl ContextBuilder {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn build(&self, config: &ProjectConfig) -> RenderContext {
        RenderContext::from_config(config, self.clock.current_year())
    }
}
