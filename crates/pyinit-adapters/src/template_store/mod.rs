//! Template store adapters.

mod builtin;
mod overlay;

pub use builtin::BuiltinTemplateStore;
pub use overlay::OverlayTemplateStore;

use pyinit_core::{
    application::ApplicationError,
    domain::{DomainError, RenderContext, TemplateContent},
    error::PyinitResult,
};

/// Render `content` and tag any failure with the template name.
fn render_content(
    name: &str,
    content: &TemplateContent,
    context: &RenderContext,
) -> PyinitResult<Vec<u8>> {
    content
        .render(context)
        .map(String::into_bytes)
        .map_err(|e| render_error(name, &e).into())
}

fn render_error(name: &str, e: &DomainError) -> ApplicationError {
    ApplicationError::TemplateRender {
        template: name.to_string(),
        reason: e.to_string(),
    }
}
