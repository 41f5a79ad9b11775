mod escape;
mod html;

use crate::core::Document;

pub use escape::{escape_html_attr, escape_html_text};
pub use html::HtmlRenderer;

/// Turns a parsed document into output markup.
///
/// Rendering never fails: every document has an output.
pub trait Renderer {
    fn render(&self, document: &Document) -> String;
}
