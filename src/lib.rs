//! # postmd
//!
//! Markdown-subset to HTML renderer for blog post bodies.
//!
//! Supported syntax: `# ` and `## ` headings, `---` rules, `- ` list items,
//! paragraphs, blank lines, fenced code blocks, and `**strong**`, `*emphasis*`
//! and `` `code` `` spans. Rendering is total: malformed input degrades to
//! literal text instead of failing.
//!
//! ## Example
//!
//! ```
//! use postmd::{MarkdownToHtml, RenderOptions};
//!
//! let converter = MarkdownToHtml::new(RenderOptions::default());
//! let html = converter.convert("# Title\n\nSome *text*.");
//! assert_eq!(html, "<h1>Title</h1>\n\n<p>Some <em>text</em>.</p>");
//! ```

pub mod core;
pub mod error;
pub mod parser;
pub mod posts;
pub mod render;

pub use crate::core::{Block, Document, HeadingLevel, Inline, InlineText, Segment};
pub use error::{Error, Result};
pub use parser::{BlockParser, FenceSplitter, InlineFormatter};
pub use posts::PostTable;
pub use render::{HtmlRenderer, Renderer};

use std::path::Path;

/// Options for markdown to HTML rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Whether to HTML-escape literal text and code content.
    pub escape_html: bool,
}

/// Main converter that parses a body and renders it to HTML.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: RenderOptions,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parses a body into blocks without rendering.
    pub fn parse(&self, input: &str) -> Document {
        BlockParser::parse(input)
    }

    /// Converts a markdown body to HTML.
    pub fn convert(&self, input: &str) -> String {
        let document = self.parse(input);
        HtmlRenderer::new(self.options.escape_html).render(&document)
    }

    /// Reads a markdown file and converts it.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let input = std::fs::read_to_string(path.as_ref())?;
        Ok(self.convert(&input))
    }
}

/// Converts a markdown body with default options.
pub fn render_markdown(input: &str) -> String {
    MarkdownToHtml::with_defaults().convert(input)
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::{MarkdownToHtml, RenderOptions};
    use pyo3::prelude::*;

    /// Converts a markdown body to HTML.
    #[pyfunction]
    #[pyo3(name = "render_markdown", signature = (text, escape_html = false))]
    fn py_render_markdown(text: &str, escape_html: bool) -> String {
        MarkdownToHtml::new(RenderOptions { escape_html }).convert(text)
    }

    /// Converts a markdown file to HTML.
    #[pyfunction]
    #[pyo3(signature = (path, escape_html = false))]
    fn render_file(path: String, escape_html: bool) -> PyResult<String> {
        MarkdownToHtml::new(RenderOptions { escape_html })
            .convert_file(&path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn postmd(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_render_markdown, m)?)?;
        m.add_function(wrap_pyfunction!(render_file, m)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_end_to_end() {
        let html = render_markdown("# Title\n\nSome *text*.\n\n- one\n- two\n\n---\n");
        assert_eq!(
            html,
            "<h1>Title</h1>\n\n<p>Some <em>text</em>.</p>\n\n<ul><li>one</li><li>two</li></ul>\n\n<hr />"
        );
    }

    #[test]
    fn test_escape_option() {
        let converter = MarkdownToHtml::new(RenderOptions { escape_html: true });
        assert!(converter.options().escape_html);
        assert_eq!(converter.convert("a <b>"), "<p>a &lt;b&gt;</p>");
        assert_eq!(render_markdown("a <b>"), "<p>a <b></p>");
    }

    #[test]
    fn test_empty_input() {
        assert!(MarkdownToHtml::with_defaults().parse("").is_empty());
        assert_eq!(render_markdown(""), "");
    }
}
