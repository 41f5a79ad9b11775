use super::{escape_html_attr, escape_html_text};
use crate::core::{Block, Document, Inline};
use crate::render::Renderer;
use std::borrow::Cow;

/// Renders documents to HTML, one output line per block.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer {
    /// Escape `&`, `<`, `>` in literal text and code. Off by default so
    /// author-written markup passes through unchanged.
    pub escape_html: bool,
}

impl HtmlRenderer {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            Cow::Owned(escape_html_text(value))
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Renders inline spans without any surrounding block tag.
    pub fn render_inlines(&self, inlines: &[Inline]) -> String {
        let mut out = String::new();
        self.push_inlines(&mut out, inlines);
        out
    }

    fn push_inlines(&self, out: &mut String, inlines: &[Inline]) {
        for inline in inlines {
            match inline {
                Inline::Text(value) => out.push_str(&self.text(value)),
                Inline::Strong(children) => {
                    out.push_str("<strong>");
                    self.push_inlines(out, children);
                    out.push_str("</strong>");
                }
                Inline::Emphasis(children) => {
                    out.push_str("<em>");
                    self.push_inlines(out, children);
                    out.push_str("</em>");
                }
                Inline::Code(children) => {
                    out.push_str("<code>");
                    self.push_inlines(out, children);
                    out.push_str("</code>");
                }
            }
        }
    }

    /// Renders a single block; `Blank` renders as an empty string.
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, text } => {
                let n = level.as_u8();
                format!("<h{}>{}</h{}>", n, self.render_inlines(text), n)
            }
            Block::Rule => "<hr />".to_string(),
            Block::List { items } => {
                let mut out = String::from("<ul>");
                for item in items {
                    out.push_str("<li>");
                    self.push_inlines(&mut out, item);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
                out
            }
            Block::Paragraph { text } => format!("<p>{}</p>", self.render_inlines(text)),
            Block::CodeBlock { language, content } => {
                // An untagged fence still gets `class="language-"`.
                let language: Cow<'_, str> = if self.escape_html {
                    Cow::Owned(escape_html_attr(language))
                } else {
                    Cow::Borrowed(language.as_str())
                };
                format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    language,
                    self.text(content)
                )
            }
            Block::Blank => String::new(),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &Document) -> String {
        document
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HeadingLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_block_mapping() {
        let doc = Document::new(vec![
            Block::Heading {
                level: HeadingLevel::H1,
                text: vec![Inline::text("Title")],
            },
            Block::Blank,
            Block::Paragraph {
                text: vec![
                    Inline::text("Some "),
                    Inline::Emphasis(vec![Inline::text("text")]),
                    Inline::text("."),
                ],
            },
            Block::List {
                items: vec![vec![Inline::text("one")], vec![Inline::Code(vec![Inline::text("two")])]],
            },
            Block::Rule,
        ]);
        assert_eq!(
            HtmlRenderer::default().render(&doc),
            "<h1>Title</h1>\n\n<p>Some <em>text</em>.</p>\n<ul><li>one</li><li><code>two</code></li></ul>\n<hr />"
        );
    }

    #[test]
    fn test_code_block_class_with_and_without_language() {
        let renderer = HtmlRenderer::default();
        let tagged = Block::CodeBlock {
            language: "rust".into(),
            content: "let x = 1;\n".into(),
        };
        let bare = Block::CodeBlock {
            language: String::new(),
            content: "a < b\n".into(),
        };
        assert_eq!(
            renderer.render_block(&tagged),
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>"
        );
        assert_eq!(
            renderer.render_block(&bare),
            "<pre><code class=\"language-\">a < b\n</code></pre>"
        );
    }

    #[test]
    fn test_escaping_applies_to_text_not_tags() {
        let block = Block::Paragraph {
            text: vec![
                Inline::text("<b>x</b> & "),
                Inline::Strong(vec![Inline::text("<i>")]),
                Inline::Code(vec![Inline::text("Vec<u8>")]),
            ],
        };
        assert_eq!(
            HtmlRenderer::default().render_block(&block),
            "<p><b>x</b> & <strong><i></strong><code>Vec<u8></code></p>"
        );
        assert_eq!(
            HtmlRenderer::new(true).render_block(&block),
            "<p>&lt;b&gt;x&lt;/b&gt; &amp; <strong>&lt;i&gt;</strong><code>Vec&lt;u8&gt;</code></p>"
        );
    }

    #[test]
    fn test_inline_code_renders_nested_spans() {
        let block = Block::Paragraph {
            text: vec![Inline::Code(vec![
                Inline::text("a"),
                Inline::Emphasis(vec![Inline::text("b")]),
                Inline::text("c"),
            ])],
        };
        assert_eq!(
            HtmlRenderer::default().render_block(&block),
            "<p><code>a<em>b</em>c</code></p>"
        );
    }

    #[test]
    fn test_empty_document_renders_empty_string() {
        assert_eq!(HtmlRenderer::default().render(&Document::default()), "");
    }
}
