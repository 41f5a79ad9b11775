//! Data model shared by the parser and the renderers.

/// A contiguous span of raw input, classified before block parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Prose that still needs block and inline parsing.
    Text(&'a str),
    /// A fully closed fenced region.
    Code {
        /// Tag written right after the opening fence, empty if none.
        language: &'a str,
        /// Everything between the opening fence's newline and the closing fence.
        content: &'a str,
        /// The whole fenced region, markers included.
        raw: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Returns the exact slice of input this segment was cut from.
    pub fn source(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Code { raw, .. } => raw,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }
}

/// Inline markup inside a single line of prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    /// Inline code; strong and emphasis inside backticks are still applied.
    Code(Vec<Inline>),
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }
}

/// Inline-formatted text carried by headings, paragraphs, and list items.
pub type InlineText = Vec<Inline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: InlineText,
    },
    Rule,
    /// A run of adjacent list lines; never empty.
    List {
        items: Vec<InlineText>,
    },
    Paragraph {
        text: InlineText,
    },
    CodeBlock {
        language: String,
        content: String,
    },
    /// An empty source line, kept so the output keeps its spacing.
    Blank,
}

/// Ordered sequence of blocks produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_source_includes_fence_markers() {
        let segment = Segment::Code {
            language: "rust",
            content: "let x = 1;\n",
            raw: "```rust\nlet x = 1;\n```",
        };
        assert!(segment.is_code());
        assert_eq!(segment.source(), "```rust\nlet x = 1;\n```");
        assert_eq!(Segment::Text("plain").source(), "plain");
    }
}
