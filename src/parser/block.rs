//! Block parser - classifies prose lines and groups list items.

use super::{FenceSplitter, InlineFormatter};
use crate::core::{Block, Document, HeadingLevel, InlineText, Segment};

/// Pending list items carried across lines.
///
/// Non-empty exactly while the scan is inside a list.
#[derive(Debug, Default)]
struct ListAccumulator {
    items: Vec<InlineText>,
}

impl ListAccumulator {
    fn push(&mut self, item: InlineText) {
        self.items.push(item);
    }

    fn in_list(&self) -> bool {
        !self.items.is_empty()
    }

    /// Emits the buffered items as one list block; no-op when empty.
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        if self.items.is_empty() {
            return;
        }
        log::trace!("closing list of {} item(s)", self.items.len());
        blocks.push(Block::List {
            items: std::mem::take(&mut self.items),
        });
    }
}

/// Kind of a single prose line, tested in priority order.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Heading(HeadingLevel, &'a str),
    Rule,
    ListItem(&'a str),
    Blank,
    Paragraph(&'a str),
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        // "## " must be tried before "# ".
        if let Some(rest) = line.strip_prefix("## ") {
            LineKind::Heading(HeadingLevel::H2, rest)
        } else if let Some(rest) = line.strip_prefix("# ") {
            LineKind::Heading(HeadingLevel::H1, rest)
        } else if line == "---" {
            LineKind::Rule
        } else if let Some(rest) = line.strip_prefix("- ") {
            LineKind::ListItem(rest)
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Paragraph(line)
        }
    }
}

/// Turns raw text into a [`Document`].
pub struct BlockParser;

impl BlockParser {
    /// Splits out fenced code, then parses each prose segment line by line.
    pub fn parse(input: &str) -> Document {
        let mut blocks = Vec::new();

        for segment in FenceSplitter::split(input) {
            match segment {
                Segment::Text(text) => blocks.extend(Self::parse_text(text)),
                Segment::Code {
                    language, content, ..
                } => blocks.push(Self::parse_code(language, content)),
            }
        }

        log::debug!("parsed {} block(s) from {} byte(s)", blocks.len(), input.len());
        Document::new(blocks)
    }

    /// A fenced region always yields exactly one code block, content untouched.
    pub fn parse_code(language: &str, content: &str) -> Block {
        Block::CodeBlock {
            language: language.to_string(),
            content: content.to_string(),
        }
    }

    /// Parses prose without any fence handling.
    pub fn parse_text(text: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut list = ListAccumulator::default();

        for line in text.lines() {
            match LineKind::classify(line) {
                LineKind::Heading(level, rest) => {
                    list.flush(&mut blocks);
                    blocks.push(Block::Heading {
                        level,
                        text: InlineFormatter::format(rest),
                    });
                }
                LineKind::Rule => {
                    list.flush(&mut blocks);
                    blocks.push(Block::Rule);
                }
                LineKind::ListItem(rest) => {
                    if !list.in_list() {
                        log::trace!("opening list");
                    }
                    list.push(InlineFormatter::format(rest));
                }
                LineKind::Blank => {
                    list.flush(&mut blocks);
                    blocks.push(Block::Blank);
                }
                LineKind::Paragraph(line) => {
                    list.flush(&mut blocks);
                    blocks.push(Block::Paragraph {
                        text: InlineFormatter::format(line),
                    });
                }
            }
        }
        list.flush(&mut blocks);

        blocks
    }
}
