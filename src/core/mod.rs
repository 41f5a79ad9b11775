pub mod ast;

pub use ast::{Block, Document, HeadingLevel, Inline, InlineText, Segment};
