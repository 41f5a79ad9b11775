//! Parser modules for markdown-subset to document transformation.
//!
//! Data flows one way: raw text is split into fenced and prose segments,
//! prose is classified line by line into blocks, and each prose line gets
//! inline formatting. Nothing is kept between calls.

mod block;
mod fence;
mod inline;

pub use self::block::BlockParser;
pub use self::fence::FenceSplitter;
pub use self::inline::InlineFormatter;
