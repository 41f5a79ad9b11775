//! Fence splitter - separates fenced code regions from prose.

use crate::core::Segment;
use regex::Regex;
use std::sync::OnceLock;

/// Opening fence at a line start with an optional word-character tag, then the
/// nearest closing fence.
const FENCE_PATTERN: &str = r"(?m)^```(\w*)\n((?s:.*?))```";

fn fence_regex() -> &'static Regex {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    FENCE_REGEX.get_or_init(|| Regex::new(FENCE_PATTERN).expect("Invalid fence regex"))
}

/// Splits raw input into text and code segments.
pub struct FenceSplitter;

impl FenceSplitter {
    /// Partitions `input` into segments in source order.
    ///
    /// Only closed fences are recognized; an unterminated opening marker stays
    /// in the surrounding text segment. Empty text between fences is skipped,
    /// but input without any fence is always returned as a single text segment.
    pub fn split(input: &str) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in fence_regex().captures_iter(input) {
            let (Some(whole), Some(language), Some(content)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            if whole.start() > last_end {
                segments.push(Segment::Text(&input[last_end..whole.start()]));
            }

            log::trace!(
                "fenced code at {}..{} (language {:?})",
                whole.start(),
                whole.end(),
                language.as_str()
            );
            segments.push(Segment::Code {
                language: language.as_str(),
                content: content.as_str(),
                raw: whole.as_str(),
            });
            last_end = whole.end();
        }

        if segments.is_empty() {
            return vec![Segment::Text(input)];
        }
        if last_end < input.len() {
            segments.push(Segment::Text(&input[last_end..]));
        }

        segments
    }
}
