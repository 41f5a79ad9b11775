//! Inline formatter - strong, emphasis, and code spans within one line.

use crate::core::{Inline, InlineText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Strong,
    Emphasis,
    Code,
}

/// Scanner state: either a raw character still open to matching, or a span
/// recognized by an earlier pass. A span's delimiters are gone, so later
/// passes see it as a single non-delimiter token.
#[derive(Debug, Clone)]
enum Token {
    Char(char),
    Span(SpanKind, Vec<Token>),
}

/// Converter for a single line of prose.
pub struct InlineFormatter;

impl InlineFormatter {
    /// Formats one line into inline spans.
    ///
    /// Passes run strong, then emphasis, then code. Strong goes first so a
    /// `**` pair is never split in half by the single-asterisk rule. Each
    /// span is non-empty and holds no copy of its own delimiter; a delimiter
    /// that cannot be paired stays literal.
    pub fn format(line: &str) -> InlineText {
        let tokens: Vec<Token> = line.chars().map(Token::Char).collect();
        let tokens = Self::pair_delimiters(tokens, '*', 2, SpanKind::Strong);
        let tokens = Self::pair_delimiters(tokens, '*', 1, SpanKind::Emphasis);
        let tokens = Self::code_spans(tokens);
        Self::collect(tokens)
    }

    /// Pairs backticks inside already-formatted spans first, then at this level.
    fn code_spans(tokens: Vec<Token>) -> Vec<Token> {
        let tokens = tokens
            .into_iter()
            .map(|token| match token {
                Token::Span(kind, children) => Token::Span(kind, Self::code_spans(children)),
                other => other,
            })
            .collect();
        Self::pair_delimiters(tokens, '`', 1, SpanKind::Code)
    }

    /// Wraps every leftmost `width`-long `delimiter` run pair whose content is
    /// non-empty and free of `delimiter`.
    fn pair_delimiters(
        tokens: Vec<Token>,
        delimiter: char,
        width: usize,
        kind: SpanKind,
    ) -> Vec<Token> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            if Self::is_delimiter(&tokens, i, delimiter, width) {
                let start = i + width;
                let close = tokens[start..]
                    .iter()
                    .position(|t| matches!(t, Token::Char(c) if *c == delimiter))
                    .map(|offset| start + offset);
                if let Some(close) = close {
                    if close > start && Self::is_delimiter(&tokens, close, delimiter, width) {
                        out.push(Token::Span(kind, tokens[start..close].to_vec()));
                        i = close + width;
                        continue;
                    }
                }
            }
            out.push(tokens[i].clone());
            i += 1;
        }

        out
    }

    fn is_delimiter(tokens: &[Token], at: usize, delimiter: char, width: usize) -> bool {
        at + width <= tokens.len()
            && tokens[at..at + width]
                .iter()
                .all(|t| matches!(t, Token::Char(c) if *c == delimiter))
    }

    /// Merges runs of raw characters into text spans.
    fn collect(tokens: Vec<Token>) -> InlineText {
        let mut inlines = Vec::new();
        let mut text = String::new();

        for token in tokens {
            match token {
                Token::Char(c) => text.push(c),
                Token::Span(kind, children) => {
                    if !text.is_empty() {
                        inlines.push(Inline::Text(std::mem::take(&mut text)));
                    }
                    let children = Self::collect(children);
                    inlines.push(match kind {
                        SpanKind::Strong => Inline::Strong(children),
                        SpanKind::Emphasis => Inline::Emphasis(children),
                        SpanKind::Code => Inline::Code(children),
                    });
                }
            }
        }
        if !text.is_empty() {
            inlines.push(Inline::Text(text));
        }

        inlines
    }
}
