//! Tokenizers producing the streams this crate's filters consume.
//!
//! Date fields typically reach the normalization filter as whole field
//! values, so the default tokenizer keeps the input unsplit. `LineTokenizer`
//! exists for batch input where each line is one term.

use crate::stream::VecTokenStream;
use crate::token::{Token, TokenKind};

/// Emits the entire input as a single token (field-value semantics).
///
/// Empty or whitespace-only input produces an empty stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTokenizer;

impl RawTokenizer {
    /// Tokenize `text` into a stream of at most one token.
    #[must_use]
    pub fn token_stream(&self, text: &str) -> VecTokenStream {
        if text.trim().is_empty() {
            return VecTokenStream::new(Vec::new());
        }
        VecTokenStream::new(vec![Token {
            text: text.to_string(),
            position: 0,
            offset_from: 0,
            offset_to: text.len(),
            kind: TokenKind::Word,
        }])
    }
}

/// Emits one token per non-empty line, with byte offsets into the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Tokenize `text` line by line. Blank lines are skipped without
    /// consuming a position.
    #[must_use]
    pub fn token_stream(&self, text: &str) -> VecTokenStream {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut offset = 0;
        for line in text.split('\n') {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                let start = offset + (trimmed.as_ptr() as usize - line.as_ptr() as usize);
                tokens.push(Token {
                    text: trimmed.to_string(),
                    position,
                    offset_from: start,
                    offset_to: start + trimmed.len(),
                    kind: TokenKind::Word,
                });
                position += 1;
            }
            offset += line.len() + 1;
        }
        VecTokenStream::new(tokens)
    }
}
