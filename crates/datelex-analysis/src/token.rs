//! The token unit flowing through analysis pipelines.

/// Marker for what a token's term text represents after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// Ordinary term text.
    #[default]
    Word,
    /// Term text rewritten to the canonical date format.
    Date,
}

/// A single lexical unit: term text plus positional metadata.
///
/// Tokens are owned by the stream that produced them; filters rewrite the
/// term text and kind in place and never change position or offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Term text.
    pub text: String,
    /// Position of this token relative to the start of the stream.
    pub position: usize,
    /// Byte offset of the first character of the token in the source text.
    pub offset_from: usize,
    /// Byte offset one past the last character of the token.
    pub offset_to: usize,
    /// What the term text represents.
    pub kind: TokenKind,
}

impl Token {
    /// Build a token with offsets covering `text` starting at byte 0.
    #[must_use]
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let offset_to = text.len();
        Self {
            text,
            position,
            offset_from: 0,
            offset_to,
            kind: TokenKind::Word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_covers_text() {
        let token = Token::new("hello", 3);
        assert_eq!(token.position, 3);
        assert_eq!(token.offset_from, 0);
        assert_eq!(token.offset_to, 5);
        assert_eq!(token.kind, TokenKind::Word);
    }
}
