//! Token model pairing a `TokenKind` with its text.
//!
//! A `Token` carries no offsets: consumers rely only on the order of the
//! stream. Equality is structural (same kind, same text), which keeps the
//! table-driven tests readable.
//!
//! See sibling modules:
//! - `token_kind.rs` for the category enumeration.
//! - `tokenizer.rs`  for producing `Vec<Token>` from a normalized statement.
use crate::sql::token_kind::TokenKind;
use derive_more::Display;

/// A classified span of normalized SQL text.
///
/// Invariants:
/// - `text` is never empty and has no leading/trailing whitespace.
/// - For keyword categories `text` is uppercase with single spaces between
///   the words of a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{text}")]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for a generic `Str` token.
    pub fn str(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Str, text)
    }

    /// Returns true if this token is of the given category.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
