//! Keyword normalization and lenient tokenization of SQL statements.
//!
//! This module is the core of the formatter: it turns a raw statement into a
//! flat stream of classified tokens without requiring a full parser. The
//! components are intentionally pragmatic:
//!
//! Modules:
//! - `keyword`    : Keyword enum plus the static phrase tables handlers match.
//! - `quoting`    : Quoted-region tracking shared by both passes.
//! - `normalize`  : Uppercases keywords and strips the trailing terminator.
//! - `token_kind` : Closed set of token categories.
//! - `token`      : Token struct pairing a `TokenKind` with its text.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>`.
//!
//! Design Principles:
//! 1. Accept malformed SQL; degrade to generic text instead of failing.
//! 2. Preserve identifier, literal and quoted text byte for byte.
//! 3. Keep parenthesized regions opaque so sub-selects never leak clause
//!    tokens to the outer level.
//!
//! Example:
//! ```text
//! let normalized = normalize("select * from my_table;");
//! let tokens = tokenize(&normalized.sql);
//! assert!(normalized.had_terminator);
//! assert!(tokens[0].is(TokenKind::Select));
//! ```
//!
//! NOTE: This is **not** a SQL validator; malformed input may tokenize into a
//! plausible-but-wrong stream.

pub mod keyword;
pub mod normalize;
pub mod quoting;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use normalize::{Normalized, normalize};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, Normalized, Token, TokenKind, normalize, tokenize};
}
