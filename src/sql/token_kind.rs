//! Token categories produced by the tokenizer.
//!
//! The set is closed: every run of statement text is classified as one of
//! these. Anything that is not a clause keyword, join phrase, comparison or
//! conjunction falls into `Str`, the catch-all for identifiers, expressions,
//! literals and parenthesized sub-expressions.
//!
//! `Display` renders the uppercase category name (`SELECT`, `STR`, ...), which
//! is what the `--tokens` debug output prints.

use derive_more::Display;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// `SELECT`, optionally merged with one modifier (`SELECT DISTINCT`).
    #[display("SELECT")]
    Select,
    #[display("FROM")]
    From,
    /// Any join phrase, from `JOIN` up to `FULL OUTER JOIN`.
    #[display("JOIN")]
    Join,
    #[display("ON")]
    On,
    #[display("WHERE")]
    Where,
    /// `GROUP BY`.
    #[display("GROUP")]
    Group,
    #[display("HAVING")]
    Having,
    /// `ORDER BY`.
    #[display("ORDER")]
    Order,
    #[display("LIMIT")]
    Limit,
    #[display("OFFSET")]
    Offset,
    /// Symbolic comparisons and `LIKE` phrases.
    #[display("COMPARE")]
    Compare,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("IN")]
    In,
    /// Everything else.
    #[display("STR")]
    Str,
}

impl TokenKind {
    /// True for every category whose text is keyword text (all but `Str`).
    ///
    /// Symbolic comparisons (`=`, `<>`) count as keyword categories too; their
    /// text simply has no case.
    pub fn is_keyword_category(&self) -> bool {
        !matches!(self, TokenKind::Str)
    }

    /// True for categories that introduce a top-level clause.
    pub fn is_clause(&self) -> bool {
        matches!(
            self,
            TokenKind::Select
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::Group
                | TokenKind::Having
                | TokenKind::Order
                | TokenKind::Limit
                | TokenKind::Offset
        )
    }

    /// True for `AND` / `OR`.
    pub fn is_conjunction(&self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }
}
