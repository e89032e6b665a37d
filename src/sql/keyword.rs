//! SQL keyword tables shared by the normalizer and the tokenizer.
//!
//! This module defines the closed set of words that are case-folded during
//! normalization, plus the multi-word phrase tables the tokenizer handlers
//! match against. Everything here is read-only static data.
//!
//! Design notes:
//! - Keywords are matched case-insensitively (ASCII only) against whole words.
//! - `as_str` provides the canonical uppercase representation which is what
//!   ends up in the normalized statement and in keyword token text.
//! - Phrase tables are ordered longest first; handlers commit to the first
//!   phrase that matches, so `LEFT OUTER JOIN` wins over `LEFT JOIN`.

use itertools::Itertools as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    Distinct,
    DistinctRow,
    All,
    SqlCache,
    SqlNoCache,
    SqlCalcFoundRows,
    HighPriority,
    From,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    On,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Offset,
    Like,
    Binary,
    Not,
    And,
    Or,
    In,
}

impl Keyword {
    /// Every recognized keyword, used for whole-word lookups.
    pub const ALL: [Self; 29] = [
        Keyword::Select,
        Keyword::Distinct,
        Keyword::DistinctRow,
        Keyword::All,
        Keyword::SqlCache,
        Keyword::SqlNoCache,
        Keyword::SqlCalcFoundRows,
        Keyword::HighPriority,
        Keyword::From,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Outer,
        Keyword::On,
        Keyword::Where,
        Keyword::Group,
        Keyword::By,
        Keyword::Having,
        Keyword::Order,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Like,
        Keyword::Binary,
        Keyword::Not,
        Keyword::And,
        Keyword::Or,
        Keyword::In,
    ];

    /// Modifiers allowed directly after `SELECT` (at most one is merged).
    pub const SELECT_MODIFIERS: [Self; 7] = [
        Keyword::Distinct,
        Keyword::DistinctRow,
        Keyword::All,
        Keyword::SqlCache,
        Keyword::SqlNoCache,
        Keyword::SqlCalcFoundRows,
        Keyword::HighPriority,
    ];

    /// Classify a whole word, ignoring ASCII case.
    /// Returns `None` if the word is not a recognized keyword.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }

    /// Canonical uppercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            Distinct => "DISTINCT",
            DistinctRow => "DISTINCTROW",
            All => "ALL",
            SqlCache => "SQL_CACHE",
            SqlNoCache => "SQL_NO_CACHE",
            SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
            HighPriority => "HIGH_PRIORITY",
            From => "FROM",
            Join => "JOIN",
            Inner => "INNER",
            Left => "LEFT",
            Right => "RIGHT",
            Full => "FULL",
            Outer => "OUTER",
            On => "ON",
            Where => "WHERE",
            Group => "GROUP",
            By => "BY",
            Having => "HAVING",
            Order => "ORDER",
            Limit => "LIMIT",
            Offset => "OFFSET",
            Like => "LIKE",
            Binary => "BINARY",
            Not => "NOT",
            And => "AND",
            Or => "OR",
            In => "IN",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multi-word keyword sequence, e.g. `LEFT OUTER JOIN`.
pub type Phrase = &'static [Keyword];

/// Join phrases, longest first.
pub const JOIN_PHRASES: [Phrase; 7] = {
    use Keyword::*;
    [
        &[Left, Outer, Join],
        &[Right, Outer, Join],
        &[Full, Outer, Join],
        &[Inner, Join],
        &[Left, Join],
        &[Right, Join],
        &[Join],
    ]
};

/// Word comparison phrases, longest first.
pub const COMPARE_PHRASES: [Phrase; 4] = {
    use Keyword::*;
    [
        &[Not, Like, Binary],
        &[Not, Like],
        &[Like, Binary],
        &[Like],
    ]
};

/// Symbolic comparison operators, longest first.
pub const COMPARE_SYMBOLS: [&str; 8] = ["<=>", "!=", "<>", "<=", ">=", "=", "<", ">"];

/// Canonical text of a phrase: its keywords joined by single spaces.
pub fn phrase_text(phrase: Phrase) -> String {
    phrase.iter().map(|kw| kw.as_str()).join(" ")
}

/// Characters that may appear inside a bare word (identifier or keyword).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
