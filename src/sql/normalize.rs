use crate::sql::{
    keyword::{Keyword, is_word_char},
    quoting::Quoting,
};
use crate::*;

/// Statement terminator stripped by [`normalize`].
pub const TERMINATOR: char = ';';

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    /// Statement text with keywords uppercased and the terminator removed.
    pub sql: String,
    /// Whether a trailing terminator was stripped.
    pub had_terminator: bool,
}

impl Normalized {
    pub fn into_parts(self) -> (String, bool) {
        (self.sql, self.had_terminator)
    }
}

/// Canonicalize a raw statement before tokenization.
///
/// Behavior:
/// - Trims surrounding whitespace, then strips one trailing `;` (and any
///   whitespace in front of it).
/// - Uppercases every recognized keyword appearing as a whole word outside of
///   quoted regions. Everything else is copied unchanged, including
///   whitespace runs inside the statement.
///
/// Never fails; an empty input yields an empty statement without terminator.
pub fn normalize(raw: &str) -> Normalized {
    let trimmed = raw.trim();
    let (body, had_terminator) = match trimmed.strip_suffix(TERMINATOR) {
        Some(body) => (body.trim_end(), true),
        None => (trimmed, false),
    };
    debug!(had_terminator, len = body.len(), "normalizing statement");

    Normalized {
        sql: uppercase_keywords(body),
        had_terminator,
    }
}

fn uppercase_keywords(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut quoting = Quoting::default();
    let mut chars = sql.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if quoting.step(c) || !is_word_char(c) {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let word = &sql[start..end];
        match Keyword::from_word(word) {
            Some(kw) => out.push_str(kw.as_str()),
            None => out.push_str(word),
        }
    }

    out
}
