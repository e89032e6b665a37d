//! Quoted-region tracking shared by the normalizer and the tokenizer.
//!
//! Single quotes, double quotes and backticks each open a region that runs to
//! the next unescaped occurrence of the same character. Contents of a region
//! are opaque: never case-folded, never split, whitespace kept verbatim.

/// Returns true for characters that open (and close) a quoted region.
pub const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Incremental quote state, fed one character at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quoting {
    open: Option<char>,
    escaped: bool,
}

impl Quoting {
    /// True while inside a quoted region.
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next character.
    ///
    /// Returns true if `c` belongs to a quoted region, delimiters included.
    /// A backslash inside a region escapes the character after it.
    pub fn step(&mut self, c: char) -> bool {
        match self.open {
            Some(_) if self.escaped => self.escaped = false,
            Some(_) if c == '\\' => self.escaped = true,
            Some(q) if c == q => self.open = None,
            Some(_) => {}
            None if is_quote(c) => self.open = Some(c),
            None => return false,
        }
        true
    }
}
