//! Pretty-printer consuming the token stream.
//!
//! Layout rules:
//! - `SELECT`, `FROM`, `WHERE`, `GROUP BY`, `HAVING` and `ORDER BY` sit alone
//!   on a line at column 0; their body is indented one level below.
//! - List bodies (`SELECT`, `FROM`, `GROUP BY`, `ORDER BY`) put each
//!   top-level comma separated item on its own line.
//! - `JOIN` opens an indented line holding the joined table and `ON` condition.
//! - `AND` / `OR` open a new indented line inside `WHERE`, `HAVING` and `ON`.
//! - `LIMIT` and `OFFSET` share a line with their argument.
use crate::sql::{Token, TokenKind, normalize, quoting::Quoting, tokenize};
use crate::*;

/// Indentation settings for [`format_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Spaces per indent level.
    pub indent: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Normalize, tokenize and format a raw statement.
pub fn format_sql(raw: &str, layout: &Layout) -> String {
    let normalized = normalize(raw);
    let tokens = tokenize(&normalized.sql);
    format_tokens(&tokens, normalized.had_terminator, layout)
}

/// Render a token stream as an indented multi-line statement.
///
/// The terminator is re-appended to the last line when `had_terminator` is set.
pub fn format_tokens(tokens: &[Token], had_terminator: bool, layout: &Layout) -> String {
    let mut printer = Printer::new(layout);
    for token in tokens {
        printer.push(token);
    }
    let mut out = printer.finish().join("\n");
    if had_terminator {
        out.push(crate::sql::normalize::TERMINATOR);
    }
    debug!(lines = out.lines().count(), "formatted statement");
    out
}

struct Printer {
    pad: String,
    lines: Vec<String>,
    line: String,
    /// Clause or join the current body belongs to.
    context: Option<TokenKind>,
}

impl Printer {
    fn new(layout: &Layout) -> Self {
        Self {
            pad: " ".repeat(layout.indent),
            lines: Vec::new(),
            line: String::new(),
            context: None,
        }
    }

    fn push(&mut self, token: &Token) {
        use TokenKind::*;
        match token.kind {
            Limit | Offset => {
                self.break_line();
                self.line.push_str(&token.text);
                self.context = Some(token.kind);
            }
            kind if kind.is_clause() => {
                self.break_line();
                self.lines.push(token.text.clone());
                self.context = Some(kind);
            }
            Join => {
                self.break_line();
                self.indented(&token.text);
                self.context = Some(Join);
            }
            kind if kind.is_conjunction() && matches!(self.context, Some(Where | Having | Join)) => {
                self.break_line();
                self.indented(&token.text);
            }
            kind if !kind.is_keyword_category() && self.in_list() => self.list(&token.text),
            _ => self.inline(&token.text),
        }
    }

    fn in_list(&self) -> bool {
        matches!(
            self.context,
            Some(TokenKind::Select | TokenKind::From | TokenKind::Group | TokenKind::Order)
        )
    }

    /// Continue the current item with the first top-level item of `text`, then
    /// one line per remaining item. Every line but the last ends in a comma.
    fn list(&mut self, text: &str) {
        let items = split_top_level(text);
        let last = items.len().saturating_sub(1);
        for (n, item) in items.into_iter().enumerate() {
            self.inline(item);
            if n != last {
                self.line.push(',');
                self.break_line();
            }
        }
    }

    fn inline(&mut self, text: &str) {
        if self.line.is_empty() {
            self.indented(text);
        } else {
            self.line.push(' ');
            self.line.push_str(text);
        }
    }

    fn indented(&mut self, text: &str) {
        if self.context.is_some() {
            self.line.push_str(&self.pad);
        }
        self.line.push_str(text);
    }

    fn break_line(&mut self) {
        if !self.line.is_empty() {
            self.lines.push(std::mem::take(&mut self.line));
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.break_line();
        self.lines
    }
}

/// Split on commas outside parentheses and quotes, trimming each item.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut quoting = Quoting::default();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if quoting.step(c) {
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&text[start..]);

    items.into_iter().map(str::trim).collect_vec()
}
