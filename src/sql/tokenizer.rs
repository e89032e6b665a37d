use crate::sql::{
    keyword::{
        COMPARE_PHRASES, COMPARE_SYMBOLS, JOIN_PHRASES, Keyword, Phrase, is_word_char,
        phrase_text,
    },
    quoting::Quoting,
    token::Token,
    token_kind::TokenKind,
};
use crate::*;

/// A successful handler match at the current scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Matched {
    /// Bytes consumed from the remaining input.
    len: usize,
    kind: TokenKind,
    /// Canonical token text (uppercase, single-spaced).
    text: String,
}

type Handler = fn(&str) -> Option<Matched>;

/// Keyword handlers in priority order. The first one that matches commits.
const HANDLERS: [Handler; 6] = [
    select,
    join,
    order_by,
    clause,
    compare,
    conjunction,
];

/// Clause introducers, tried in this order by the `clause` handler.
const CLAUSES: [(TokenKind, Phrase); 7] = {
    use Keyword::*;
    [
        (TokenKind::From, &[From]),
        (TokenKind::On, &[On]),
        (TokenKind::Where, &[Where]),
        (TokenKind::Group, &[Group, By]),
        (TokenKind::Having, &[Having]),
        (TokenKind::Limit, &[Limit]),
        (TokenKind::Offset, &[Offset]),
    ]
};

const CONJUNCTIONS: [(TokenKind, Phrase); 3] = {
    use Keyword::*;
    [
        (TokenKind::And, &[And]),
        (TokenKind::Or, &[Or]),
        (TokenKind::In, &[In]),
    ]
};

/// Tokenize a normalized SQL statement into a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Feeds a pretty-printer that only needs clause boundaries, joins,
///   comparisons and conjunctions; everything in between is generic `Str`.
/// - Accepts malformed SQL; unbalanced parentheses or quotes simply run to
///   the end of the input.
///
/// Behavior:
/// - Skips whitespace between tokens.
/// - At each word start, offers the remaining text to `HANDLERS` in priority
///   order. Keyword matches are ASCII case-insensitive, require a word
///   boundary, and emit uppercase single-spaced text.
/// - Otherwise appends one word to the pending `Str` token. Parenthesized and
///   quoted regions are part of the word, so sub-selects stay opaque.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Every non-whitespace character of the input appears in exactly one
///   token, in order.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut pending = Expression::default();
    let mut i = 0;

    while let Some(c) = sql[i..].chars().next() {
        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }

        let rest = &sql[i..];
        if let Some(m) = HANDLERS.iter().find_map(|handler| handler(rest)) {
            pending.flush_into(&mut out);
            trace!(kind = %m.kind, text = %m.text, "keyword token");
            out.push(Token::new(m.kind, m.text));
            i += m.len;
            continue;
        }

        i += pending.push_word(rest);
    }
    pending.flush_into(&mut out);

    debug!(tokens = out.len(), "tokenized statement");
    out
}

/// `SELECT` plus at most one modifier.
fn select(rest: &str) -> Option<Matched> {
    let len = match_word(rest, Keyword::Select)?;
    let modifier = Keyword::SELECT_MODIFIERS.into_iter().find_map(|kw| {
        let gap = leading_whitespace(&rest[len..]);
        let n = match_word(&rest[len + gap..], kw)?;
        (gap > 0).then_some((kw, gap + n))
    });

    Some(match modifier {
        Some((kw, extra)) => Matched {
            len: len + extra,
            kind: TokenKind::Select,
            text: format!("{} {}", Keyword::Select, kw),
        },
        None => Matched {
            len,
            kind: TokenKind::Select,
            text: Keyword::Select.to_string(),
        },
    })
}

fn join(rest: &str) -> Option<Matched> {
    JOIN_PHRASES
        .into_iter()
        .find_map(|phrase| match_kind(rest, TokenKind::Join, phrase))
}

fn order_by(rest: &str) -> Option<Matched> {
    match_kind(rest, TokenKind::Order, &[Keyword::Order, Keyword::By])
}

fn clause(rest: &str) -> Option<Matched> {
    CLAUSES
        .into_iter()
        .find_map(|(kind, phrase)| match_kind(rest, kind, phrase))
}

fn compare(rest: &str) -> Option<Matched> {
    if let Some(symbol) = COMPARE_SYMBOLS.into_iter().find(|s| rest.starts_with(s)) {
        return Some(Matched {
            len: symbol.len(),
            kind: TokenKind::Compare,
            text: symbol.to_string(),
        });
    }
    COMPARE_PHRASES
        .into_iter()
        .find_map(|phrase| match_kind(rest, TokenKind::Compare, phrase))
}

fn conjunction(rest: &str) -> Option<Matched> {
    CONJUNCTIONS
        .into_iter()
        .find_map(|(kind, phrase)| match_kind(rest, kind, phrase))
}

fn match_kind(rest: &str, kind: TokenKind, phrase: Phrase) -> Option<Matched> {
    match_phrase(rest, phrase).map(|len| Matched {
        len,
        kind,
        text: phrase_text(phrase),
    })
}

/// Match every keyword of `phrase` in sequence, separated by whitespace.
/// Returns the number of bytes consumed.
fn match_phrase(rest: &str, phrase: Phrase) -> Option<usize> {
    let mut pos = 0;
    for (n, &kw) in phrase.iter().enumerate() {
        if n > 0 {
            let gap = leading_whitespace(&rest[pos..]);
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        pos += match_word(&rest[pos..], kw)?;
    }
    Some(pos)
}

/// Match a single keyword at the start of `rest`, followed by a word boundary.
fn match_word(rest: &str, kw: Keyword) -> Option<usize> {
    let word = kw.as_str();
    let head = rest.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    match rest[word.len()..].chars().next() {
        Some(c) if is_word_char(c) => None,
        _ => Some(word.len()),
    }
}

fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Accumulator for the generic `Str` token.
///
/// Words are joined by single spaces. Inside parentheses (outside quotes)
/// whitespace runs collapse to a single space as well; quoted text is kept
/// verbatim.
#[derive(Debug, Default)]
struct Expression {
    text: String,
}

impl Expression {
    /// Append one word starting at the beginning of `rest` and return the
    /// number of bytes consumed (always at least one character).
    ///
    /// A word ends at whitespace or at a comparison operator, but only at
    /// parenthesis depth zero and outside quotes. Right after a closing
    /// parenthesis or quote it also ends where a keyword handler matches, so
    /// `count(1)FROM t` still yields a `FROM` token.
    fn push_word(&mut self, rest: &str) -> usize {
        if !self.text.is_empty() {
            self.text.push(' ');
        }

        let mut quoting = Quoting::default();
        let mut depth = 0usize;
        let mut gap = false;
        // Previous character closed a top-level parenthesis or quote.
        let mut closed = false;
        let mut chars = rest.char_indices().peekable();

        while let Some(&(i, c)) = chars.peek() {
            let top_level = depth == 0 && !quoting.is_open();
            if top_level
                && i > 0
                && (c.is_whitespace()
                    || starts_compare(&rest[i..])
                    || (closed && starts_keyword(&rest[i..])))
            {
                return i;
            }
            chars.next();
            closed = false;

            if quoting.step(c) {
                if std::mem::take(&mut gap) {
                    self.text.push(' ');
                }
                self.text.push(c);
                closed = depth == 0 && !quoting.is_open();
                continue;
            }
            if c.is_whitespace() {
                gap = true;
                continue;
            }
            if std::mem::take(&mut gap) {
                self.text.push(' ');
            }
            match c {
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    closed = depth == 0;
                }
                _ => {}
            }
            self.text.push(c);
        }

        rest.len()
    }

    fn flush_into(&mut self, out: &mut Vec<Token>) {
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        if !text.is_empty() {
            trace!(text, "expression token");
            out.push(Token::str(text));
        }
    }
}

fn starts_compare(rest: &str) -> bool {
    COMPARE_SYMBOLS.into_iter().any(|s| rest.starts_with(s))
}

fn starts_keyword(rest: &str) -> bool {
    HANDLERS.iter().any(|handler| handler(rest).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::normalize::normalize;
    use proptest::prelude::*;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[rstest]
    #[case::select_from(select_from())]
    #[case::group_and_having(select_with_group_and_having())]
    #[case::limit(select_with_limit())]
    #[case::limit_and_offset(select_with_limit_and_offset())]
    #[case::complex_filter(select_with_complex_filter())]
    #[case::sub_select_in_filter(select_with_sub_select_in_filter())]
    #[case::complex_having(select_with_complex_having())]
    #[case::where_filters(select_with_where_filters())]
    #[case::join(select_with_join())]
    #[case::join_and_on(select_with_join_and_on())]
    #[case::multiple_columns(select_with_multiple_columns())]
    #[case::not_in_compare(select_with_not_in_compare())]
    #[case::filter_in_list(select_with_filter_in_list())]
    #[case::multiple_joins(select_with_multiple_joins())]
    #[case::select_in_from(select_in_from())]
    #[case::select_in_from_and_join(select_in_from_and_join())]
    #[case::single_order_value(select_with_single_order_value())]
    #[case::order_values(select_with_order_values())]
    fn tokenizes_statement(#[case] statement: Statement) {
        common_init();
        assert_eq!(tokenize(statement.sql), statement.tokens, "{}", statement.sql);
    }

    #[rstest]
    #[case("SELECT", "SELECT")]
    #[case("SELECT DISTINCT", "SELECT DISTINCT")]
    #[case("SELECT SQL_NO_CACHE", "SELECT SQL_NO_CACHE")]
    #[case("select   distinct", "SELECT DISTINCT")]
    fn handles_select(#[case] sql: &str, #[case] text: &str) {
        assert_eq!(tokenize(sql), vec![tok(TokenKind::Select, text)]);
    }

    #[test]
    fn select_merges_one_modifier_only() {
        assert_eq!(
            tokenize("SELECT DISTINCT SQL_NO_CACHE a"),
            vec![
                tok(TokenKind::Select, "SELECT DISTINCT"),
                Token::str("SQL_NO_CACHE a"),
            ]
        );
    }

    #[rstest]
    #[case("INNER JOIN")]
    #[case("JOIN")]
    #[case("LEFT JOIN")]
    #[case("LEFT OUTER JOIN")]
    #[case("RIGHT JOIN")]
    #[case("RIGHT OUTER JOIN")]
    #[case("FULL OUTER JOIN")]
    fn handles_join(#[case] sql: &str) {
        assert_eq!(tokenize(sql), vec![tok(TokenKind::Join, sql)]);
    }

    #[test]
    fn join_phrase_collapses_whitespace() {
        assert_eq!(
            tokenize("left\n  outer\tjoin"),
            vec![tok(TokenKind::Join, "LEFT OUTER JOIN")]
        );
    }

    #[rstest]
    #[case("=")]
    #[case("<")]
    #[case("!=")]
    #[case("<>")]
    #[case(">")]
    #[case("<=")]
    #[case(">=")]
    #[case("LIKE")]
    #[case("LIKE BINARY")]
    #[case("NOT LIKE")]
    #[case("NOT LIKE BINARY")]
    fn handles_compare(#[case] sql: &str) {
        assert_eq!(tokenize(sql), vec![tok(TokenKind::Compare, sql)]);
    }

    #[rstest]
    #[case("my_table AS t1")]
    #[case("q.`cnd`")]
    #[case("gt.fu_d")]
    #[case("q.`cnd` AS e2")]
    #[case("count(1)")]
    #[case("count(1) AS cnt")]
    #[case("count(`s`.`dd`) AS cnt")]
    #[case("%(some_thing)s")]
    #[case("%%(some_thing_2)s")]
    #[case("s.id ASC")]
    #[case("d.d DESC")]
    #[case("COUNT(*)")]
    #[case("COUNT(*) AS cnt")]
    #[case("'value is here'")]
    #[case("INTERVAL")]
    #[case("ANDOR")]
    #[case("FROMME")]
    #[case("ORDER")]
    #[case("GROUP")]
    #[case("BY")]
    #[case("NOT")]
    fn handles_str(#[case] sql: &str) {
        assert_eq!(tokenize(sql), vec![Token::str(sql)]);
    }

    #[test]
    fn handles_order_by() {
        assert_eq!(tokenize("ORDER BY"), vec![tok(TokenKind::Order, "ORDER BY")]);
    }

    #[test]
    fn in_list_after_normalization() {
        let normalized = normalize(r#"x in ("78", "d")"#);
        assert_eq!(
            tokenize(&normalized.sql),
            vec![
                Token::str("x"),
                tok(TokenKind::In, "IN"),
                Token::str(r#"("78", "d")"#),
            ]
        );
    }

    #[test]
    fn in_without_space_before_paren() {
        assert_eq!(
            tokenize("x IN(1, 2)"),
            vec![Token::str("x"), tok(TokenKind::In, "IN"), Token::str("(1, 2)")]
        );
    }

    #[test]
    fn parenthesized_sub_select_is_opaque() {
        assert_eq!(
            tokenize("x IN (SELECT id FROM t)"),
            vec![
                Token::str("x"),
                tok(TokenKind::In, "IN"),
                Token::str("(SELECT id FROM t)"),
            ]
        );
    }

    #[test]
    fn nested_parentheses_are_tracked() {
        assert_eq!(
            tokenize("a IN (SELECT b FROM (SELECT b FROM c) AS d) AND e = 1"),
            vec![
                Token::str("a"),
                tok(TokenKind::In, "IN"),
                Token::str("(SELECT b FROM (SELECT b FROM c) AS d)"),
                tok(TokenKind::And, "AND"),
                Token::str("e"),
                tok(TokenKind::Compare, "="),
                Token::str("1"),
            ]
        );
    }

    #[test]
    fn whitespace_collapses_inside_parentheses() {
        assert_eq!(
            tokenize("count(\n   a,\t b )   AS   cnt"),
            vec![Token::str("count( a, b ) AS cnt")]
        );
    }

    #[test]
    fn quoted_whitespace_is_verbatim() {
        assert_eq!(
            tokenize("x = 'a   b' AND y = \"FROM  z\""),
            vec![
                Token::str("x"),
                tok(TokenKind::Compare, "="),
                Token::str("'a   b'"),
                tok(TokenKind::And, "AND"),
                Token::str("y"),
                tok(TokenKind::Compare, "="),
                Token::str("\"FROM  z\""),
            ]
        );
    }

    #[test]
    fn compare_splits_without_whitespace() {
        assert_eq!(
            tokenize("a.id=b.id"),
            vec![
                Token::str("a.id"),
                tok(TokenKind::Compare, "="),
                Token::str("b.id"),
            ]
        );
        assert_eq!(
            tokenize("x<>'y'"),
            vec![
                Token::str("x"),
                tok(TokenKind::Compare, "<>"),
                Token::str("'y'"),
            ]
        );
    }

    #[test]
    fn compare_inside_parentheses_stays_opaque() {
        assert_eq!(tokenize("(a = 1 OR b = 2)"), vec![Token::str("(a = 1 OR b = 2)")]);
    }

    #[test]
    fn not_in_is_generic_text_then_in() {
        assert_eq!(
            tokenize("x NOT IN (1, 2)"),
            vec![
                Token::str("x NOT"),
                tok(TokenKind::In, "IN"),
                Token::str("(1, 2)"),
            ]
        );
    }

    #[test]
    fn not_like_is_one_compare() {
        assert_eq!(
            tokenize("name NOT LIKE '%a%'"),
            vec![
                Token::str("name"),
                tok(TokenKind::Compare, "NOT LIKE"),
                Token::str("'%a%'"),
            ]
        );
    }

    #[rstest]
    #[case("SELECT (a, b")]
    #[case("SELECT 'unterminated FROM t")]
    fn unterminated_region_runs_to_end(#[case] sql: &str) {
        let toks = tokenize(sql);
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0], tok(TokenKind::Select, "SELECT"));
        assert!(toks[1].is(TokenKind::Str));
        assert_eq!(toks[1].text, sql["SELECT ".len()..]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t ")]
    fn blank_input_yields_no_tokens(#[case] sql: &str) {
        assert!(tokenize(sql).is_empty());
    }

    #[test]
    fn stray_close_paren_does_not_underflow() {
        assert_eq!(
            tokenize("a) FROM t"),
            vec![Token::str("a)"), tok(TokenKind::From, "FROM"), Token::str("t")]
        );
    }

    #[rstest]
    #[case(
        "select count(1)from t",
        vec![
            tok(TokenKind::Select, "SELECT"),
            Token::str("count(1)"),
            tok(TokenKind::From, "FROM"),
            Token::str("t"),
        ]
    )]
    #[case(
        "where a = 'x'and b = 1",
        vec![
            tok(TokenKind::Where, "WHERE"),
            Token::str("a"),
            tok(TokenKind::Compare, "="),
            Token::str("'x'"),
            tok(TokenKind::And, "AND"),
            Token::str("b"),
            tok(TokenKind::Compare, "="),
            Token::str("1"),
        ]
    )]
    #[case(
        "x in (1)or `y`like 'z'",
        vec![
            Token::str("x"),
            tok(TokenKind::In, "IN"),
            Token::str("(1)"),
            tok(TokenKind::Or, "OR"),
            Token::str("`y`"),
            tok(TokenKind::Compare, "LIKE"),
            Token::str("'z'"),
        ]
    )]
    fn keyword_right_after_closing_paren_or_quote(#[case] raw: &str, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(&normalize(raw).sql), expected);
    }

    #[rstest]
    #[case("count(1)AS_x")]
    #[case("'a'INTERVAL")]
    #[case("f(x)ORDER")]
    fn closing_paren_or_quote_needs_whole_keyword(#[case] sql: &str) {
        assert_eq!(tokenize(sql), vec![Token::str(sql)]);
    }

    #[test]
    fn lone_bang_is_generic_text() {
        assert_eq!(tokenize("!a"), vec![Token::str("!a")]);
    }

    #[test]
    fn case_insensitive_keyword_recognition() {
        assert_eq!(tokenize("left join"), tokenize("LEFT JOIN"));
        assert_eq!(
            tokenize("select a from t where b like c order by a"),
            tokenize("SELECT a FROM t WHERE b LIKE c ORDER BY a")
        );
    }

    fn non_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    const VOCABULARY: [&str; 24] = [
        "select", "DISTINCT", "a", "b.c", "from", "t", "left outer join", "on", "where",
        "=", "<>", "and", "or", "not", "in", "like binary", "(select x from y)",
        "'q w'", "group by", "having", "order by", "limit", "offset", "count(*)",
    ];

    proptest! {
        #[test]
        fn tokens_cover_normalized_input(raw in "\\PC*") {
            let normalized = normalize(&raw);
            let joined = tokenize(&normalized.sql).iter().map(|t| t.text.as_str()).join(" ");
            prop_assert_eq!(non_whitespace(&joined), non_whitespace(&normalized.sql));
        }

        #[test]
        fn statements_cover_normalized_input(
            words in proptest::collection::vec(proptest::sample::select(VOCABULARY.to_vec()), 0..16),
        ) {
            let normalized = normalize(&words.join(" "));
            let tokens = tokenize(&normalized.sql);
            prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
            let joined = tokens.iter().map(|t| t.text.as_str()).join(" ");
            prop_assert_eq!(non_whitespace(&joined), non_whitespace(&normalized.sql));
        }

        #[test]
        fn keyword_tokens_ignore_input_case(
            words in proptest::collection::vec(proptest::sample::select(VOCABULARY.to_vec()), 0..16),
        ) {
            let sql = words.join(" ");
            let lower = tokenize(&sql.to_lowercase())
                .into_iter()
                .map(|t| Token::new(t.kind, t.text.to_uppercase()))
                .collect::<Vec<_>>();
            prop_assert_eq!(lower, tokenize(&sql.to_uppercase()));
        }
    }
}
