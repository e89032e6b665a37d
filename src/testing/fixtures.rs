//! Whole-statement fixtures: a normalized statement and its expected tokens.
use crate::sql::{Token, TokenKind};
use rstest::fixture;

#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: &'static str,
    pub tokens: Vec<Token>,
}

impl Statement {
    fn new(sql: &'static str, tokens: impl IntoIterator<Item = (TokenKind, &'static str)>) -> Self {
        Self {
            sql,
            tokens: tokens
                .into_iter()
                .map(|(kind, text)| Token::new(kind, text))
                .collect(),
        }
    }
}

use TokenKind::{
    And, Compare, From, Group, Having, In, Join, Limit, Offset, On, Or, Order, Select, Str, Where,
};

#[fixture]
pub fn select_from() -> Statement {
    Statement::new(
        "SELECT * FROM my_table",
        [(Select, "SELECT"), (Str, "*"), (From, "FROM"), (Str, "my_table")],
    )
}

#[fixture]
pub fn select_with_group_and_having() -> Statement {
    Statement::new(
        "SELECT a, count(1) AS cnt FROM t GROUP BY a HAVING cnt > 2",
        [
            (Select, "SELECT"),
            (Str, "a, count(1) AS cnt"),
            (From, "FROM"),
            (Str, "t"),
            (Group, "GROUP BY"),
            (Str, "a"),
            (Having, "HAVING"),
            (Str, "cnt"),
            (Compare, ">"),
            (Str, "2"),
        ],
    )
}

#[fixture]
pub fn select_with_limit() -> Statement {
    Statement::new(
        "SELECT * FROM t LIMIT 10",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Limit, "LIMIT"),
            (Str, "10"),
        ],
    )
}

#[fixture]
pub fn select_with_limit_and_offset() -> Statement {
    Statement::new(
        "SELECT * FROM t LIMIT 10 OFFSET 20",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Limit, "LIMIT"),
            (Str, "10"),
            (Offset, "OFFSET"),
            (Str, "20"),
        ],
    )
}

#[fixture]
pub fn select_with_complex_filter() -> Statement {
    Statement::new(
        "SELECT * FROM t WHERE (a = 1 OR b = 2) AND c LIKE '%x%'",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Where, "WHERE"),
            (Str, "(a = 1 OR b = 2)"),
            (And, "AND"),
            (Str, "c"),
            (Compare, "LIKE"),
            (Str, "'%x%'"),
        ],
    )
}

#[fixture]
pub fn select_with_sub_select_in_filter() -> Statement {
    Statement::new(
        "SELECT a FROM t WHERE id IN (SELECT t_id FROM u WHERE x = 1)",
        [
            (Select, "SELECT"),
            (Str, "a"),
            (From, "FROM"),
            (Str, "t"),
            (Where, "WHERE"),
            (Str, "id"),
            (In, "IN"),
            (Str, "(SELECT t_id FROM u WHERE x = 1)"),
        ],
    )
}

#[fixture]
pub fn select_with_complex_having() -> Statement {
    Statement::new(
        "SELECT a, COUNT(*) AS cnt FROM t GROUP BY a HAVING COUNT(*) > 1 AND MAX(b) < 10 OR a != 'z'",
        [
            (Select, "SELECT"),
            (Str, "a, COUNT(*) AS cnt"),
            (From, "FROM"),
            (Str, "t"),
            (Group, "GROUP BY"),
            (Str, "a"),
            (Having, "HAVING"),
            (Str, "COUNT(*)"),
            (Compare, ">"),
            (Str, "1"),
            (And, "AND"),
            (Str, "MAX(b)"),
            (Compare, "<"),
            (Str, "10"),
            (Or, "OR"),
            (Str, "a"),
            (Compare, "!="),
            (Str, "'z'"),
        ],
    )
}

#[fixture]
pub fn select_with_where_filters() -> Statement {
    Statement::new(
        "SELECT * FROM t WHERE a = 1 AND b != 2 OR c <> 3",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Where, "WHERE"),
            (Str, "a"),
            (Compare, "="),
            (Str, "1"),
            (And, "AND"),
            (Str, "b"),
            (Compare, "!="),
            (Str, "2"),
            (Or, "OR"),
            (Str, "c"),
            (Compare, "<>"),
            (Str, "3"),
        ],
    )
}

#[fixture]
pub fn select_with_join() -> Statement {
    Statement::new(
        "SELECT * FROM a JOIN b",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "a"),
            (Join, "JOIN"),
            (Str, "b"),
        ],
    )
}

#[fixture]
pub fn select_with_join_and_on() -> Statement {
    Statement::new(
        "SELECT * FROM a LEFT JOIN b ON a.id = b.a_id",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "a"),
            (Join, "LEFT JOIN"),
            (Str, "b"),
            (On, "ON"),
            (Str, "a.id"),
            (Compare, "="),
            (Str, "b.a_id"),
        ],
    )
}

#[fixture]
pub fn select_with_multiple_columns() -> Statement {
    Statement::new(
        "SELECT a, b.c, `d` AS e FROM t",
        [
            (Select, "SELECT"),
            (Str, "a, b.c, `d` AS e"),
            (From, "FROM"),
            (Str, "t"),
        ],
    )
}

#[fixture]
pub fn select_with_not_in_compare() -> Statement {
    Statement::new(
        "SELECT * FROM t WHERE x NOT IN (1, 2)",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Where, "WHERE"),
            (Str, "x NOT"),
            (In, "IN"),
            (Str, "(1, 2)"),
        ],
    )
}

#[fixture]
pub fn select_with_filter_in_list() -> Statement {
    Statement::new(
        "SELECT * FROM t WHERE x IN ('a', 'b') AND y = %(y)s",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Where, "WHERE"),
            (Str, "x"),
            (In, "IN"),
            (Str, "('a', 'b')"),
            (And, "AND"),
            (Str, "y"),
            (Compare, "="),
            (Str, "%(y)s"),
        ],
    )
}

#[fixture]
pub fn select_with_multiple_joins() -> Statement {
    Statement::new(
        "SELECT * FROM a INNER JOIN b ON a.id = b.id RIGHT OUTER JOIN c ON c.id = b.c_id",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "a"),
            (Join, "INNER JOIN"),
            (Str, "b"),
            (On, "ON"),
            (Str, "a.id"),
            (Compare, "="),
            (Str, "b.id"),
            (Join, "RIGHT OUTER JOIN"),
            (Str, "c"),
            (On, "ON"),
            (Str, "c.id"),
            (Compare, "="),
            (Str, "b.c_id"),
        ],
    )
}

#[fixture]
pub fn select_in_from() -> Statement {
    Statement::new(
        "SELECT x.a FROM (SELECT a FROM t) AS x",
        [
            (Select, "SELECT"),
            (Str, "x.a"),
            (From, "FROM"),
            (Str, "(SELECT a FROM t) AS x"),
        ],
    )
}

#[fixture]
pub fn select_in_from_and_join() -> Statement {
    Statement::new(
        "SELECT * FROM (SELECT id FROM a) AS s JOIN b ON s.id = b.id",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "(SELECT id FROM a) AS s"),
            (Join, "JOIN"),
            (Str, "b"),
            (On, "ON"),
            (Str, "s.id"),
            (Compare, "="),
            (Str, "b.id"),
        ],
    )
}

#[fixture]
pub fn select_with_single_order_value() -> Statement {
    Statement::new(
        "SELECT * FROM t ORDER BY s.id ASC",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Order, "ORDER BY"),
            (Str, "s.id ASC"),
        ],
    )
}

#[fixture]
pub fn select_with_order_values() -> Statement {
    Statement::new(
        "SELECT * FROM t ORDER BY s.id ASC, d.d DESC",
        [
            (Select, "SELECT"),
            (Str, "*"),
            (From, "FROM"),
            (Str, "t"),
            (Order, "ORDER BY"),
            (Str, "s.id ASC, d.d DESC"),
        ],
    )
}
