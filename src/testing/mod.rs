#![cfg(test)]
crate::reexport!(fixtures);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod fixture_tests {
    use super::{super::*, *};

    #[rstest]
    fn fixture_statements_are_normalized(
        #[values(
            select_from(),
            select_with_group_and_having(),
            select_with_complex_filter(),
            select_with_multiple_joins(),
            select_in_from_and_join(),
            select_with_order_values()
        )]
        statement: Statement,
    ) {
        common_init();
        assert_eq!(normalize(statement.sql).sql, statement.sql);
    }

    #[rstest]
    fn fixture_tokens_are_never_blank(select_with_complex_having: Statement) {
        assert!(
            select_with_complex_having
                .tokens
                .iter()
                .all(|t| !t.text.trim().is_empty())
        );
    }
}
