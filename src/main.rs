reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(format);
reexport!(sql);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use clap::Parser;
use itertools::Itertools as _;
use std::io::{self, Read as _, Write as _};

#[derive(Parser)]
#[command(name = "format-sql")]
#[command(about = "Reformat a SQL statement into a readable, indented layout", version)]
struct Cli {
    /// Statement to format; read from standard input when omitted
    sql: Vec<String>,

    /// Spaces per indent level (overrides FORMAT_SQL_INDENT)
    #[arg(short, long)]
    indent: Option<usize>,

    /// Print the token stream instead of the formatted statement
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config()?;

    let raw = if cli.sql.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        cli.sql.join(" ")
    };

    let mut layout = config.layout();
    if let Some(indent) = cli.indent {
        layout.indent = indent;
    }

    let output = if cli.tokens {
        let normalized = normalize(&raw);
        tokenize(&normalized.sql)
            .iter()
            .map(|t| format!("{:<8}{}", t.kind.to_string(), t.text))
            .join("\n")
    } else if config.uppercase_only {
        let (mut statement, had_terminator) = normalize(&raw).into_parts();
        if had_terminator {
            statement.push(sql::normalize::TERMINATOR);
        }
        statement
    } else {
        format_sql(&raw, &layout)
    };
    info!(bytes = raw.len(), "formatted input");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
