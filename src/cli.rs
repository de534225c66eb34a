use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "oraq")]
#[command(
    author,
    version,
    about = "Run JSON-defined SELECT queries against Oracle through SQL*Plus"
)]
pub struct Args {
    /// Path to the JSON query definition (table, columns, filters, order_by, limit)
    pub query_file: PathBuf,

    /// SQL*Plus-style connect string ('user/password@dsn'); overrides environment and profile
    #[arg(long, value_name = "STRING")]
    pub connect: Option<String>,

    /// Path to the sqlplus executable
    #[arg(long, value_name = "PATH")]
    pub sqlplus_path: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,

    /// Print the generated SQL and exit without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}
