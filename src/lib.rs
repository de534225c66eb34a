pub mod cli;
pub mod config;
pub mod output;
pub mod query;
pub mod results;
pub mod sqlplus;

use anyhow::Context;
use clap::Parser;

/// Binary entrypoint: load the JSON query definition, build the SELECT,
/// execute it through SQL*Plus, parse the CSV output, render the rows.
///
/// Logging is configured here and only here; library modules stick to the
/// `log` facade.
pub fn run() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_module("oraq", level)
        .try_init();

    let raw = std::fs::read_to_string(&args.query_file).with_context(|| {
        format!(
            "failed to read query definition '{}'",
            args.query_file.display()
        )
    })?;
    let def = query::QueryDef::from_json_str(&raw)?;
    let sql = query::build_select(&def)?;
    log::info!("generated SQL:\n{sql}");

    if args.dry_run {
        println!("{sql}");
        return Ok(());
    }

    let settings = config::resolve(args.connect.as_deref(), args.sqlplus_path.as_deref())?;
    let client = sqlplus::SqlPlusClient::new(&settings);
    client.verify()?;

    let raw_output = client.run_query(&sql)?;
    if raw_output.is_empty() {
        log::warn!("no output received from sqlplus");
    }
    let rows = results::parse_rows(&raw_output)?;
    log::info!("query returned {} rows", rows.len());

    let rendered = output::render(&rows, args.output)?;
    println!("{rendered}");
    Ok(())
}
