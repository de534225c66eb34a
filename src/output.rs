use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::results::RowRecord;

/// Renders parsed rows for stdout. JSON is a pretty-printed array of
/// objects in header order; CSV re-emits the header line first.
pub fn render(rows: &[RowRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).context("failed to serialize rows as JSON")
        }
        OutputFormat::Csv => {
            if rows.is_empty() {
                return Ok(String::new());
            }
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(rows[0].columns())?;
            for row in rows {
                writer.write_record(row.values())?;
            }
            let bytes = writer
                .into_inner()
                .context("failed to flush CSV output")?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}
