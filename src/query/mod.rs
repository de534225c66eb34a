//! Query construction engine.
//!
//! Compiles a declarative JSON query definition (table, columns, filter
//! condition tree, ordering, row cap) into a single Oracle SELECT statement.
//! `build_select` is pure and deterministic: equal definitions produce
//! byte-identical SQL, and no partial statement is ever returned on error.

pub mod ast;
mod convert;
mod emitter;
pub mod errors;
pub mod logical;

pub use ast::{OrderByDef, QueryDef};
pub use errors::BuildError;

use serde_json::Value;

pub fn build_select(def: &QueryDef) -> Result<String, BuildError> {
    if def.table.trim().is_empty() {
        return Err(BuildError::Config(
            "query definition must specify a 'table'".into(),
        ));
    }
    let columns = projection_columns(&def.columns)?;
    if columns.is_empty() {
        log::warn!("no columns specified; selecting all columns (*)");
    }

    let conditions = convert::lower_filters(&def.filters)?;
    let sort = convert::lower_order_by(&def.order_by);
    let limit = convert::lower_limit(&def.limit);

    let sql = emitter::emit_select(&columns, def.table.trim(), &conditions, &sort, limit);
    log::debug!("generated SELECT statement:\n{sql}");
    Ok(sql)
}

fn projection_columns(columns: &Option<Value>) -> Result<Vec<String>, BuildError> {
    match columns {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    BuildError::Config(format!("column names must be strings, got: {item}"))
                })
            })
            .collect(),
        Some(_) | None => Err(BuildError::Config(
            "query definition must specify 'columns' as a list".into(),
        )),
    }
}
