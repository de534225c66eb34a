//! SQL text emission for the typed query model.
//!
//! Oracle 12c+ only: the row cap uses `FETCH NEXT n ROWS ONLY` and booleans
//! inline as `1`/`0`. Values are inlined as literals, not bound parameters;
//! string escaping is limited to doubling embedded single quotes, so values
//! must come from a trusted definition.

use super::logical::{Combinator, Condition, Literal, SortItem};

pub(crate) fn emit_select(
    columns: &[String],
    table: &str,
    conditions: &[Condition],
    sort: &[SortItem],
    limit: Option<u64>,
) -> String {
    let projection = if columns.is_empty() {
        "*".to_string()
    } else {
        columns
            .iter()
            .map(|col| sanitize_identifier(col))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut clauses = vec![format!("SELECT {projection}")];
    clauses.push(format!("FROM {}", sanitize_identifier(table)));

    let where_sql = emit_group(conditions, Combinator::And);
    if !where_sql.is_empty() {
        clauses.push(format!("WHERE {where_sql}"));
    }

    if !sort.is_empty() {
        let order = sort
            .iter()
            .map(|item| {
                format!(
                    "{} {}",
                    sanitize_identifier(&item.column),
                    item.direction.keyword()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        clauses.push(format!("ORDER BY {order}"));
    }

    if let Some(n) = limit {
        clauses.push(format!("FETCH NEXT {n} ROWS ONLY"));
    }

    clauses.join("\n")
}

/// Joins the fragments of one group level with its combinator. A nested
/// group that yields nothing contributes no fragment to its parent.
fn emit_group(conditions: &[Condition], combinator: Combinator) -> String {
    conditions
        .iter()
        .filter_map(emit_condition)
        .collect::<Vec<_>>()
        .join(&format!(" {} ", combinator.keyword()))
}

fn emit_condition(condition: &Condition) -> Option<String> {
    match condition {
        Condition::Binary { column, op, value } => Some(format!(
            "{} {} {}",
            sanitize_identifier(column),
            op.symbol(),
            format_literal(value)
        )),
        Condition::InList { column, values } => {
            let items = values
                .iter()
                .map(format_literal)
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{} IN ({items})", sanitize_identifier(column)))
        }
        Condition::Between { column, low, high } => Some(format!(
            "{} BETWEEN {} AND {}",
            sanitize_identifier(column),
            format_literal(low),
            format_literal(high)
        )),
        Condition::NullCheck { column, negated } => {
            if *negated {
                Some(format!("{} IS NOT NULL", sanitize_identifier(column)))
            } else {
                Some(format!("{} IS NULL", sanitize_identifier(column)))
            }
        }
        Condition::Group {
            combinator,
            conditions,
        } => {
            let nested = emit_group(conditions, *combinator);
            if nested.is_empty() {
                log::debug!("empty filter group contributes no condition");
                None
            } else {
                Some(format!("({nested})"))
            }
        }
    }
}

fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::Null => "NULL".to_string(),
        Literal::Bool(true) => "1".to_string(),
        Literal::Bool(false) => "0".to_string(),
        Literal::Number(n) => n.clone(),
        Literal::Text(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

/// Warn-only pass-through: identifiers outside `[A-Za-z0-9_]` are flagged
/// but emitted unchanged, without quoting or rejection.
fn sanitize_identifier(name: &str) -> String {
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        log::warn!(
            "identifier '{name}' contains characters outside [A-Za-z0-9_]; it may need double quotes in Oracle"
        );
    }
    name.to_string()
}
