//! Lowers the raw JSON filter/order/limit values into the typed model.
//!
//! Leniency policy: a node that matches neither the comparison nor the
//! group shape is skipped with a warning, but a recognized operator whose
//! value violates its shape requirement is a hard `BuildError::Filter`.

use serde_json::{Map, Value};

use super::ast::OrderByDef;
use super::errors::BuildError;
use super::logical::{BinaryOp, Combinator, Condition, Literal, SortDirection, SortItem};

pub(crate) fn lower_filters(nodes: &[Value]) -> Result<Vec<Condition>, BuildError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(cond) = lower_node(node)? {
            out.push(cond);
        }
    }
    Ok(out)
}

fn lower_node(node: &Value) -> Result<Option<Condition>, BuildError> {
    let Some(map) = node.as_object() else {
        log::warn!("filter node is not an object, skipping: {node}");
        return Ok(None);
    };
    if map.contains_key("conditions") || map.contains_key("logical_operator") {
        return lower_group(map);
    }
    if map.contains_key("column") {
        return lower_comparison(map);
    }
    log::warn!("filter node matches neither comparison nor group shape, skipping: {node}");
    Ok(None)
}

fn lower_group(map: &Map<String, Value>) -> Result<Option<Condition>, BuildError> {
    if map.contains_key("column") {
        log::warn!("filter node carries both 'column' and group keys, skipping");
        return Ok(None);
    }
    let combinator = match map.get("logical_operator").and_then(Value::as_str) {
        Some(raw) => match raw.trim().to_ascii_uppercase().as_str() {
            "AND" => Combinator::And,
            "OR" => Combinator::Or,
            other => {
                log::warn!("unknown logical operator '{other}', skipping group");
                return Ok(None);
            }
        },
        None => {
            log::warn!("filter group is missing 'logical_operator', skipping");
            return Ok(None);
        }
    };
    let Some(children) = map.get("conditions").and_then(Value::as_array) else {
        log::warn!("filter group is missing a 'conditions' list, skipping");
        return Ok(None);
    };
    let conditions = lower_filters(children)?;
    Ok(Some(Condition::Group {
        combinator,
        conditions,
    }))
}

fn lower_comparison(map: &Map<String, Value>) -> Result<Option<Condition>, BuildError> {
    let Some(column) = map.get("column").and_then(Value::as_str).map(str::to_string) else {
        log::warn!("filter comparison has a non-string 'column', skipping");
        return Ok(None);
    };
    let Some(op_raw) = map.get("operator").and_then(Value::as_str) else {
        log::warn!("filter on column '{column}' is missing an 'operator', skipping");
        return Ok(None);
    };
    let op = op_raw.trim().to_ascii_uppercase();
    let value = map.get("value");

    let cond = match op.as_str() {
        "IN" => {
            let items = value
                .and_then(Value::as_array)
                .filter(|items| !items.is_empty())
                .ok_or_else(|| BuildError::Filter {
                    column: column.clone(),
                    reason: "'IN' requires a non-empty list value".into(),
                })?;
            let values = items
                .iter()
                .map(|item| {
                    literal_from_scalar(item).ok_or_else(|| BuildError::Filter {
                        column: column.clone(),
                        reason: "'IN' list entries must be scalar values".into(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Condition::InList { column, values }
        }
        "BETWEEN" => {
            let items = value
                .and_then(Value::as_array)
                .filter(|items| items.len() == 2)
                .ok_or_else(|| BuildError::Filter {
                    column: column.clone(),
                    reason: "'BETWEEN' requires a list of exactly two values".into(),
                })?;
            let low = literal_from_scalar(&items[0]).ok_or_else(|| BuildError::Filter {
                column: column.clone(),
                reason: "'BETWEEN' bounds must be scalar values".into(),
            })?;
            let high = literal_from_scalar(&items[1]).ok_or_else(|| BuildError::Filter {
                column: column.clone(),
                reason: "'BETWEEN' bounds must be scalar values".into(),
            })?;
            Condition::Between { column, low, high }
        }
        "IS NULL" => Condition::NullCheck {
            column,
            negated: false,
        },
        "IS NOT NULL" => Condition::NullCheck {
            column,
            negated: true,
        },
        other => {
            let Some(binop) = BinaryOp::parse(other) else {
                log::warn!("unknown filter operator '{other}' on column '{column}', skipping");
                return Ok(None);
            };
            // Absent and JSON-null values both inline as the NULL literal.
            let literal = match value {
                None => Literal::Null,
                Some(v) => literal_from_scalar(v).ok_or_else(|| BuildError::Filter {
                    column: column.clone(),
                    reason: format!("'{other}' requires a scalar value"),
                })?,
            };
            Condition::Binary {
                column,
                op: binop,
                value: literal,
            }
        }
    };
    Ok(Some(cond))
}

fn literal_from_scalar(value: &Value) -> Option<Literal> {
    match value {
        Value::Null => Some(Literal::Null),
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::Number(n) => Some(Literal::Number(n.to_string())),
        Value::String(s) => Some(Literal::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn lower_order_by(items: &[OrderByDef]) -> Vec<SortItem> {
    items
        .iter()
        .map(|item| {
            let direction = match item.direction.as_deref() {
                None => SortDirection::Asc,
                Some(raw) => match raw.trim().to_ascii_uppercase().as_str() {
                    "ASC" => SortDirection::Asc,
                    "DESC" => SortDirection::Desc,
                    other => {
                        log::warn!(
                            "invalid order direction '{other}' for column '{}', defaulting to ASC",
                            item.column
                        );
                        SortDirection::Asc
                    }
                },
            };
            SortItem {
                column: item.column.clone(),
                direction,
            }
        })
        .collect()
}

pub(crate) fn lower_limit(limit: &Option<Value>) -> Option<u64> {
    let raw = limit.as_ref()?;
    if raw.is_null() {
        return None;
    }
    match raw.as_i64() {
        Some(n) if n > 0 => Some(n as u64),
        _ => {
            log::warn!("ignoring 'limit' that is not a positive integer: {raw}");
            None
        }
    }
}
