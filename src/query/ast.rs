//! Raw JSON-facing query definition.
//!
//! `filters` and `limit` stay untyped here: malformed filter nodes are
//! skipped (not fatal) and a bad limit downgrades to "no limit", so both
//! are normalized later in `convert` instead of failing deserialization.

use serde::Deserialize;
use serde_json::Value;

use super::errors::BuildError;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryDef {
    #[serde(default)]
    pub table: String,
    pub columns: Option<Value>,
    #[serde(default)]
    pub filters: Vec<Value>,
    #[serde(default)]
    pub order_by: Vec<OrderByDef>,
    #[serde(default)]
    pub limit: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderByDef {
    pub column: String,
    #[serde(default)]
    pub direction: Option<String>,
}

impl QueryDef {
    pub fn from_json_str(raw: &str) -> Result<Self, BuildError> {
        serde_json::from_str(raw)
            .map_err(|e| BuildError::Config(format!("invalid query definition JSON: {e}")))
    }
}
