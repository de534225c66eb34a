//! Typed filter condition tree lowered from the raw JSON definition.
//!
//! Every node is exactly one shape; new operators extend the enums and the
//! compiler forces the emitter to handle them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn keyword(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

/// Scalar comparison operators that take a single right-hand literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Like,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::GtEq => ">=",
            BinaryOp::LtEq => "<=",
            BinaryOp::Like => "LIKE",
        }
    }

    /// Operator token as it appears (uppercased) in the JSON definition.
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::NotEq),
            ">" => Some(BinaryOp::Gt),
            "<" => Some(BinaryOp::Lt),
            ">=" => Some(BinaryOp::GtEq),
            "<=" => Some(BinaryOp::LtEq),
            "LIKE" => Some(BinaryOp::Like),
            _ => None,
        }
    }
}

/// A literal value inlined into the generated SQL. Numbers keep their raw
/// decimal text so emission stays byte-stable.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Binary {
        column: String,
        op: BinaryOp,
        value: Literal,
    },
    InList {
        column: String,
        values: Vec<Literal>,
    },
    Between {
        column: String,
        low: Literal,
        high: Literal,
    },
    NullCheck {
        column: String,
        negated: bool,
    },
    Group {
        combinator: Combinator,
        conditions: Vec<Condition>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub column: String,
    pub direction: SortDirection,
}
