// src/schema/types.rs

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::error::Diagnostics;

/// The single type every value in a column shares.
#[derive(Debug, Serialize, PartialEq, Clone, Copy, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    String,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// A column of the final table.
#[derive(Debug, Serialize, PartialEq, Clone, Eq, Hash)]
pub struct Column {
    /// Canonical name, or the raw label when unmapped, or the position.
    pub name: String,
    /// Header text as found on the page (empty for positional columns).
    pub label: String,
    pub ty: ColumnType,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Ordering within one column. Columns are homogeneous, so the mixed
    /// arms only give a deterministic answer for malformed input.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            // Debug keeps a `.0` or exponent, so the text never reads back as an integer
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// Header-aligned, column-typed rows.
#[derive(Debug, Clone, Serialize)]
pub struct TypedTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
    /// Set when headers and body disagreed; name-based sorting is refused.
    pub sorting_disabled: bool,
    pub diagnostics: Diagnostics,
}

impl TypedTable {
    /// Position of the column whose canonical name or raw label matches
    /// `name`, ignoring ASCII case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| {
            c.name.eq_ignore_ascii_case(name)
                || (!c.label.is_empty() && c.label.eq_ignore_ascii_case(name))
        })
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_types(&self) -> Vec<ColumnType> {
        self.columns.iter().map(|c| c.ty).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
