//! The in-memory tabular value produced by the loader.
//!
//! A [`Table`] is row-major: a schema plus a vector of rows, each row a
//! vector of [`Value`] fields. Fields that failed type coercion on load are
//! `Value::Null`; consumers must tolerate partially-null rows.

use crate::schema::{ColumnType, Schema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field of a row.
///
/// `Null` stands in for any field that was empty or failed to coerce to the
/// column's declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    /// Coerce a raw field to `ty`, yielding `Null` on failure.
    ///
    /// An empty field is null for every column type, matching how the
    /// public dataset encodes missing values (e.g. absent tmdbId).
    pub fn parse(ty: ColumnType, raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        match ty {
            ColumnType::Int => raw.parse().map_or(Value::Null, Value::Int),
            ColumnType::Float => raw.parse().map_or(Value::Null, Value::Float),
            ColumnType::Str => Value::Str(raw.to_string()),
            ColumnType::Timestamp => raw
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map_or(Value::Null, Value::Timestamp),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the field; integers widen to float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

/// One row of a table, in schema column order
pub type Row = Vec<Value>;

/// A loaded table: declared schema plus materialized rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Create a table from already-materialized rows
    pub fn with_rows(schema: Schema, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.column_index(name)
    }
}
