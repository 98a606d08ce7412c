//! Type mapping definitions
//!
//! Rust values as they travel to PostgreSQL as positional arguments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single positional argument value.
///
/// There is no `Null` variant: an absent field is omitted from the statement,
/// it is never written as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostgresValue {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    TextArray(Vec<String>),
    IntegerArray(Vec<i32>),
    BigIntArray(Vec<i64>),
    Json(serde_json::Value),
    /// Nested values of a child collection; never bound directly
    Array(Vec<PostgresValue>),
}

impl PostgresValue {
    /// PostgreSQL type name of the bound parameter, used in logs and tests
    pub fn pg_type(&self) -> &'static str {
        match self {
            PostgresValue::Text(_) => "TEXT",
            PostgresValue::Integer(_) => "INTEGER",
            PostgresValue::BigInt(_) => "BIGINT",
            PostgresValue::Float(_) => "DOUBLE PRECISION",
            PostgresValue::Boolean(_) => "BOOLEAN",
            PostgresValue::Timestamp(_) => "TIMESTAMP",
            PostgresValue::TextArray(_) => "TEXT[]",
            PostgresValue::IntegerArray(_) => "INTEGER[]",
            PostgresValue::BigIntArray(_) => "BIGINT[]",
            PostgresValue::Json(_) => "JSONB",
            PostgresValue::Array(_) => "RECORD[]",
        }
    }
}

impl From<String> for PostgresValue {
    fn from(val: String) -> Self {
        PostgresValue::Text(val)
    }
}

impl From<&str> for PostgresValue {
    fn from(val: &str) -> Self {
        PostgresValue::Text(val.to_string())
    }
}

impl From<i32> for PostgresValue {
    fn from(val: i32) -> Self {
        PostgresValue::Integer(val)
    }
}

impl From<i64> for PostgresValue {
    fn from(val: i64) -> Self {
        PostgresValue::BigInt(val)
    }
}

impl From<f64> for PostgresValue {
    fn from(val: f64) -> Self {
        PostgresValue::Float(val)
    }
}

impl From<bool> for PostgresValue {
    fn from(val: bool) -> Self {
        PostgresValue::Boolean(val)
    }
}

impl From<NaiveDateTime> for PostgresValue {
    fn from(val: NaiveDateTime) -> Self {
        PostgresValue::Timestamp(val)
    }
}

impl From<Vec<String>> for PostgresValue {
    fn from(val: Vec<String>) -> Self {
        PostgresValue::TextArray(val)
    }
}

impl From<Vec<i32>> for PostgresValue {
    fn from(val: Vec<i32>) -> Self {
        PostgresValue::IntegerArray(val)
    }
}

impl From<Vec<i64>> for PostgresValue {
    fn from(val: Vec<i64>) -> Self {
        PostgresValue::BigIntArray(val)
    }
}

impl From<serde_json::Value> for PostgresValue {
    fn from(val: serde_json::Value) -> Self {
        PostgresValue::Json(val)
    }
}
