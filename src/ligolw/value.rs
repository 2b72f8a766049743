//! Column values and row identifiers
//!
//! Identifiers use the LIGO-LW `ilwd:char` text form `table:column:index`,
//! e.g. `sim_inspiral:simulation_id:0`. They are stored in rows as text and
//! parsed on access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single cell of a table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    /// Integer column (int_4s, int_8s, ...)
    Int(i64),
    /// Floating point column (real_4, real_8)
    Real(f64),
    /// Text column (lstring, ilwd:char, ...)
    Text(String),
}

impl ColumnValue {
    /// Returns the value as a float if it is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ColumnValue::Int(i) => Some(*i as f64),
            ColumnValue::Real(r) => Some(*r),
            ColumnValue::Text(_) => None,
        }
    }

    /// Returns the value as text if it is a text column
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a value stored as text into the given LIGO-LW column type.
    ///
    /// Unknown types and values that do not parse are returned unchanged.
    pub fn with_type(self, type_name: &str) -> Self {
        let converted = match &self {
            ColumnValue::Text(s) => match type_name {
                "real_4" | "real_8" | "float" | "double" => {
                    s.trim().parse::<f64>().ok().map(ColumnValue::Real)
                }
                "int_2s" | "int_4s" | "int_8s" | "int_2u" | "int_4u" | "int" => {
                    s.trim().parse::<i64>().ok().map(ColumnValue::Int)
                }
                _ => None,
            },
            _ => None,
        };
        converted.unwrap_or(self)
    }
}

impl From<i64> for ColumnValue {
    fn from(v: i64) -> Self {
        ColumnValue::Int(v)
    }
}

impl From<f64> for ColumnValue {
    fn from(v: f64) -> Self {
        ColumnValue::Real(v)
    }
}

impl From<&str> for ColumnValue {
    fn from(v: &str) -> Self {
        ColumnValue::Text(v.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(v: String) -> Self {
        ColumnValue::Text(v)
    }
}

impl From<RowId> for ColumnValue {
    fn from(v: RowId) -> Self {
        ColumnValue::Text(v.to_string())
    }
}

impl From<&RowId> for ColumnValue {
    fn from(v: &RowId) -> Self {
        ColumnValue::Text(v.to_string())
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Int(i) => write!(f, "{}", i),
            ColumnValue::Real(r) => write!(f, "{}", r),
            ColumnValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Identifier of a row, tagged with its owning table and id column
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId {
    pub table: String,
    pub column: String,
    pub index: u64,
}

impl RowId {
    pub fn new(table: impl Into<String>, column: impl Into<String>, index: u64) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            index,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.table, self.column, self.index)
    }
}

/// Error returned when text is not a `table:column:index` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRowIdError(pub String);

impl fmt::Display for ParseRowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a table:column:index identifier", self.0)
    }
}

impl std::error::Error for ParseRowIdError {}

impl FromStr for RowId {
    type Err = ParseRowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRowIdError(s.to_string());
        let mut parts = s.trim().split(':');
        let (table, column, index) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(t), Some(c), Some(i), None) => (t, c, i),
            _ => return Err(err()),
        };
        if table.is_empty() || column.is_empty() {
            return Err(err());
        }
        let index = index.parse::<u64>().map_err(|_| err())?;
        Ok(RowId::new(table, column, index))
    }
}

impl Serialize for RowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
