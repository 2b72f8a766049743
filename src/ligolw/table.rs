//! Tables and rows of a LIGO-LW document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{LigolwError, LigolwResult};
use super::value::{ColumnValue, RowId};

/// Known LIGO-LW tables, keyed by their stripped name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Process,
    ProcessParams,
    SearchSummVars,
    SimInspiral,
    SnglInspiral,
    CoincEvent,
    CoincDefiner,
    CoincEventMap,
    /// Any table this crate has no special knowledge of
    Other,
}

impl TableKind {
    /// Looks up the kind of a table by name (prefixes and `:table` are ignored)
    pub fn from_name(name: &str) -> Self {
        match strip_table_name(name) {
            "process" => TableKind::Process,
            "process_params" => TableKind::ProcessParams,
            "search_summvars" => TableKind::SearchSummVars,
            "sim_inspiral" => TableKind::SimInspiral,
            "sngl_inspiral" => TableKind::SnglInspiral,
            "coinc_event" => TableKind::CoincEvent,
            "coinc_definer" => TableKind::CoincDefiner,
            "coinc_event_map" => TableKind::CoincEventMap,
            _ => TableKind::Other,
        }
    }

    /// Returns the canonical table name
    pub fn table_name(&self) -> Option<&'static str> {
        match self {
            TableKind::Process => Some("process"),
            TableKind::ProcessParams => Some("process_params"),
            TableKind::SearchSummVars => Some("search_summvars"),
            TableKind::SimInspiral => Some("sim_inspiral"),
            TableKind::SnglInspiral => Some("sngl_inspiral"),
            TableKind::CoincEvent => Some("coinc_event"),
            TableKind::CoincDefiner => Some("coinc_definer"),
            TableKind::CoincEventMap => Some("coinc_event_map"),
            TableKind::Other => None,
        }
    }
}

/// Strips the `prefix:` namespace and `:table` suffix from a table name.
///
/// `"sim_inspiral:table"` and `"lsc:sim_inspiral:table"` both become
/// `"sim_inspiral"`.
pub fn strip_table_name(name: &str) -> &str {
    let name = name.strip_suffix(":table").unwrap_or(name);
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// A single table row: column name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: BTreeMap<String, ColumnValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column setter
    pub fn with(mut self, column: impl Into<String>, value: impl Into<ColumnValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<ColumnValue>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.columns.get(column)
    }

    pub fn get_text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(ColumnValue::as_text)
    }

    /// Parses an identifier column. Missing or malformed ids yield `None`.
    pub fn get_id(&self, column: &str) -> Option<RowId> {
        self.get_text(column).and_then(|s| s.parse().ok())
    }

    /// Parses an identifier column that must be present and well formed
    pub fn require_id(&self, table: &str, column: &str) -> LigolwResult<RowId> {
        let text = self.get_text(column).ok_or_else(|| {
            LigolwError::malformed_row(table, format!("missing identifier column '{}'", column))
        })?;
        text.parse()
            .map_err(|e| LigolwError::malformed_row(table, format!("column '{}': {}", column, e)))
    }
}

/// A named table; rows keep insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Builder-style row append
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Name with namespace prefix and `:table` suffix removed
    pub fn stripped_name(&self) -> &str {
        strip_table_name(&self.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the row whose `id.column` equals `id`.
    ///
    /// Linear scan; documents here are bounded by a single analysis run.
    pub fn find_by_id(&self, id: &RowId) -> Option<&Row> {
        self.rows
            .iter()
            .find(|row| row.get_id(&id.column).as_ref() == Some(id))
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
