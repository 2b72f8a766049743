//! In-memory LIGO-LW document
//!
//! A document is a list of named tables. The helpers in this crate only ever
//! read from one. Snapshots are loaded from JSON of the form
//!
//! ```json
//! {"tables": [{"name": "sim_inspiral:table", "rows": [{"simulation_id": "sim_inspiral:simulation_id:0"}]}]}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{LigolwError, LigolwResult};
use super::table::{strip_table_name, Table, TableKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table append
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Returns the table whose stripped name matches `name`.
    ///
    /// A document holding two tables of that name is ambiguous, so the lookup
    /// fails rather than pick one.
    pub fn get_table(&self, name: &str) -> LigolwResult<Option<&Table>> {
        let wanted = strip_table_name(name);
        let mut matching = self.tables.iter().filter(|t| t.stripped_name() == wanted);
        let first = matching.next();
        if first.is_some() && matching.next().is_some() {
            return Err(LigolwError::DuplicateTable(wanted.to_string()));
        }
        Ok(first)
    }

    /// Returns the table of a known kind
    pub fn table_of(&self, kind: TableKind) -> LigolwResult<Option<&Table>> {
        match kind.table_name() {
            Some(name) => self.get_table(name),
            None => Ok(None),
        }
    }

    /// Like `get_table`, but a missing table is an error
    pub fn require_table(&self, name: &str) -> LigolwResult<&Table> {
        self.get_table(name)?
            .ok_or_else(|| LigolwError::MissingTable(strip_table_name(name).to_string()))
    }

    /// Decodes a document snapshot from JSON text
    pub fn from_json_str(json: &str) -> LigolwResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LigolwError::malformed_document("<in-memory>", format!("Invalid JSON: {}", e)))
    }

    /// Reads a document snapshot from a JSON file
    pub fn from_path(path: &Path) -> LigolwResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LigolwError::malformed_document(
                path.display().to_string(),
                format!("Failed to read file: {}", e),
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            LigolwError::malformed_document(path.display().to_string(), format!("Invalid JSON: {}", e))
        })
    }
}
