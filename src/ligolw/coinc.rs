//! Coincidence definitions and membership edges
//!
//! A `coinc_definer` row names a class of coincidence by (search,
//! search_coinc_type). Each `coinc_event` row points at its class through
//! `coinc_def_id`, and `coinc_event_map` rows list the members of each
//! coincidence.

use super::document::Document;
use super::errors::{LigolwError, LigolwResult};
use super::table::{strip_table_name, Row, Table, TableKind};
use super::value::RowId;

/// A class of coincidence, identified by search name and type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoincDef {
    pub search: String,
    pub search_coinc_type: i64,
    pub description: String,
}

impl CoincDef {
    pub fn new(search: impl Into<String>, search_coinc_type: i64, description: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            search_coinc_type,
            description: description.into(),
        }
    }

    /// sim_inspiral <--> coinc_event coincidences (nearby)
    pub fn inspiral_sc_near() -> Self {
        Self::new("inspiral", 2, "sim_inspiral<-->coinc_event coincidences (nearby)")
    }

    /// sim_inspiral <--> coinc_event coincidences (exact)
    pub fn inspiral_sc_exact() -> Self {
        Self::new("inspiral", 3, "sim_inspiral<-->coinc_event coincidences (exact)")
    }

    fn matches(&self, row: &Row) -> bool {
        row.get_text("search") == Some(self.search.as_str())
            && row.get("search_coinc_type").and_then(|v| v.as_f64())
                == Some(self.search_coinc_type as f64)
    }
}

/// Resolves the id of a coincidence definition without creating it.
///
/// Returns `Ok(None)` when the document has no `coinc_definer` table or no
/// row for the definition. Two rows for the same definition, or two
/// `coinc_definer` tables, are errors.
pub fn coinc_def_id(doc: &Document, def: &CoincDef) -> LigolwResult<Option<RowId>> {
    let table = match doc.table_of(TableKind::CoincDefiner)? {
        Some(t) => t,
        None => return Ok(None),
    };

    let mut ids = table.iter().filter(|row| def.matches(row));
    let first = match ids.next() {
        Some(row) => row,
        None => return Ok(None),
    };
    if ids.next().is_some() {
        return Err(LigolwError::AmbiguousOrMissingValue(format!(
            "search/search coinc type = {}/{} is not unique",
            def.search, def.search_coinc_type
        )));
    }

    first.require_id(&table.name, "coinc_def_id").map(Some)
}

/// One `coinc_event_map` row: event `event_id` (in `table_name`) belongs to
/// coincidence `coinc_event_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoincEdge {
    pub coinc_event_id: RowId,
    pub table_name: String,
    pub event_id: RowId,
}

impl CoincEdge {
    /// Reads an edge from a map row. The owning table is the `table_name`
    /// column when present, else the table part of `event_id`.
    pub fn from_row(table: &str, row: &Row) -> LigolwResult<Self> {
        let coinc_event_id = row.require_id(table, "coinc_event_id")?;
        let event_id = row.require_id(table, "event_id")?;
        let table_name = row
            .get_text("table_name")
            .map(|name| strip_table_name(name).to_string())
            .unwrap_or_else(|| event_id.table.clone());
        Ok(Self {
            coinc_event_id,
            table_name,
            event_id,
        })
    }

    /// Resolves the edge to the row it references
    pub fn resolve<'a>(&self, doc: &'a Document) -> LigolwResult<&'a Row> {
        doc.require_table(&self.table_name)?
            .find_by_id(&self.event_id)
            .ok_or_else(|| LigolwError::DanglingReference(self.event_id.clone()))
    }
}

/// Returns the membership edges of one coincidence, in map table order
pub fn edges_for_coinc(map_table: &Table, coinc_event_id: &RowId) -> LigolwResult<Vec<CoincEdge>> {
    let mut edges = Vec::new();
    for row in map_table {
        // Cheap pre-filter before the full parse
        if row.get_id("coinc_event_id").as_ref() != Some(coinc_event_id) {
            continue;
        }
        edges.push(CoincEdge::from_row(&map_table.name, row)?);
    }
    Ok(edges)
}
