//! Read-only LIGO-LW document model
//!
//! Tables are named row lists, rows map column names to values, and rows
//! refer to each other through `table:column:index` identifiers.
//!
//! # Design Principles
//!
//! - Documents are never mutated by lookups
//! - Table order is insertion order
//! - Identifier lookups are exact; no coercion between tables

mod coinc;
mod document;
mod errors;
mod process;
mod table;
mod value;

pub use coinc::{coinc_def_id, edges_for_coinc, CoincDef, CoincEdge};
pub use document::Document;
pub use errors::{LigolwError, LigolwResult};
pub use process::get_process_params;
pub use table::{strip_table_name, Row, Table, TableKind};
pub use value::{ColumnValue, ParseRowIdError, RowId};
