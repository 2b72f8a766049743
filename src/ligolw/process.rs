//! Process parameter lookups
//!
//! Each `process_params` row records one command line option of the program
//! that wrote the document. Values are stored as text together with a
//! `type` column naming their LIGO-LW type.

use super::document::Document;
use super::errors::LigolwResult;
use super::table::TableKind;
use super::value::ColumnValue;

/// Returns the typed values of every `process_params` row recorded for
/// `program` with parameter `param`, in row order.
///
/// A document without a `process_params` table has no parameters; one with
/// two such tables is an error.
pub fn get_process_params(
    doc: &Document,
    program: &str,
    param: &str,
) -> LigolwResult<Vec<ColumnValue>> {
    let table = match doc.table_of(TableKind::ProcessParams)? {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };

    let values: Vec<ColumnValue> = table
        .iter()
        .filter(|row| row.get_text("program") == Some(program) && row.get_text("param") == Some(param))
        .filter_map(|row| {
            let value = row.get("value")?.clone();
            Some(match row.get_text("type") {
                Some(type_name) => value.with_type(type_name),
                None => value,
            })
        })
        .collect();
    Ok(values)
}
