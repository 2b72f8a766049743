//! Template bank low-frequency cutoff
//!
//! Different bank generators record the cutoff in different places:
//! lalapps_tmpltbank and lalapps_cbc_sbank as a command line option in
//! `process_params`, bayestar_sim_to_tmpltbank as a `search_summvars` row.
//! Sources are tried in order and the first one holding exactly one numeric
//! value wins. A source whose table appears twice in the document is skipped
//! like any other ambiguous source.

use std::fmt;

use crate::ligolw::{get_process_params, ColumnValue, Document, LigolwError, LigolwResult, TableKind};
use crate::observability::{log_event_with_fields, Event, Logger};

/// Name of the `search_summvars` row holding the cutoff
pub const SEARCH_SUMMVARS_F_LOW: &str = "low-frequency cutoff";

/// One place the cutoff may be recorded
#[derive(Clone, Copy)]
pub struct FLowSource {
    pub name: &'static str,
    locate: fn(&Document) -> LigolwResult<Vec<ColumnValue>>,
}

impl fmt::Debug for FLowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FLowSource").field("name", &self.name).finish()
    }
}

impl FLowSource {
    /// Returns every candidate value this source finds in the document
    pub fn candidates(&self, doc: &Document) -> LigolwResult<Vec<ColumnValue>> {
        (self.locate)(doc)
    }
}

/// Sources in priority order
pub const F_LOW_SOURCES: [FLowSource; 3] = [
    FLowSource {
        name: "tmpltbank --low-frequency-cutoff",
        locate: tmpltbank_f_low,
    },
    FLowSource {
        name: "lalapps_cbc_sbank --flow",
        locate: sbank_f_low,
    },
    FLowSource {
        name: "search_summvars low-frequency cutoff",
        locate: search_summvars_f_low,
    },
];

fn tmpltbank_f_low(doc: &Document) -> LigolwResult<Vec<ColumnValue>> {
    get_process_params(doc, "tmpltbank", "--low-frequency-cutoff")
}

fn sbank_f_low(doc: &Document) -> LigolwResult<Vec<ColumnValue>> {
    get_process_params(doc, "lalapps_cbc_sbank", "--flow")
}

fn search_summvars_f_low(doc: &Document) -> LigolwResult<Vec<ColumnValue>> {
    let table = match doc.table_of(TableKind::SearchSummVars)? {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };
    Ok(table
        .iter()
        .filter(|row| row.get_text("name") == Some(SEARCH_SUMMVARS_F_LOW))
        .filter_map(|row| row.get("value").cloned())
        .collect())
}

/// Determines the low-frequency cutoff (Hz) of a template bank document.
///
/// Zero and several candidates are treated alike: the next source is tried.
/// So is a source that cannot be read because its table is duplicated.
pub fn resolve_f_low(doc: &Document) -> LigolwResult<f64> {
    for source in F_LOW_SOURCES.iter() {
        let candidates = match source.candidates(doc) {
            Ok(candidates) => candidates,
            Err(e) => {
                let message = e.to_string();
                Logger::trace(
                    Event::FLowStrategyMiss.as_str(),
                    &[("source", source.name), ("error", message.as_str())],
                );
                continue;
            }
        };

        if let [only] = candidates.as_slice() {
            if let Some(f_low) = only.as_f64() {
                let value = f_low.to_string();
                log_event_with_fields(
                    Event::FLowResolved,
                    &[("source", source.name), ("f_low", value.as_str())],
                );
                return Ok(f_low);
            }
        }

        let count = candidates.len().to_string();
        Logger::trace(
            Event::FLowStrategyMiss.as_str(),
            &[("source", source.name), ("candidates", count.as_str())],
        );
    }

    log_event_with_fields(Event::FLowUnresolved, &[]);
    Err(LigolwError::AmbiguousOrMissingValue(
        "Could not determine low-frequency cutoff".into(),
    ))
}
