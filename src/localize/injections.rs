//! Injections and the detections that recovered them
//!
//! An injection is tied to its detections through two coincidences:
//!
//! ```text
//! coinc_event (sim <-> coinc, "outer")
//!   ├── sim_inspiral row
//!   └── coinc_event (the detection, "inner")
//!         ├── sngl_inspiral row (H1)
//!         └── sngl_inspiral row (L1) ...
//! ```
//!
//! The outer coincidence only binds the injection to the inner one; the
//! inner coincidence holds the triggers. Both hops are always followed.

use serde::Serialize;

use crate::ligolw::{
    coinc_def_id, edges_for_coinc, CoincDef, CoincEdge, Document, LigolwError, LigolwResult, Row,
    RowId, TableKind,
};
use crate::observability::{log_event_with_fields, Event};

const COINC_EVENT: &str = "coinc_event";
const COINC_EVENT_MAP: &str = "coinc_event_map";
const SIM_INSPIRAL: &str = "sim_inspiral";

/// One injection with the rows of the coincidence that recovered it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InjectionMatch<'a> {
    pub sim: &'a Row,
    /// Detection rows in `coinc_event_map` order
    pub detections: Vec<&'a Row>,
}

/// Lazy sequence of injection matches, in `coinc_event` table order.
///
/// The first error is yielded once; afterwards the iterator is exhausted.
pub struct SimAndDetections<'a> {
    doc: &'a Document,
    coinc_events: std::slice::Iter<'a, Row>,
    sim_coinc_def_id: Option<RowId>,
    pending_error: Option<LigolwError>,
    done: bool,
}

/// Iterates over exact sim_inspiral <--> coinc_event matches
pub fn iter_sim_and_detections(doc: &Document) -> SimAndDetections<'_> {
    iter_sim_and_detections_for(doc, &CoincDef::inspiral_sc_exact())
}

/// Iterates over sim <--> coinc matches of the given coincidence class.
///
/// A document without that class yields nothing. Duplicated `coinc_event` or
/// `coinc_definer` tables are yielded as a single error.
pub fn iter_sim_and_detections_for<'a>(doc: &'a Document, def: &CoincDef) -> SimAndDetections<'a> {
    let lookup = doc
        .table_of(TableKind::CoincEvent)
        .and_then(|table| Ok((table, coinc_def_id(doc, def)?)));

    let (rows, sim_coinc_def_id, pending_error): (&'a [Row], _, _) = match lookup {
        Ok((table, id)) => (table.map(|t| t.rows.as_slice()).unwrap_or(&[]), id, None),
        Err(e) => (&[], None, Some(e)),
    };

    if sim_coinc_def_id.is_none() && pending_error.is_none() {
        let coinc_type = def.search_coinc_type.to_string();
        log_event_with_fields(
            Event::CoincDefinitionAbsent,
            &[("search", def.search.as_str()), ("search_coinc_type", coinc_type.as_str())],
        );
    }

    SimAndDetections {
        doc,
        coinc_events: rows.iter(),
        sim_coinc_def_id,
        pending_error,
        done: false,
    }
}

impl<'a> Iterator for SimAndDetections<'a> {
    type Item = LigolwResult<InjectionMatch<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending_error.take() {
            self.done = true;
            return Some(Err(err));
        }

        let def_id = self.sim_coinc_def_id.as_ref()?;
        for coinc in self.coinc_events.by_ref() {
            if coinc.get_id("coinc_def_id").as_ref() != Some(def_id) {
                continue;
            }

            let result = match_injection(self.doc, coinc);
            match &result {
                Ok(m) => {
                    let count = m.detections.len().to_string();
                    log_event_with_fields(Event::InjectionMatched, &[("detections", count.as_str())]);
                }
                Err(e) => {
                    self.done = true;
                    let message = e.to_string();
                    log_event_with_fields(
                        Event::CoincStructureViolation,
                        &[("code", e.code()), ("message", message.as_str())],
                    );
                }
            }
            return Some(result);
        }

        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for SimAndDetections<'_> {}

/// Follows one outer coincidence to its injection and detections
fn match_injection<'a>(doc: &'a Document, coinc: &'a Row) -> LigolwResult<InjectionMatch<'a>> {
    let coinc_event_id = coinc.require_id(COINC_EVENT, "coinc_event_id")?;
    let map_table = doc.require_table(COINC_EVENT_MAP)?;

    let mut sim_edge: Option<CoincEdge> = None;
    let mut inner_edge: Option<CoincEdge> = None;

    for edge in edges_for_coinc(map_table, &coinc_event_id)? {
        let slot = match TableKind::from_name(&edge.table_name) {
            TableKind::SimInspiral => &mut sim_edge,
            TableKind::CoincEvent => &mut inner_edge,
            _ => {
                return Err(LigolwError::UnexpectedEventType {
                    coinc_event_id,
                    table_name: edge.table_name,
                })
            }
        };
        if slot.is_some() {
            return Err(LigolwError::DuplicateCoincidenceMember {
                coinc_event_id,
                table_name: edge.table_name,
            });
        }
        *slot = Some(edge);
    }

    let missing = |table_name: &str| LigolwError::MissingCoincidenceMember {
        coinc_event_id: coinc_event_id.clone(),
        table_name: table_name.to_string(),
    };
    let sim_edge = sim_edge.ok_or_else(|| missing(SIM_INSPIRAL))?;
    let inner_edge = inner_edge.ok_or_else(|| missing(COINC_EVENT))?;

    let sim = sim_edge.resolve(doc)?;
    let inner = inner_edge.resolve(doc)?;
    let inner_id = inner.require_id(COINC_EVENT, "coinc_event_id")?;

    let detections = edges_for_coinc(map_table, &inner_id)?
        .iter()
        .map(|edge| edge.resolve(doc))
        .collect::<LigolwResult<Vec<_>>>()?;

    Ok(InjectionMatch { sim, detections })
}
