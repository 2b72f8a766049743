//! Injection / detection join tests
//!
//! Every found injection is reached through two coincidences: the outer
//! sim<-->coinc coincidence and the inner coincidence of triggers.

mod common;

use bayestar::ligolw::{CoincDef, Document, LigolwError, LigolwResult, Row, Table};
use bayestar::localize::{iter_sim_and_detections, iter_sim_and_detections_for};

use common::{coinc, coinc_id, def_id, edge, sim_id, sngl, sngl_id, FoundInjections};

// =============================================================================
// Helper Functions
// =============================================================================

fn ifos(rows: &[&Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.get_text("ifo").unwrap().to_string())
        .collect()
}

fn table_mut<'a>(doc: &'a mut Document, name: &str) -> &'a mut Table {
    doc.tables
        .iter_mut()
        .find(|t| t.stripped_name() == name)
        .unwrap()
}

// =============================================================================
// Happy Path Tests
// =============================================================================

/// One injection found by H1 and L1 yields one pair in edge order.
#[test]
fn test_single_found_injection() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let doc = found.build();

    let matches = iter_sim_and_detections(&doc)
        .collect::<LigolwResult<Vec<_>>>()
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].sim.get_id("simulation_id"), Some(sim_id(0)));
    assert_eq!(ifos(&matches[0].detections), vec!["H1", "L1"]);
}

/// Detections follow map order, not trigger table order.
#[test]
fn test_detection_order_follows_edges() {
    let doc = Document::new()
        .with_table(Table::new("coinc_definer").with_row(common::definer(&def_id(1), 3)))
        .with_table(
            Table::new("coinc_event")
                .with_row(coinc(&coinc_id(0), &def_id(0)))
                .with_row(coinc(&coinc_id(1), &def_id(1))),
        )
        .with_table(
            Table::new("coinc_event_map")
                .with_row(edge(&coinc_id(0), &sngl_id(2)))
                .with_row(edge(&coinc_id(0), &sngl_id(0)))
                .with_row(edge(&coinc_id(1), &coinc_id(0)))
                .with_row(edge(&coinc_id(1), &sim_id(0))),
        )
        .with_table(Table::new("sim_inspiral").with_row(common::sim(&sim_id(0), 1.4)))
        .with_table(
            Table::new("sngl_inspiral")
                .with_row(sngl(&sngl_id(0), "H1"))
                .with_row(sngl(&sngl_id(1), "L1"))
                .with_row(sngl(&sngl_id(2), "V1")),
        );

    let m = iter_sim_and_detections(&doc).next().unwrap().unwrap();
    assert_eq!(ifos(&m.detections), vec!["V1", "H1"]);
}

/// Several injections come out in coinc_event table order.
#[test]
fn test_multiple_injections_in_table_order() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    found.add_found(1, &["H1", "L1", "V1"]);
    found.add_found(2, &["L1"]);
    let doc = found.build();

    let matches = iter_sim_and_detections(&doc)
        .collect::<LigolwResult<Vec<_>>>()
        .unwrap();

    let sims: Vec<_> = matches
        .iter()
        .map(|m| m.sim.get_id("simulation_id").unwrap().index)
        .collect();
    assert_eq!(sims, vec![0, 1, 2]);
    assert_eq!(ifos(&matches[1].detections), vec!["H1", "L1", "V1"]);
    assert_eq!(ifos(&matches[2].detections), vec!["L1"]);
}

/// Without an exact sim<-->coinc definition there is nothing to join.
#[test]
fn test_no_definition_yields_empty() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    table_mut(&mut doc, "coinc_definer")
        .rows
        .retain(|row| row.get("search_coinc_type").and_then(|v| v.as_f64()) != Some(3.0));

    assert_eq!(iter_sim_and_detections(&doc).count(), 0);
}

/// An empty document is not an error.
#[test]
fn test_empty_document_yields_empty() {
    assert!(iter_sim_and_detections(&Document::new()).next().is_none());
}

/// The near definition is joined the same way when requested.
#[test]
fn test_near_definition() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1"]);
    let mut doc = found.build();
    for row in &mut table_mut(&mut doc, "coinc_definer").rows {
        if row.get("search_coinc_type").and_then(|v| v.as_f64()) == Some(3.0) {
            row.set("search_coinc_type", 2i64);
        }
    }

    assert_eq!(iter_sim_and_detections(&doc).count(), 0);
    let near: Vec<_> = iter_sim_and_detections_for(&doc, &CoincDef::inspiral_sc_near())
        .collect::<LigolwResult<Vec<_>>>()
        .unwrap();
    assert_eq!(near.len(), 1);
}

/// Stopping early is allowed and leaves the document intact.
#[test]
fn test_lazy_iteration() {
    let mut found = FoundInjections::new();
    for i in 0..5 {
        found.add_found(i, &["H1", "L1"]);
    }
    let doc = found.build();
    let before = doc.clone();

    let first_two: Vec<_> = iter_sim_and_detections(&doc).take(2).collect();
    assert_eq!(first_two.len(), 2);
    assert_eq!(doc, before);
}

// =============================================================================
// Structural Violation Tests
// =============================================================================

/// An outer edge to an unexpected table is rejected.
#[test]
fn test_unexpected_event_type() {
    let mut found = FoundInjections::new();
    let outer = found.add_found(0, &["H1", "L1"]);
    let burst = bayestar::ligolw::RowId::new("sngl_burst", "event_id", 0);
    found.coinc_map.push(edge(&outer, &burst));
    let doc = found.build();

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(
        err,
        LigolwError::UnexpectedEventType {
            coinc_event_id: outer,
            table_name: "sngl_burst".into(),
        }
    );
    assert!(err.is_structural());
}

/// A second sim_inspiral edge is rejected.
#[test]
fn test_duplicate_sim_member() {
    let mut found = FoundInjections::new();
    let outer = found.add_found(0, &["H1", "L1"]);
    found.sims.push(common::sim(&sim_id(1), 2.0));
    found.coinc_map.push(edge(&outer, &sim_id(1)));
    let doc = found.build();

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(err.code(), "BAYESTAR_DUPLICATE_COINC_MEMBER");
}

/// A second inner coincidence edge is rejected.
#[test]
fn test_duplicate_coinc_member() {
    let mut found = FoundInjections::new();
    let outer = found.add_found(0, &["H1", "L1"]);
    found.coinc_map.push(edge(&outer, &outer));
    let doc = found.build();

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert!(matches!(
        err,
        LigolwError::DuplicateCoincidenceMember { ref table_name, .. } if table_name == "coinc_event"
    ));
}

/// A detection id with no row is an error, not a silent skip.
#[test]
fn test_dangling_detection() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    table_mut(&mut doc, "sngl_inspiral").rows.pop();

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(err, LigolwError::DanglingReference(sngl_id(1)));
}

/// After an error the sequence ends.
#[test]
fn test_error_halts_iteration() {
    let mut found = FoundInjections::new();
    let outer = found.add_found(0, &["H1"]);
    found.add_found(1, &["L1"]);
    let burst = bayestar::ligolw::RowId::new("sngl_burst", "event_id", 0);
    found.coinc_map.push(edge(&outer, &burst));
    let doc = found.build();

    let mut iter = iter_sim_and_detections(&doc);
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

/// Errors on later coincidences still let earlier matches through.
#[test]
fn test_matches_before_error_are_yielded() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1"]);
    let bad = found.add_found(1, &["L1"]);
    found.coinc_map.push(edge(&bad, &sim_id(0)));
    let doc = found.build();

    let results: Vec<_> = iter_sim_and_detections(&doc).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

/// Two coinc_event tables cannot be told apart; the join reports it instead
/// of reading only the first.
#[test]
fn test_duplicate_coinc_event_table() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    let rows = std::mem::take(&mut table_mut(&mut doc, "coinc_event").rows);
    doc.push(Table {
        name: "coinc_event:table".into(),
        rows,
    });

    let mut iter = iter_sim_and_detections(&doc);
    assert_eq!(
        iter.next().unwrap().unwrap_err(),
        LigolwError::DuplicateTable("coinc_event".into())
    );
    assert!(iter.next().is_none());
}

/// A duplicated trigger table fails when the detections are resolved.
#[test]
fn test_duplicate_sngl_inspiral_table() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1"]);
    let mut doc = found.build();
    doc.push(Table::new("sngl_inspiral:table"));

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(err, LigolwError::DuplicateTable("sngl_inspiral".into()));
    assert!(err.is_structural());
}

// =============================================================================
// Missing Member Tests
// =============================================================================

/// Detections in a table the document lacks are an error.
#[test]
fn test_missing_trigger_table() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    doc.tables.retain(|t| t.stripped_name() != "sngl_inspiral");

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(err, LigolwError::MissingTable("sngl_inspiral".into()));
}

/// The injection row itself must exist.
#[test]
fn test_dangling_sim() {
    let mut found = FoundInjections::new();
    found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    table_mut(&mut doc, "sim_inspiral").rows.clear();

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(err, LigolwError::DanglingReference(sim_id(0)));
}

/// An outer coincidence without its injection edge is incomplete.
#[test]
fn test_missing_sim_member() {
    let mut found = FoundInjections::new();
    let outer = found.add_found(0, &["H1", "L1"]);
    let mut doc = found.build();
    table_mut(&mut doc, "coinc_event_map")
        .rows
        .retain(|row| row.get_id("event_id") != Some(sim_id(0)));

    let err = iter_sim_and_detections(&doc).next().unwrap().unwrap_err();
    assert_eq!(
        err,
        LigolwError::MissingCoincidenceMember {
            coinc_event_id: outer,
            table_name: "sim_inspiral".into(),
        }
    );
}
