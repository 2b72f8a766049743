//! Document fixtures shared by the integration tests

#![allow(dead_code)]

use bayestar::ligolw::{Document, Row, RowId, Table};

pub fn coinc_id(i: u64) -> RowId {
    RowId::new("coinc_event", "coinc_event_id", i)
}

pub fn sim_id(i: u64) -> RowId {
    RowId::new("sim_inspiral", "simulation_id", i)
}

pub fn sngl_id(i: u64) -> RowId {
    RowId::new("sngl_inspiral", "event_id", i)
}

pub fn def_id(i: u64) -> RowId {
    RowId::new("coinc_definer", "coinc_def_id", i)
}

pub fn process_param(program: &str, param: &str, value: &str) -> Row {
    Row::new()
        .with("program", program)
        .with("param", param)
        .with("type", "real_8")
        .with("value", value)
}

pub fn summvar(name: &str, value: f64) -> Row {
    Row::new().with("name", name).with("value", value)
}

pub fn definer(id: &RowId, coinc_type: i64) -> Row {
    Row::new()
        .with("coinc_def_id", id)
        .with("search", "inspiral")
        .with("search_coinc_type", coinc_type)
}

pub fn coinc(id: &RowId, def: &RowId) -> Row {
    Row::new().with("coinc_event_id", id).with("coinc_def_id", def)
}

pub fn edge(coinc: &RowId, event: &RowId) -> Row {
    Row::new()
        .with("coinc_event_id", coinc)
        .with("table_name", event.table.as_str())
        .with("event_id", event)
}

pub fn sim(id: &RowId, mass1: f64) -> Row {
    Row::new().with("simulation_id", id).with("mass1", mass1)
}

pub fn sngl(id: &RowId, ifo: &str) -> Row {
    Row::new().with("event_id", id).with("ifo", ifo)
}

/// Builds the coincidence tables of a found-injection document.
///
/// Definitions: `def_id(0)` is sngl<-->sngl (type 0), `def_id(1)` is
/// sim<-->coinc exact (type 3).
pub struct FoundInjections {
    pub coinc_events: Table,
    pub coinc_map: Table,
    pub sims: Table,
    pub sngls: Table,
    pub definer: Table,
    next_coinc: u64,
}

impl FoundInjections {
    pub fn new() -> Self {
        Self {
            coinc_events: Table::new("coinc_event:table"),
            coinc_map: Table::new("coinc_event_map:table"),
            sims: Table::new("sim_inspiral:table"),
            sngls: Table::new("sngl_inspiral:table"),
            definer: Table::new("coinc_definer:table")
                .with_row(definer(&def_id(0), 0))
                .with_row(definer(&def_id(1), 3)),
            next_coinc: 0,
        }
    }

    /// Adds an injection recovered by triggers in the given detectors.
    /// Returns the outer coinc id.
    pub fn add_found(&mut self, sim_index: u64, ifos: &[&str]) -> RowId {
        let sim_row_id = sim_id(sim_index);
        self.sims.push(sim(&sim_row_id, 1.4 + sim_index as f64));

        let inner = self.next_coinc_id();
        self.coinc_events.push(coinc(&inner, &def_id(0)));
        for ifo in ifos {
            let trigger = sngl_id(self.sngls.len() as u64);
            self.sngls.push(sngl(&trigger, ifo));
            self.coinc_map.push(edge(&inner, &trigger));
        }

        let outer = self.next_coinc_id();
        self.coinc_events.push(coinc(&outer, &def_id(1)));
        self.coinc_map.push(edge(&outer, &sim_row_id));
        self.coinc_map.push(edge(&outer, &inner));
        outer
    }

    fn next_coinc_id(&mut self) -> RowId {
        let id = coinc_id(self.next_coinc);
        self.next_coinc += 1;
        id
    }

    pub fn build(self) -> Document {
        Document::new()
            .with_table(self.definer)
            .with_table(self.coinc_events)
            .with_table(self.coinc_map)
            .with_table(self.sims)
            .with_table(self.sngls)
    }
}
