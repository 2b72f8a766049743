//! Observable events
//!
//! Events are explicit and typed; each maps to the `event` field of one log
//! line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration & input
    /// Configuration loaded
    ConfigLoaded,
    /// Document snapshot loaded
    DocumentLoaded,

    // Frequency cutoff
    /// A cutoff strategy found zero or several candidates
    FLowStrategyMiss,
    /// Cutoff determined
    FLowResolved,
    /// No strategy produced a unique cutoff
    FLowUnresolved,

    // Coincidence join
    /// The requested coincidence definition is not in the document
    CoincDefinitionAbsent,
    /// One injection matched to its detections
    InjectionMatched,
    /// Coincidence tables are structurally inconsistent
    CoincStructureViolation,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DocumentLoaded => "DOCUMENT_LOADED",
            Event::FLowStrategyMiss => "F_LOW_STRATEGY_MISS",
            Event::FLowResolved => "F_LOW_RESOLVED",
            Event::FLowUnresolved => "F_LOW_UNRESOLVED",
            Event::CoincDefinitionAbsent => "COINC_DEFINITION_ABSENT",
            Event::InjectionMatched => "INJECTION_MATCHED",
            Event::CoincStructureViolation => "COINC_STRUCTURE_VIOLATION",
        }
    }

    /// Events that describe a failed lookup
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::FLowUnresolved | Event::CoincStructureViolation)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
