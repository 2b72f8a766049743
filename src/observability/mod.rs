//! Observability: structured logging and lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on lookups
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use bayestar::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::FLowResolved, &[("f_low", "30")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields. Failures are WARN, the rest INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
