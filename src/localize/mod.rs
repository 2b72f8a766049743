//! Document lookups used by the localization pipeline
//!
//! - `resolve_f_low`: low-frequency cutoff of a template bank
//! - `iter_sim_and_detections`: injections paired with the triggers that
//!   recovered them

mod f_low;
mod injections;

pub use f_low::{resolve_f_low, FLowSource, F_LOW_SOURCES, SEARCH_SUMMVARS_F_LOW};
pub use injections::{
    iter_sim_and_detections, iter_sim_and_detections_for, InjectionMatch, SimAndDetections,
};
