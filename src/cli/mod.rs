//! CLI module for bayestar
//!
//! Provides command-line interface for:
//! - f-low: low-frequency cutoff of a template bank document
//! - injections: injections with the detections that recovered them

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, LONG_ABOUT};
pub use commands::{f_low, f_low_data, injections, injections_data, run, run_command, run_command_to};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, write_error, write_response};
