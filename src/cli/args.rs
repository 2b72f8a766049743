//! CLI argument definitions using clap
//!
//! Commands:
//! - bayestar [--config <path>] f-low <document>
//! - bayestar [--config <path>] injections <document>

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::help::TextFormatter;

/// Extended description shown by `--help`, passed through the help formatter
pub const LONG_ABOUT: &str = "LIGO-LW document helpers for the BAYESTAR rapid sky localization pipeline. \
Documents are read from JSON snapshots of their tables; results are written to stdout as a single JSON object.

Commands:

  f-low       low-frequency cutoff of a template bank
  injections  injections paired with the triggers that recovered them

The low-frequency cutoff is taken from the first of these sources that records exactly one value: the tmpltbank --low-frequency-cutoff option, the lalapps_cbc_sbank --flow option, or the 'low-frequency cutoff' row of the search_summvars table.";

/// BAYESTAR LIGO-LW document helpers
#[derive(Parser, Debug)]
#[command(name = "bayestar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the low-frequency cutoff of a template bank document
    FLow {
        /// Path to a JSON document snapshot
        document: PathBuf,
    },

    /// List injections with the detections that recovered them
    Injections {
        /// Path to a JSON document snapshot
        document: PathBuf,
    },
}

impl Cli {
    /// Builds the clap command with its long help run through `formatter`
    pub fn command_with_help<F: TextFormatter>(formatter: &F) -> clap::Command {
        Cli::command().long_about(formatter.format_text(LONG_ABOUT))
    }

    /// Parse command line arguments, exiting on usage errors
    pub fn parse_with_help<F: TextFormatter>(formatter: &F) -> Self {
        let matches = Self::command_with_help(formatter).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Parse the given arguments without exiting
    pub fn try_parse_with_help<F, I, T>(formatter: &F, args: I) -> Result<Self, clap::Error>
    where
        F: TextFormatter,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with_help(formatter).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}
