//! CLI command implementations
//!
//! Each command loads one document snapshot, runs one lookup, and writes one
//! JSON response. Every failure, from a bad config file to a failed lookup,
//! is written as an error response and also returned, so the process exits
//! non-zero.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::help::help_formatter;
use crate::ligolw::{CoincDef, Document, LigolwResult};
use crate::localize::{iter_sim_and_detections_for, resolve_f_low};
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_with_help(&help_formatter(None));
    run_command(cli)
}

/// Run the appropriate command based on CLI args, writing to stdout
pub fn run_command(cli: Cli) -> CliResult<()> {
    let stdout = io::stdout();
    run_command_to(cli, &mut stdout.lock())
}

/// Run a command, writing its JSON response to `out`
pub fn run_command_to<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let result = dispatch(cli, out);
    if let Err(e) = &result {
        write_error(out, e.response_code(), e.message())?;
    }
    result
}

fn dispatch<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Logger::set_level(config.severity()?);
    log_event_with_fields(Event::ConfigLoaded, &[("log_level", config.log_level.as_str())]);

    match cli.command {
        Command::FLow { document } => f_low(&document, out),
        Command::Injections { document } => injections(&document, &config.coinc_def(), out),
    }
}

/// Print the low-frequency cutoff of a template bank document
pub fn f_low<W: Write>(document: &Path, out: &mut W) -> CliResult<()> {
    let doc = load_document(document)?;
    respond(out, f_low_data(&doc))
}

/// Print every injection of a document with its detections
pub fn injections<W: Write>(document: &Path, def: &CoincDef, out: &mut W) -> CliResult<()> {
    let doc = load_document(document)?;
    respond(out, injections_data(&doc, def))
}

/// Response payload of `f-low`
pub fn f_low_data(doc: &Document) -> LigolwResult<Value> {
    let f_low = resolve_f_low(doc)?;
    Ok(json!({ "f_low": f_low }))
}

/// Response payload of `injections`
pub fn injections_data(doc: &Document, def: &CoincDef) -> LigolwResult<Value> {
    let matches = iter_sim_and_detections_for(doc, def).collect::<LigolwResult<Vec<_>>>()?;
    Ok(json!(matches))
}

fn load_document(path: &Path) -> CliResult<Document> {
    let doc = Document::from_path(path)?;
    let table_count = doc.tables.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::DocumentLoaded,
        &[("path", path_str.as_str()), ("tables", table_count.as_str())],
    );
    Ok(doc)
}

fn respond<W: Write>(out: &mut W, result: LigolwResult<Value>) -> CliResult<()> {
    let data = result.map_err(|e| CliError::lookup_failed(&e))?;
    write_response(out, data)
}
