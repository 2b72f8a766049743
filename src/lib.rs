//! bayestar - LIGO-LW document helpers for rapid sky localization
//!
//! - `ligolw`: read-only document model (tables, rows, identifiers)
//! - `localize`: low-frequency cutoff and injection/detection lookups
//! - `help`: paragraph-preserving help text formatting
//! - `observability`: structured JSON logging
//! - `cli`: command line interface

pub mod cli;
pub mod help;
pub mod ligolw;
pub mod localize;
pub mod observability;
