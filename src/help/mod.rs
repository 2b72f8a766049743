//! Help text formatting for command line tools
//!
//! `NewlinePreservingFormatter` decorates a base `TextFormatter`, keeping
//! indented paragraphs (examples, bulleted lists) exactly as written while
//! the base reflows ordinary prose. `IndentedWrap` is the usual base.

mod formatter;
mod wrap;

pub use formatter::{from_fn, FnFormatter, NewlinePreservingFormatter, TextFormatter};
pub use wrap::{IndentedWrap, DEFAULT_COLUMNS, MIN_TEXT_WIDTH};

/// The standard help formatter: paragraph-preserving over indented wrap.
///
/// `width` overrides the terminal width taken from `COLUMNS`.
pub fn help_formatter(width: Option<usize>) -> NewlinePreservingFormatter<IndentedWrap> {
    let base = match width {
        Some(w) => IndentedWrap::new(w),
        None => IndentedWrap::from_env(),
    };
    NewlinePreservingFormatter::new(base)
}
