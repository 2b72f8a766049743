//! LIGO-LW lookup error types
//!
//! Error codes:
//! - BAYESTAR_AMBIGUOUS_OR_MISSING_VALUE
//! - BAYESTAR_UNEXPECTED_EVENT_TYPE (structural)
//! - BAYESTAR_DUPLICATE_COINC_MEMBER (structural)
//! - BAYESTAR_MISSING_COINC_MEMBER (structural)
//! - BAYESTAR_DANGLING_REFERENCE (structural)
//! - BAYESTAR_MISSING_TABLE
//! - BAYESTAR_DUPLICATE_TABLE (structural)
//! - BAYESTAR_MALFORMED_ROW (structural)
//! - BAYESTAR_MALFORMED_DOCUMENT

use thiserror::Error;

use super::value::RowId;

/// Result type for document lookups
pub type LigolwResult<T> = Result<T, LigolwError>;

/// Errors raised while reading a LIGO-LW document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LigolwError {
    /// A lookup that must produce exactly one value produced zero or several
    #[error("{0}")]
    AmbiguousOrMissingValue(String),

    /// A membership edge points at a table the coincidence cannot contain
    #[error("Did not expect coincidence {coinc_event_id} to contain an event of type '{table_name}'")]
    UnexpectedEventType {
        coinc_event_id: RowId,
        table_name: String,
    },

    /// A singular coincidence role was filled twice
    #[error("Found more than one matching {table_name} entry in coincidence {coinc_event_id}")]
    DuplicateCoincidenceMember {
        coinc_event_id: RowId,
        table_name: String,
    },

    /// A singular coincidence role was never filled
    #[error("Coincidence {coinc_event_id} has no {table_name} entry")]
    MissingCoincidenceMember {
        coinc_event_id: RowId,
        table_name: String,
    },

    /// A membership edge references a row that does not exist
    #[error("No row in table '{}' has {} = {}", .0.table, .0.column, .0)]
    DanglingReference(RowId),

    /// A table required by the lookup is not in the document
    #[error("Document has no '{0}' table")]
    MissingTable(String),

    /// More than one table in the document carries the same name
    #[error("Document must contain exactly one '{0}' table")]
    DuplicateTable(String),

    /// A row lacks a required column or holds an unparsable value
    #[error("Malformed row in table '{table}': {reason}")]
    MalformedRow { table: String, reason: String },

    /// The document snapshot could not be read or decoded
    #[error("Malformed document '{source_name}': {reason}")]
    MalformedDocument { source_name: String, reason: String },
}

impl LigolwError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            LigolwError::AmbiguousOrMissingValue(_) => "BAYESTAR_AMBIGUOUS_OR_MISSING_VALUE",
            LigolwError::UnexpectedEventType { .. } => "BAYESTAR_UNEXPECTED_EVENT_TYPE",
            LigolwError::DuplicateCoincidenceMember { .. } => "BAYESTAR_DUPLICATE_COINC_MEMBER",
            LigolwError::MissingCoincidenceMember { .. } => "BAYESTAR_MISSING_COINC_MEMBER",
            LigolwError::DanglingReference(_) => "BAYESTAR_DANGLING_REFERENCE",
            LigolwError::MissingTable(_) => "BAYESTAR_MISSING_TABLE",
            LigolwError::DuplicateTable(_) => "BAYESTAR_DUPLICATE_TABLE",
            LigolwError::MalformedRow { .. } => "BAYESTAR_MALFORMED_ROW",
            LigolwError::MalformedDocument { .. } => "BAYESTAR_MALFORMED_DOCUMENT",
        }
    }

    /// Returns whether this error means the document itself is malformed
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LigolwError::UnexpectedEventType { .. }
                | LigolwError::DuplicateCoincidenceMember { .. }
                | LigolwError::MissingCoincidenceMember { .. }
                | LigolwError::DanglingReference(_)
                | LigolwError::DuplicateTable(_)
                | LigolwError::MalformedRow { .. }
        )
    }

    pub(crate) fn malformed_row(table: impl Into<String>, reason: impl Into<String>) -> Self {
        LigolwError::MalformedRow {
            table: table.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_document(
        source_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LigolwError::MalformedDocument {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
