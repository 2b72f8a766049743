//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit status.

use std::fmt;
use std::io;

use crate::ligolw::LigolwError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, document files)
    IoError,
    /// Document could not be loaded
    DocumentError,
    /// A lookup on a loaded document failed
    LookupFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BAYESTAR_CLI_CONFIG_ERROR",
            Self::IoError => "BAYESTAR_CLI_IO_ERROR",
            Self::DocumentError => "BAYESTAR_CLI_DOCUMENT_ERROR",
            Self::LookupFailed => "BAYESTAR_CLI_LOOKUP_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    /// Code of the lookup error behind a `LookupFailed`
    lookup_code: Option<&'static str>,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            lookup_code: None,
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Document load error
    pub fn document_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DocumentError, msg)
    }

    /// Lookup failure, keeping the lookup's own code
    pub fn lookup_failed(err: &LigolwError) -> Self {
        Self {
            lookup_code: Some(err.code()),
            ..Self::new(CliErrorCode::LookupFailed, err.to_string())
        }
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the code of the failed lookup, if this is a lookup failure
    pub fn lookup_code(&self) -> Option<&'static str> {
        self.lookup_code
    }

    /// Code reported in the JSON error response: the lookup's own code when
    /// there is one, else the CLI code
    pub fn response_code(&self) -> &'static str {
        self.lookup_code.unwrap_or_else(|| self.code.code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lookup_code {
            Some(lookup_code) => write!(f, "{}: {}: {}", self.code.code(), lookup_code, self.message),
            None => write!(f, "{}: {}", self.code.code(), self.message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<LigolwError> for CliError {
    fn from(e: LigolwError) -> Self {
        match e {
            LigolwError::MalformedDocument { .. } => Self::document_error(e.to_string()),
            other => Self::lookup_failed(&other),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
