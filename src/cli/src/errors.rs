//! Error types for the CLI.

use ledger::LedgerError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error when the ledger rejects an operation.
    LedgerError(LedgerError),

    /// Error when a script cannot be run.
    ScriptError(String),

    /// Error when the configuration is invalid.
    ConfigError(String),

    /// Error when the event observer task fails.
    ObserverError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError(e) => write!(f, "File error: {}", e),
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliError::LedgerError(e) => write!(f, "Ledger error: {}", e),
            CliError::ScriptError(msg) => write!(f, "Script error: {}", msg),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ObserverError(msg) => write!(f, "Observer error: {}", msg),
        }
    }
}

impl StdError for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::FileError(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::JsonError(error)
    }
}

impl From<LedgerError> for CliError {
    fn from(error: LedgerError) -> Self {
        CliError::LedgerError(error)
    }
}
