//! Command line driver for the token ledger.

pub mod accounts;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types and functions
pub use commands::{demo, run};
pub use config::TokenConfig;
pub use errors::CliError;
