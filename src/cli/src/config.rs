//! Configuration for the CLI.

use crate::errors::CliError;
use anyhow::Result;
use ledger::{ledger::DEFAULT_DECIMALS, Address, Ledger};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Token parameters the ledger is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// The token name
    pub name: String,
    /// The token symbol
    pub symbol: String,
    /// Number of display decimals
    pub decimals: u8,
    /// The owner; defaults to the deploying signer
    pub owner: Option<Address>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "MyERC20".to_string(),
            symbol: "MTK".to_string(),
            decimals: DEFAULT_DECIMALS,
            owner: None,
        }
    }
}

impl TokenConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Loads `path` if given, else the default config file if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_path() {
            Some(path) if path.exists() => {
                debug!("Using configuration from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn load(path: &Path) -> Result<Self, CliError> {
        Self::from_file(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Returns the configured owner, or `deployer` if none is set.
    pub fn owner_or(&self, deployer: Address) -> Address {
        self.owner.unwrap_or(deployer)
    }

    /// Creates an empty ledger with these parameters.
    pub fn build_ledger(&self, deployer: Address) -> Ledger {
        Ledger::new(
            self.owner_or(deployer),
            self.name.clone(),
            self.symbol.clone(),
            self.decimals,
        )
    }
}

/// `<config_dir>/token-ledger/config.json`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    let mut dir = dirs::config_dir()?;
    dir.push("token-ledger");
    dir.push("config.json");
    Some(dir)
}
