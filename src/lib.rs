use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{BufRead, Write};

pub mod collector;
pub mod error;

pub use crate::collector::collect_wallets;
pub use crate::error::CollectError;

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub output_path: String,
}

impl CollectorConfig {
    /// Reads the config from the environment, falling back to the stock
    /// output file in the current working directory.
    pub fn from_env() -> Self {
        CollectorConfig {
            output_path: env::var("WALLETS_FILE").unwrap_or_else(|_| "wallets.json".to_string()),
        }
    }
}

/// One saved wallet. Address and key are free text, stored exactly as
/// entered; the key serializes under the `privateKey` wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub address: String,
    #[serde(rename = "privateKey")]
    pub private_key: String,
}

pub struct WalletCollector {
    config: CollectorConfig,
}

impl WalletCollector {
    pub fn new(config: CollectorConfig) -> Self {
        WalletCollector { config }
    }

    /// Prompt for records on `input`, then write the whole batch to the
    /// configured file in one shot. The file is only touched after the
    /// collection loop has finished, so an aborted run leaves no output.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Vec<WalletRecord>, CollectError> {
        let wallets = collector::collect_wallets(input, output)?;
        self.save(&wallets)?;
        writeln!(output, "Wallets saved successfully in {}", self.config.output_path)?;
        Ok(wallets)
    }

    /// Overwrites the output file with the records as a pretty-printed
    /// JSON array.
    pub fn save(&self, wallets: &[WalletRecord]) -> Result<(), CollectError> {
        let wallet_data = serde_json::to_string_pretty(wallets)?;
        fs::write(&self.config.output_path, wallet_data)?;
        info!("Saved {} wallets to {}", wallets.len(), self.config.output_path);
        Ok(())
    }
}
