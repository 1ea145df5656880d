use anyhow::{Context, Result};
use log::warn;
use std::io::{self, Write};

use wallet_collector::{CollectError, CollectorConfig, WalletCollector};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = CollectorConfig::from_env();
    let collector = WalletCollector::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match collector.run(&mut input, &mut output) {
        Ok(_) => Ok(()),
        Err(CollectError::InvalidCount { input: raw }) => {
            warn!("Count prompt got non-numeric input: {:?}", raw);
            writeln!(output, "Invalid input! Please enter a valid number.")?;
            Ok(())
        }
        Err(e) => Err(e).context("Failed to save wallets"),
    }
}
