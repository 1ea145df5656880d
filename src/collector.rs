use log::debug;
use std::io::{self, BufRead, Write};

use crate::error::CollectError;
use crate::WalletRecord;

/// Runs the interactive prompt sequence and returns the collected records
/// in entry order. Nothing touches the filesystem here; the caller decides
/// what to do with the result.
pub fn collect_wallets<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<WalletRecord>, CollectError> {
    let count_line = prompt(input, output, "How many wallets do you want to save? ")?;
    let count: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| CollectError::InvalidCount { input: count_line.clone() })?;
    debug!("Collecting {} wallets", count);

    // A non-positive count simply collects nothing.
    let mut wallets = Vec::new();
    for i in 1..=count {
        writeln!(output, "Enter details for wallet {}:", i)?;
        let address = prompt(input, output, "Address: ")?;
        let private_key = prompt(input, output, "Private Key: ")?;
        wallets.push(WalletRecord { address, private_key });
    }

    Ok(wallets)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, CollectError> {
    write!(output, "{}", label)?;
    output.flush()?;
    read_answer(input)
}

/// Reads one line, stripping only the trailing `\n` / `\r\n`. Everything
/// else the user typed, including surrounding whitespace, is kept as is.
fn read_answer<R: BufRead>(input: &mut R) -> Result<String, CollectError> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the prompt was answered",
        )
        .into());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
