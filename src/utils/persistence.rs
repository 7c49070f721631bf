use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{domain::Transaction, errors::LedgerError, ledger::Ledger};

/// Writes the provided ledger to disk atomically by staging to a temporary
/// file, one encoded record line per record.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let mut file = File::create(&tmp)?;
    for transaction in ledger.iter() {
        writeln!(file, "{transaction}")?;
    }
    file.flush()?;
    fs::rename(tmp, path)?;
    tracing::debug!(path = %path.display(), records = ledger.len(), "ledger saved");
    Ok(())
}

/// Reads one record per line from disk, returning structured errors on
/// failure. The whole file must decode; no partial sequence escapes. The file
/// handle is released on every exit path, including a decode failure
/// mid-read.
pub fn load_transactions_from_file(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut transactions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        transactions.push(line.parse::<Transaction>()?);
    }
    tracing::debug!(path = %path.display(), records = transactions.len(), "ledger loaded");
    Ok(transactions)
}
