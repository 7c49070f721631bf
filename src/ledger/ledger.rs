//! In-memory ledger of records with flat-file persistence.

use std::path::Path;

use crate::domain::{Transaction, TransactionKind};
use crate::errors::{FormatError, LedgerError};
use crate::utils::persistence;

use super::MonthlySummary;

/// Insertion-ordered collection of transactions. Duplicates are allowed. The
/// ledger owns its sequence exclusively; callers iterate borrowed records and
/// receive computed summaries, never mutable references into the sequence.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the sequence. Always succeeds.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Parses raw field text into a record and appends it, returning a copy
    /// of the stored record.
    pub fn append_fields(
        &mut self,
        kind: &str,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Transaction, FormatError> {
        let transaction = Transaction::from_fields(kind, date, category, amount, description)?;
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Empties the sequence. Always succeeds.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replaces the whole sequence with the decoded contents of `path`, in
    /// file order. All or nothing: records are staged into a separate vector
    /// and swapped in only once every line has decoded, so an unreadable file
    /// or a bad line leaves the current sequence untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        let staged = persistence::load_transactions_from_file(path.as_ref())?;
        self.transactions = staged;
        Ok(())
    }

    /// Writes every record in sequence order to `path`, one encoded line per
    /// record, overwriting prior contents in full. Read-only over the
    /// in-memory sequence.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        persistence::save_ledger_to_file(self, path.as_ref())
    }

    /// Computes totals and per-category sums over records whose ISO date
    /// starts with `month` (`YYYY-MM`). The argument is used purely as a text
    /// prefix and is not validated. Pure; the ledger is not mutated.
    pub fn summarize(&self, month: &str) -> MonthlySummary {
        let mut summary = MonthlySummary::new(month);
        for transaction in self.transactions.iter().filter(|t| t.month_matches(month)) {
            match transaction.kind() {
                TransactionKind::Income => {
                    summary.record_income(transaction.category(), transaction.amount())
                }
                TransactionKind::Expense => {
                    summary.record_expense(transaction.category(), transaction.amount())
                }
            }
        }
        summary.net_savings = summary.total_income - summary.total_expense;
        summary
    }
}
