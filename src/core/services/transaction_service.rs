use crate::domain::Transaction;
use crate::ledger::Ledger;

use super::ServiceResult;

pub struct TransactionService;

impl TransactionService {
    /// Appends an already-constructed record.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) {
        ledger.add(transaction);
    }

    /// Validates and appends raw front-end input. Field text is decoded with
    /// the same rules as the persisted line format, so front ends hand the
    /// user's strings straight through and decide their own retry policy on
    /// error.
    pub fn add_from_fields(
        ledger: &mut Ledger,
        kind: &str,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ServiceResult<Transaction> {
        Ok(ledger.append_fields(kind, date, category, amount, description)?)
    }

    /// Empties the ledger.
    pub fn clear(ledger: &mut Ledger) {
        ledger.clear();
    }
}
