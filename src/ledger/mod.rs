mod ledger;
mod summary;

pub use ledger::Ledger;
pub use summary::MonthlySummary;
