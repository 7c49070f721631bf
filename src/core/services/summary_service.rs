use crate::ledger::{Ledger, MonthlySummary};

pub struct SummaryService;

impl SummaryService {
    /// Computes the monthly summary for a `YYYY-MM` query over the ledger.
    pub fn monthly(ledger: &Ledger, month: &str) -> MonthlySummary {
        ledger.summarize(month)
    }
}
