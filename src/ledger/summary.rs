//! Aggregates computed by the monthly summary.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a monthly summary: running totals and per-category sums for both
/// kinds, plus net savings (income minus expense). Category keys are
/// case-sensitive and the maps are unordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total_income: f64,
    pub income_by_category: HashMap<String, f64>,
    pub total_expense: f64,
    pub expense_by_category: HashMap<String, f64>,
    pub net_savings: f64,
}

impl MonthlySummary {
    pub(crate) fn new(month: &str) -> Self {
        Self {
            month: month.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn record_income(&mut self, category: &str, amount: f64) {
        self.total_income += amount;
        *self
            .income_by_category
            .entry(category.to_string())
            .or_insert(0.0) += amount;
    }

    pub(crate) fn record_expense(&mut self, category: &str, amount: f64) {
        self.total_expense += amount;
        *self
            .expense_by_category
            .entry(category.to_string())
            .or_insert(0.0) += amount;
    }
}

impl fmt::Display for MonthlySummary {
    /// Renders the classic report block. Category lines are sorted by name so
    /// the output is deterministic despite the unordered maps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary for {} ---", self.month)?;
        writeln!(f, "Total Income: ${}", self.total_income)?;
        for (category, amount) in sorted_entries(&self.income_by_category) {
            writeln!(f, "  {}: ${}", category, amount)?;
        }
        writeln!(f, "Total Expense: ${}", self.total_expense)?;
        for (category, amount) in sorted_entries(&self.expense_by_category) {
            writeln!(f, "  {}: ${}", category, amount)?;
        }
        write!(f, "Net Savings: ${}", self.net_savings)
    }
}

fn sorted_entries(map: &HashMap<String, f64>) -> Vec<(&String, &f64)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
