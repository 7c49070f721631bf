//! Domain model for ledger records and their persisted line format.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Field separator of the persisted line format.
pub const FIELD_SEPARATOR: char = ',';

const FIELD_COUNT: usize = 5;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the two classifications of a ledger record.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Classifies raw kind text. `"income"` in any casing is income; every
    /// other value counts as an expense.
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("income") {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn is_income(self) -> bool {
        matches!(self, TransactionKind::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// One ledger record. Immutable after construction; fields are read through
/// accessors and the sequence owning the record never hands out mutable
/// references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    date: NaiveDate,
    category: String,
    amount: f64,
    description: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Builds a record from raw field text, as entered by a front end.
    pub fn from_fields(
        kind: &str,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, FormatError> {
        let parsed_date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| FormatError::InvalidDate(date.to_string()))?;
        let parsed_amount: f64 = amount
            .parse()
            .map_err(|_| FormatError::InvalidAmount(amount.to_string()))?;
        if !parsed_amount.is_finite() {
            return Err(FormatError::InvalidAmount(amount.to_string()));
        }
        Ok(Self::new(
            TransactionKind::classify(kind),
            parsed_date,
            category,
            parsed_amount,
            description,
        ))
    }

    /// Decodes one persisted line. The split is limited to five parts, so the
    /// description absorbs any remaining separators. That quirk is part of
    /// the on-disk format and existing files rely on it.
    pub fn from_line(line: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
        if parts.len() < FIELD_COUNT {
            return Err(FormatError::FieldCount(parts.len()));
        }
        Self::from_fields(parts[0], parts[1], parts[2], parts[3], parts[4])
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Text-prefix match of the record's ISO date against a `YYYY-MM` query.
    /// Deliberately not calendar-aware.
    pub fn month_matches(&self, month: &str) -> bool {
        self.date
            .format(DATE_FORMAT)
            .to_string()
            .starts_with(month)
    }
}

impl fmt::Display for Transaction {
    /// Encodes the record as its persisted line. No escaping is performed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{kind}{sep}{date}{sep}{category}{sep}{amount}{sep}{description}",
            kind = self.kind,
            date = self.date.format(DATE_FORMAT),
            category = self.category,
            amount = self.amount,
            description = self.description,
            sep = FIELD_SEPARATOR,
        )
    }
}

impl FromStr for Transaction {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}
