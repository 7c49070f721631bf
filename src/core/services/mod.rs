pub mod summary_service;
pub mod transaction_service;

pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::{FormatError, LedgerError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl From<FormatError> for ServiceError {
    fn from(err: FormatError) -> Self {
        ServiceError::Ledger(LedgerError::Format(err))
    }
}
