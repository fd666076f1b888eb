use smartsplit_domain::{LedgerEditError, Money};
use thiserror::Error;

/// Rejected user input. Nothing is mutated or persisted when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("participant name is empty")]
    EmptyName,
    #[error("participant '{name}' already exists")]
    DuplicateParticipant { name: String },
    #[error("participant '{name}' does not exist")]
    UnknownParticipant { name: String },
    #[error("there is no participant number {number}")]
    ParticipantIndexOutOfRange { number: usize },
    #[error("no payer was selected")]
    MissingPayer,
    #[error("payer '{payer}' is not a participant")]
    UnknownPayer { payer: String },
    #[error("'{input}' is not a valid amount")]
    InvalidAmount { input: String },
    #[error("amount must be greater than zero (got {amount})")]
    NonPositiveAmount { amount: Money },
    #[error("amount {amount} exceeds the limit of {max}")]
    AmountTooLarge { amount: Money, max: Money },
    #[error("description is empty")]
    EmptyDescription,
    #[error("there is no expense number {number}")]
    ExpenseIndexOutOfRange { number: usize },
}

impl From<LedgerEditError> for ValidationError {
    fn from(err: LedgerEditError) -> Self {
        match err {
            LedgerEditError::EmptyName => ValidationError::EmptyName,
            LedgerEditError::DuplicateParticipant { name } => {
                ValidationError::DuplicateParticipant { name }
            }
            LedgerEditError::UnknownParticipant { name } => {
                ValidationError::UnknownParticipant { name }
            }
            LedgerEditError::ParticipantIndexOutOfRange { index, .. } => {
                ValidationError::ParticipantIndexOutOfRange {
                    number: index.saturating_add(1),
                }
            }
            LedgerEditError::UnknownPayer { payer } => ValidationError::UnknownPayer { payer },
            LedgerEditError::NonPositiveAmount { amount } => {
                ValidationError::NonPositiveAmount { amount }
            }
            LedgerEditError::AmountTooLarge { amount, max } => {
                ValidationError::AmountTooLarge { amount, max }
            }
            LedgerEditError::EmptyDescription => ValidationError::EmptyDescription,
            LedgerEditError::ExpenseIndexOutOfRange { index, .. } => {
                ValidationError::ExpenseIndexOutOfRange {
                    number: index.saturating_add(1),
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is malformed: {0}")]
    Malformed(String),
    #[error("snapshot violates ledger rules: {0}")]
    InvalidSnapshot(#[from] LedgerEditError),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to save ledger: {0}")]
    Store(#[from] StoreError),
}
