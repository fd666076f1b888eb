#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod ledger_presenter;
pub mod settlement_presenter;

pub use error_presenter::{format_precondition_error, format_validation_error};
pub use ledger_presenter::LedgerPresenter;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
