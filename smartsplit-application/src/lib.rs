#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger_service;
pub mod model;
pub mod ports;
pub mod settlement_service;

pub use error::{LedgerError, StoreError, ValidationError};
pub use ledger_service::LedgerService;
pub use model::SettlementResult;
pub use ports::LedgerStore;
pub use settlement_service::SettlementService;
pub use smartsplit_domain::RemovedParticipant;
