#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    BalanceSheet, Expense, Ledger, LedgerEditError, MemberBalances, Money, ParticipantId,
    RemovedParticipant, Transfer, balance_drift, is_zero_sum, max_expense_amount,
};
pub use services::{
    BalanceCalculator, DisplayContext, PreconditionError, RoundedPlan, RoundingMode,
    SettlementPlanner, round_plan, settlement_epsilon,
};
