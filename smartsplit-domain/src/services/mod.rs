pub mod balance_calculator;
pub mod settlement_planner;
pub mod settlement_rounding;

pub use balance_calculator::{BalanceCalculator, MIN_PARTICIPANTS, PreconditionError};
pub use settlement_planner::{SettlementPlanner, settlement_epsilon};
pub use settlement_rounding::{DisplayContext, RoundedPlan, RoundingMode, round_plan};
