use smartsplit_domain::{BalanceSheet, Transfer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    pub sheet: BalanceSheet,
    /// Unrounded transfers; display rounding is applied by the presenter.
    pub transfers: Vec<Transfer>,
}
