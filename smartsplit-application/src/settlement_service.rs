use crate::model::SettlementResult;
use smartsplit_domain::{BalanceCalculator, Ledger, PreconditionError, SettlementPlanner};

/// Runs balance computation and settlement planning over a ledger snapshot.
pub struct SettlementService {
    calculator: BalanceCalculator,
    planner: SettlementPlanner,
}

impl SettlementService {
    pub fn new() -> Self {
        Self {
            calculator: BalanceCalculator,
            planner: SettlementPlanner,
        }
    }

    pub fn settle(&self, ledger: &Ledger) -> Result<SettlementResult, PreconditionError> {
        let sheet = self
            .calculator
            .compute(ledger.participants(), ledger.expenses())
            .inspect_err(|err| {
                tracing::info!(reason = %err, "Settlement skipped");
            })?;
        let transfers = self.planner.plan(&sheet.balances);

        tracing::info!(
            participant_count = sheet.balances.len(),
            total = %sheet.total,
            transfer_count = transfers.len(),
            "Settlement calculated"
        );

        Ok(SettlementResult { sheet, transfers })
    }
}

impl Default for SettlementService {
    fn default() -> Self {
        Self::new()
    }
}
