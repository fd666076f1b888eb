use crate::model::{MemberBalances, Money, ParticipantId, Transfer, balance_drift, is_zero_sum};

/// Balances within this distance of zero count as settled.
pub fn settlement_epsilon() -> Money {
    Money::new(1, 2)
}

struct OpenBalance<'a> {
    id: &'a ParticipantId,
    amount: Money,
}

/// Greedy debt simplification
///
/// Matches the largest remaining debt against the largest remaining credit.
/// Not transaction-count optimal for every input, but deterministic and never
/// emits more than `debtors + creditors - 1` transfers.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plan the transfers that bring every balance within epsilon of zero.
    ///
    /// `balances` must sum to approximately zero. Ties between equal balances
    /// keep the iteration order of `balances`.
    pub fn plan(&self, balances: &MemberBalances) -> Vec<Transfer> {
        let epsilon = settlement_epsilon();

        if !is_zero_sum(balances) {
            tracing::warn!(
                member_count = balances.len(),
                drift = %balance_drift(balances),
                "Planning settlement for balances that do not sum to zero"
            );
        }
        debug_assert!(is_zero_sum(balances), "balances must sum to zero");

        let mut debtors: Vec<OpenBalance<'_>> = Vec::new();
        let mut creditors: Vec<OpenBalance<'_>> = Vec::new();
        for (id, &amount) in balances {
            if amount < -epsilon {
                debtors.push(OpenBalance { id, amount });
            } else if amount > epsilon {
                creditors.push(OpenBalance { id, amount });
            }
        }

        debtors.sort_by(|a, b| a.amount.cmp(&b.amount));
        creditors.sort_by(|a, b| b.amount.cmp(&a.amount));

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &mut debtors[debtor_idx];
            let creditor = &mut creditors[creditor_idx];
            let amount = (-debtor.amount).min(creditor.amount);

            let transferred = amount > epsilon;
            if transferred {
                transfers.push(Transfer {
                    from: debtor.id.clone(),
                    to: creditor.id.clone(),
                    amount,
                });
                debtor.amount += amount;
                creditor.amount -= amount;
            }

            let debtor_settled = debtor.amount.abs() < epsilon;
            let creditor_settled = creditor.amount.abs() < epsilon;
            if debtor_settled {
                debtor_idx += 1;
            }
            if creditor_settled {
                creditor_idx += 1;
            }

            if !transferred && !debtor_settled && !creditor_settled {
                tracing::warn!(
                    debtor = %debtor.id,
                    debtor_remaining = %debtor.amount,
                    creditor = %creditor.id,
                    creditor_remaining = %creditor.amount,
                    "Settlement planning stalled; stopping with residual balances"
                );
                break;
            }
        }

        if debtor_idx < debtors.len() || creditor_idx < creditors.len() {
            tracing::warn!(
                open_debtors = debtors.len() - debtor_idx.min(debtors.len()),
                open_creditors = creditors.len() - creditor_idx.min(creditors.len()),
                "Settlement planning finished with unmatched balances"
            );
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            "Settlement planned"
        );

        transfers
    }
}
