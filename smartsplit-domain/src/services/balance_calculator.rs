use crate::model::{BalanceSheet, Expense, MemberBalances, Money, ParticipantId};
use thiserror::Error;

/// Minimum roster size for an equal split to be meaningful.
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("at least two participants are required (found {found})")]
    NotEnoughParticipants { found: usize },
    #[error("there are no expenses to settle")]
    NoExpenses,
    #[error("expense payer '{payer}' is not in the roster")]
    UnknownPayer { payer: String },
}

/// Equal-split balance computation
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Compute net balances for an equal split of every expense.
    ///
    /// Positive balances are owed money, negative balances owe money. Every
    /// participant appears in the result, in roster order, even if they paid
    /// nothing. The per-person share is not rounded.
    ///
    /// # Errors
    /// Fails fast with [`PreconditionError`] when fewer than two participants
    /// are given, when there are no expenses, or when an expense names a payer
    /// outside `participants`.
    pub fn compute(
        &self,
        participants: &[ParticipantId],
        expenses: &[Expense],
    ) -> Result<BalanceSheet, PreconditionError> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(PreconditionError::NotEnoughParticipants {
                found: participants.len(),
            });
        }
        if expenses.is_empty() {
            return Err(PreconditionError::NoExpenses);
        }

        let mut balances: MemberBalances = participants
            .iter()
            .cloned()
            .map(|participant| (participant, Money::zero()))
            .collect();

        let mut total = Money::zero();
        for expense in expenses {
            let Some(balance) = balances.get_mut(expense.payer().as_str()) else {
                return Err(PreconditionError::UnknownPayer {
                    payer: expense.payer().to_string(),
                });
            };
            *balance += expense.amount();
            total += expense.amount();
        }

        let per_person = total / balances.len();
        for balance in balances.values_mut() {
            *balance -= per_person;
        }

        tracing::debug!(
            participant_count = balances.len(),
            expense_count = expenses.len(),
            total = %total,
            per_person = %per_person,
            "Balances computed"
        );

        Ok(BalanceSheet {
            balances,
            total,
            per_person,
        })
    }
}
