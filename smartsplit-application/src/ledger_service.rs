use crate::{
    error::{LedgerError, StoreError, ValidationError},
    ports::LedgerStore,
};
use rust_decimal::Decimal;
use smartsplit_domain::{Expense, Ledger, Money, ParticipantId, RemovedParticipant};
use std::str::FromStr;

/// Validated edits over a [`Ledger`], each accepted edit followed by a save.
///
/// A rejected edit leaves both the ledger and the store untouched. When the
/// save after an accepted edit fails, the in-memory ledger keeps the edit and
/// the failure is returned as [`LedgerError::Store`].
pub struct LedgerService<S> {
    ledger: Ledger,
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Loads the saved ledger, or starts empty when nothing was saved yet.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let ledger = store.load()?.unwrap_or_default();
        tracing::debug!(
            participant_count = ledger.participants().len(),
            expense_count = ledger.expenses().len(),
            "Ledger loaded"
        );
        Ok(Self { ledger, store })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, LedgerError> {
        let participant = self
            .ledger
            .add_participant(name)
            .map_err(ValidationError::from)?
            .clone();
        tracing::info!(participant = %participant, "Participant added");

        self.persist()?;
        Ok(participant)
    }

    /// Removes a participant by name, along with every expense they paid.
    pub fn remove_participant(&mut self, name: &str) -> Result<RemovedParticipant, LedgerError> {
        let removed = self
            .ledger
            .remove_participant(name)
            .map_err(ValidationError::from)?;
        self.finish_removal(removed)
    }

    /// Removes the participant at a zero-based roster position.
    pub fn remove_participant_at(
        &mut self,
        index: usize,
    ) -> Result<RemovedParticipant, LedgerError> {
        let removed = self
            .ledger
            .remove_participant_at(index)
            .map_err(ValidationError::from)?;
        self.finish_removal(removed)
    }

    fn finish_removal(
        &mut self,
        removed: RemovedParticipant,
    ) -> Result<RemovedParticipant, LedgerError> {
        tracing::info!(
            participant = %removed.participant,
            removed_expense_count = removed.removed_expenses.len(),
            "Participant removed"
        );

        self.persist()?;
        Ok(removed)
    }

    /// Records an expense from raw user input.
    ///
    /// Checks run in input order: payer selected, amount numeric and positive,
    /// description present, payer on the roster.
    pub fn add_expense(
        &mut self,
        payer: &str,
        amount: &str,
        description: &str,
    ) -> Result<Expense, LedgerError> {
        let payer = payer.trim();
        if payer.is_empty() {
            return Err(ValidationError::MissingPayer.into());
        }
        let amount = parse_amount(amount)?;
        let expense = Expense::try_new(ParticipantId::new(payer), amount, description.trim())
            .map_err(ValidationError::from)?;

        self.ledger
            .add_expense(expense.clone())
            .map_err(ValidationError::from)?;
        tracing::info!(
            payer = %expense.payer(),
            amount = %expense.amount(),
            description = expense.description(),
            "Expense added"
        );

        self.persist()?;
        Ok(expense)
    }

    /// Removes the expense at a zero-based position.
    pub fn remove_expense(&mut self, index: usize) -> Result<Expense, LedgerError> {
        let expense = self
            .ledger
            .remove_expense(index)
            .map_err(ValidationError::from)?;
        tracing::info!(
            index,
            description = expense.description(),
            "Expense removed"
        );

        self.persist()?;
        Ok(expense)
    }

    /// Clears the roster and every expense.
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        self.ledger.clear();
        tracing::info!("Ledger reset");

        self.persist()?;
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.ledger).inspect_err(|err| {
            tracing::error!(error = %err, "Failed to save ledger");
        })
    }
}

fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    let normalized: String = input.trim().chars().filter(|c| *c != ',').collect();
    let value = Decimal::from_str(&normalized).map_err(|_| ValidationError::InvalidAmount {
        input: input.to_string(),
    })?;
    let amount = Money::from_decimal(value);
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount { amount });
    }
    Ok(amount)
}
