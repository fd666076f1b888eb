use fxhash::FxHashSet;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::{
    borrow::Borrow,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};
use thiserror::Error;

/// Net balance per participant, in roster order.
pub type MemberBalances = IndexMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Div<usize> for Money {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Self(self.0 / Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerEditError {
    #[error("participant name is empty")]
    EmptyName,
    #[error("participant '{name}' already exists")]
    DuplicateParticipant { name: String },
    #[error("participant '{name}' does not exist")]
    UnknownParticipant { name: String },
    #[error("participant index {index} is out of range (len {len})")]
    ParticipantIndexOutOfRange { index: usize, len: usize },
    #[error("payer '{payer}' is not a participant")]
    UnknownPayer { payer: String },
    #[error("amount must be greater than zero (got {amount})")]
    NonPositiveAmount { amount: Money },
    #[error("amount {amount} exceeds the limit of {max}")]
    AmountTooLarge { amount: Money, max: Money },
    #[error("description is empty")]
    EmptyDescription,
    #[error("expense index {index} is out of range (len {len})")]
    ExpenseIndexOutOfRange { index: usize, len: usize },
}

/// Largest amount a single expense may carry; ledger sums stay well inside
/// the range of `Decimal`.
pub fn max_expense_amount() -> Money {
    Money::from_i64(1_000_000_000_000_000)
}

/// An expense paid by one participant on behalf of the whole group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    payer: ParticipantId,
    amount: Money,
    description: String,
}

impl Expense {
    /// Builds an expense, checking the amount range and description.
    ///
    /// Payer membership is checked when the expense is added to a [`Ledger`].
    pub fn try_new(
        payer: ParticipantId,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<Self, LedgerEditError> {
        if !amount.is_positive() {
            return Err(LedgerEditError::NonPositiveAmount { amount });
        }
        let max = max_expense_amount();
        if amount > max {
            return Err(LedgerEditError::AmountTooLarge { amount, max });
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(LedgerEditError::EmptyDescription);
        }
        Ok(Self {
            payer,
            amount,
            description,
        })
    }

    pub fn payer(&self) -> &ParticipantId {
        &self.payer
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A participant removed from the roster together with the expenses they paid.
#[derive(Debug, PartialEq, Eq)]
pub struct RemovedParticipant {
    pub participant: ParticipantId,
    pub removed_expenses: Vec<Expense>,
}

/// Roster and expense list; the only persistent state of a settlement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    participants: Vec<ParticipantId>,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from raw parts, enforcing every ledger invariant.
    pub fn try_from_parts(
        participants: Vec<ParticipantId>,
        expenses: Vec<Expense>,
    ) -> Result<Self, LedgerEditError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for participant in &participants {
            if participant.as_str().trim().is_empty() {
                return Err(LedgerEditError::EmptyName);
            }
            if !seen.insert(participant.as_str()) {
                return Err(LedgerEditError::DuplicateParticipant {
                    name: participant.to_string(),
                });
            }
        }
        if let Some(orphan) = expenses
            .iter()
            .find(|expense| !seen.contains(expense.payer.as_str()))
        {
            return Err(LedgerEditError::UnknownPayer {
                payer: orphan.payer.to_string(),
            });
        }

        Ok(Self {
            participants,
            expenses,
        })
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.expenses.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ParticipantId>, Vec<Expense>) {
        (self.participants, self.expenses)
    }

    pub fn add_participant(&mut self, name: &str) -> Result<&ParticipantId, LedgerEditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerEditError::EmptyName);
        }
        if self.contains(name) {
            return Err(LedgerEditError::DuplicateParticipant {
                name: name.to_string(),
            });
        }
        self.participants.push(ParticipantId::new(name));
        Ok(&self.participants[self.participants.len() - 1])
    }

    pub fn remove_participant(
        &mut self,
        name: &str,
    ) -> Result<RemovedParticipant, LedgerEditError> {
        let Some(index) = self.participants.iter().position(|p| p.as_str() == name) else {
            return Err(LedgerEditError::UnknownParticipant {
                name: name.to_string(),
            });
        };
        Ok(self.remove_participant_unchecked(index))
    }

    pub fn remove_participant_at(
        &mut self,
        index: usize,
    ) -> Result<RemovedParticipant, LedgerEditError> {
        if index >= self.participants.len() {
            return Err(LedgerEditError::ParticipantIndexOutOfRange {
                index,
                len: self.participants.len(),
            });
        }
        Ok(self.remove_participant_unchecked(index))
    }

    fn remove_participant_unchecked(&mut self, index: usize) -> RemovedParticipant {
        let participant = self.participants.remove(index);
        let (removed_expenses, kept): (Vec<Expense>, Vec<Expense>) = self
            .expenses
            .drain(..)
            .partition(|expense| expense.payer == participant);
        self.expenses = kept;

        RemovedParticipant {
            participant,
            removed_expenses,
        }
    }

    pub fn add_expense(&mut self, expense: Expense) -> Result<(), LedgerEditError> {
        if !self.contains(expense.payer.as_str()) {
            return Err(LedgerEditError::UnknownPayer {
                payer: expense.payer.to_string(),
            });
        }
        self.expenses.push(expense);
        Ok(())
    }

    pub fn remove_expense(&mut self, index: usize) -> Result<Expense, LedgerEditError> {
        if index >= self.expenses.len() {
            return Err(LedgerEditError::ExpenseIndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    pub fn clear(&mut self) {
        self.participants.clear();
        self.expenses.clear();
    }
}

/// Balances produced from a roster and its expenses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet {
    pub balances: MemberBalances,
    pub total: Money,
    pub per_person: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

/// Relative tolerance for the zero-sum check on computed balances.
const ZERO_SUM_RELATIVE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Sum of all balances; zero for a consistent balance table.
pub fn balance_drift(balances: &MemberBalances) -> Money {
    balances.values().sum()
}

/// Checks that balances sum to zero within a relative tolerance of their magnitude.
pub fn is_zero_sum(balances: &MemberBalances) -> bool {
    let magnitude: Decimal = balances.values().map(|b| b.abs().as_decimal()).sum();
    let tolerance = ZERO_SUM_RELATIVE_TOLERANCE * magnitude.max(Decimal::ONE);
    balance_drift(balances).abs().as_decimal() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice").expect("add Alice");
        ledger.add_participant("Bob").expect("add Bob");
        ledger
            .add_expense(expense("Alice", 300, "fuel"))
            .expect("add expense");
        ledger
            .add_expense(expense("Bob", 120, "toll"))
            .expect("add expense");
        ledger
            .add_expense(expense("Alice", 80, "snacks"))
            .expect("add expense");
        ledger
    }

    fn expense(payer: &str, amount: i64, description: &str) -> Expense {
        Expense::try_new(ParticipantId::new(payer), Money::from_i64(amount), description)
            .expect("valid expense")
    }

    #[rstest]
    #[case::empty("", LedgerEditError::EmptyName)]
    #[case::blank("   ", LedgerEditError::EmptyName)]
    #[case::duplicate("Alice", LedgerEditError::DuplicateParticipant { name: "Alice".to_string() })]
    #[case::duplicate_after_trim(
        "  Bob ",
        LedgerEditError::DuplicateParticipant { name: "Bob".to_string() }
    )]
    fn add_participant_rejects_invalid_names(
        mut ledger: Ledger,
        #[case] name: &str,
        #[case] expected: LedgerEditError,
    ) {
        let before = ledger.clone();
        assert_eq!(ledger.add_participant(name), Err(expected));
        assert_eq!(ledger, before);
    }

    #[rstest]
    fn participant_names_are_case_sensitive(mut ledger: Ledger) {
        ledger.add_participant("alice").expect("distinct name");
        assert_eq!(ledger.participants().len(), 3);
    }

    #[rstest]
    fn removing_participant_cascades_to_their_expenses(mut ledger: Ledger) {
        let removed = ledger.remove_participant("Alice").expect("remove Alice");

        assert_eq!(removed.participant, ParticipantId::new("Alice"));
        assert_eq!(removed.removed_expenses.len(), 2);
        assert_eq!(ledger.participants(), &[ParticipantId::new("Bob")]);
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].description(), "toll");
    }

    #[rstest]
    fn remove_participant_at_checks_bounds(mut ledger: Ledger) {
        assert_eq!(
            ledger.remove_participant_at(2),
            Err(LedgerEditError::ParticipantIndexOutOfRange { index: 2, len: 2 })
        );
        let removed = ledger.remove_participant_at(1).expect("remove Bob");
        assert_eq!(removed.participant.as_str(), "Bob");
    }

    #[rstest]
    fn add_expense_requires_known_payer(mut ledger: Ledger) {
        let result = ledger.add_expense(expense("Carol", 10, "x"));
        assert_eq!(
            result,
            Err(LedgerEditError::UnknownPayer {
                payer: "Carol".to_string()
            })
        );
        assert_eq!(ledger.expenses().len(), 3);
    }

    #[rstest]
    #[case::zero(Money::ZERO, "x")]
    #[case::negative(Money::from_i64(-5), "x")]
    fn expense_rejects_non_positive_amount(#[case] amount: Money, #[case] description: &str) {
        assert_eq!(
            Expense::try_new(ParticipantId::new("Alice"), amount, description),
            Err(LedgerEditError::NonPositiveAmount { amount })
        );
    }

    #[test]
    fn expense_amount_is_capped() {
        let max = max_expense_amount();
        assert!(Expense::try_new(ParticipantId::new("Alice"), max, "x").is_ok());

        let amount = max + Money::new(1, 2);
        assert_eq!(
            Expense::try_new(ParticipantId::new("Alice"), amount, "x"),
            Err(LedgerEditError::AmountTooLarge { amount, max })
        );
    }

    #[test]
    fn expense_rejects_blank_description() {
        assert_eq!(
            Expense::try_new(ParticipantId::new("Alice"), Money::from_i64(1), "  "),
            Err(LedgerEditError::EmptyDescription)
        );
    }

    #[rstest]
    fn remove_expense_by_index(mut ledger: Ledger) {
        let removed = ledger.remove_expense(1).expect("remove toll");
        assert_eq!(removed.description(), "toll");
        assert_eq!(
            ledger.remove_expense(5),
            Err(LedgerEditError::ExpenseIndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[rstest]
    fn try_from_parts_rejects_orphaned_expense(ledger: Ledger) {
        let (mut participants, expenses) = ledger.into_parts();
        participants.retain(|p| p.as_str() != "Bob");

        assert_eq!(
            Ledger::try_from_parts(participants, expenses),
            Err(LedgerEditError::UnknownPayer {
                payer: "Bob".to_string()
            })
        );
    }

    #[test]
    fn try_from_parts_rejects_duplicates() {
        let participants = vec![ParticipantId::new("A"), ParticipantId::new("A")];
        assert_eq!(
            Ledger::try_from_parts(participants, Vec::new()),
            Err(LedgerEditError::DuplicateParticipant {
                name: "A".to_string()
            })
        );
    }

    #[rstest]
    fn clear_empties_ledger(mut ledger: Ledger) {
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn money_display_drops_trailing_zeros() {
        assert_eq!(Money::new(12_500, 2).to_string(), "125");
        assert_eq!(Money::new(-3_330, 3).to_string(), "-3.33");
    }

    #[test]
    fn zero_sum_check_tolerates_division_residue() {
        let third = Money::from_i64(10) / 3;
        let balances = MemberBalances::from_iter([
            (ParticipantId::new("A"), Money::from_i64(10) - third),
            (ParticipantId::new("B"), -third),
            (ParticipantId::new("C"), -third),
        ]);
        assert!(is_zero_sum(&balances));

        let skewed = MemberBalances::from_iter([
            (ParticipantId::new("A"), Money::from_i64(10)),
            (ParticipantId::new("B"), Money::from_i64(-9)),
        ]);
        assert!(!is_zero_sum(&skewed));
    }
}
