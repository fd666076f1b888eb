use crate::error::StoreError;
use smartsplit_domain::Ledger;

/// Persistent snapshot of the roster and expense list.
pub trait LedgerStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Ledger>, StoreError>;

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> Result<Option<Ledger>, StoreError> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        (**self).save(ledger)
    }
}
