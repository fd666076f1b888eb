use smartsplit_application::{LedgerStore, StoreError};
use smartsplit_domain::Ledger;
use std::sync::RwLock;

/// Keeps the last saved snapshot in memory.
#[derive(Default)]
pub struct InMemoryLedgerStore {
    snapshot: RwLock<Option<Ledger>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self) -> Result<Option<Ledger>, StoreError> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| StoreError::Malformed("in-memory snapshot lock poisoned".to_string()))?;
        Ok(snapshot.clone())
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|_| StoreError::Malformed("in-memory snapshot lock poisoned".to_string()))?;
        *snapshot = Some(ledger.clone());
        Ok(())
    }
}
