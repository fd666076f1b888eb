use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smartsplit_application::{LedgerStore, StoreError};
use smartsplit_domain::{Expense, Ledger, Money, ParticipantId};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// On-disk snapshot: one sequence of participant names, one of expense records.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotRecord {
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRecord {
    payer: String,
    amount: Decimal,
    description: String,
}

impl From<&Ledger> for SnapshotRecord {
    fn from(ledger: &Ledger) -> Self {
        Self {
            participants: ledger
                .participants()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            expenses: ledger
                .expenses()
                .iter()
                .map(|expense| ExpenseRecord {
                    payer: expense.payer().as_str().to_string(),
                    amount: expense.amount().as_decimal(),
                    description: expense.description().to_string(),
                })
                .collect(),
        }
    }
}

impl TryFrom<SnapshotRecord> for Ledger {
    type Error = StoreError;

    fn try_from(record: SnapshotRecord) -> Result<Self, Self::Error> {
        let participants = record
            .participants
            .into_iter()
            .map(ParticipantId::new)
            .collect();
        let expenses = record
            .expenses
            .into_iter()
            .map(|expense| {
                Expense::try_new(
                    ParticipantId::new(expense.payer),
                    Money::from_decimal(expense.amount),
                    expense.description,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ledger::try_from_parts(participants, expenses)?)
    }
}

/// Stores the ledger as a JSON document at a fixed path.
pub struct JsonFileLedgerStore {
    path: PathBuf,
}

impl JsonFileLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LedgerStore for JsonFileLedgerStore {
    fn load(&self) -> Result<Option<Ledger>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No ledger snapshot found");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let record: SnapshotRecord = serde_json::from_str(&content).map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "Malformed ledger snapshot");
            StoreError::Malformed(err.to_string())
        })?;

        Ledger::try_from(record).map(Some)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let record = SnapshotRecord::from(ledger);
        let content = serde_json::to_string_pretty(&record)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            participant_count = record.participants.len(),
            expense_count = record.expenses.len(),
            "Ledger snapshot saved"
        );
        Ok(())
    }
}
