//! Transient draft slot used by the print view.

use std::collections::BTreeMap;

use ppdb_schema::RegistrationRecord;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while moving a record in or out of a draft slot.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("draft could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Key-value slot holding a record verbatim; reading a slot back yields the
/// identical record, with no schema translation at this boundary.
pub trait DraftStore {
    fn save(&mut self, key: &str, record: &RegistrationRecord) -> Result<(), DraftError>;
    fn load(&self, key: &str) -> Result<Option<RegistrationRecord>, DraftError>;
    fn remove(&mut self, key: &str);
}

/// The in-memory slot the wizard uses; drafts die with the process.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slots: BTreeMap<String, Value>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&mut self, key: &str, record: &RegistrationRecord) -> Result<(), DraftError> {
        let value = serde_json::to_value(record).map_err(DraftError::Encode)?;
        self.slots.insert(key.to_string(), value);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<RegistrationRecord>, DraftError> {
        self.slots
            .get(key)
            .map(|value| serde_json::from_value(value.clone()).map_err(DraftError::Decode))
            .transpose()
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
