use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ppdb_schema::RegistrationRecord;

pub mod summary;
pub mod validate;
pub mod wilayah;

pub(crate) fn load_record(path: &Path) -> Result<RegistrationRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("record file {} is not valid JSON", path.display()))
}
