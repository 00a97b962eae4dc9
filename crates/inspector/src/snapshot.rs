use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a JSON array of records
pub fn records_from_json<R: DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    serde_json::from_str(json).context("Failed to parse records")
}

/// Load a JSON array of records from a snapshot file
///
/// The snapshot stands in for whatever enumerates the assets: a list of
/// texture settings or build profiles, one object per row.
pub fn load_records<R: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<R>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records: Vec<R> = records_from_json(&json)
        .with_context(|| format!("Invalid records in {}", path.display()))?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
