//! Flat JSON file holding every accepted update, newest first.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::types::UpdateRecord;
use crate::TARGET_STORE;

/// The persisted update list. Whole-file reads and writes, no locking.
pub struct UpdateStore {
    path: PathBuf,
}

impl UpdateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored records, or an empty list when the file does not exist yet.
    pub fn load(&self) -> Result<Vec<UpdateRecord>> {
        if !self.path.exists() {
            debug!(target: TARGET_STORE, "No store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records: Vec<UpdateRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        info!(target: TARGET_STORE, "Loaded {} existing updates from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrite the store with `records`, creating the parent directory if needed.
    pub fn save(&self, records: &[UpdateRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // serde_json leaves non-ASCII text unescaped.
        let json = serde_json::to_string_pretty(records).context("Failed to serialize updates")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(target: TARGET_STORE, "Wrote {} updates to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// The dedup key set for a loaded store.
pub fn known_urls(records: &[UpdateRecord]) -> HashSet<String> {
    records.iter().map(|record| record.url.clone()).collect()
}
