//! Append-only flat-file trade log.
//!
//! Every successful strategy evaluation lands here as one CSV row:
//! timestamp, symbol, action, price. Rows are only ever appended; the
//! file is never rewritten, truncated, or deduplicated.

use csv::{ReaderBuilder, WriterBuilder};
use kumo_core::error::JournalError;
use kumo_core::types::{JournalEntry, TradeDecision};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat-file trade journal.
///
/// The backing file is created on first append. Each append opens the
/// file in append mode, writes one row, and flushes before returning,
/// so a row either fully lands or the append reports an error.
pub struct TradeJournal {
    path: PathBuf,
}

impl TradeJournal {
    /// Create a journal backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one decision, stamped with the current time.
    ///
    /// # Returns
    /// The entry as written, timestamp included
    pub fn append(&self, decision: &TradeDecision) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry::record(decision);
        self.append_entry(&entry)?;
        Ok(entry)
    }

    /// Append a pre-stamped entry.
    pub fn append_entry(&self, entry: &JournalEntry) -> Result<(), JournalError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .serialize(entry)
            .map_err(|e| JournalError::Encode(e.to_string()))?;
        writer.flush()?;

        debug!(
            "Journaled {} {} @ {}",
            entry.action, entry.symbol, entry.price
        );
        Ok(())
    }

    /// Read every row back, oldest first.
    ///
    /// A missing file reads as an empty journal.
    pub fn read_all(&self) -> Result<Vec<JournalEntry>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| JournalError::Decode(e.to_string()))?;

        let mut entries = Vec::new();
        for result in reader.deserialize() {
            let entry: JournalEntry = result.map_err(|e| JournalError::Decode(e.to_string()))?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
