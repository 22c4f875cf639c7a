//! Dataset loader — builds the immutable in-memory [`Dataset`] from a JSON
//! file at startup.
//!
//! Field names shift between dataset schema revisions (`"DESCRIPTION"` vs
//! `"Description"`, a single `"Action"` blob vs split `"action(E)"` /
//! `"action(K)"`). Rather than one loader per revision, every raw field name
//! is trimmed, lowercased, and looked up in a single static synonym table
//! mapping it onto a canonical slot.
//!
//! Load failure (unreadable or malformed file) is fatal; nothing after a
//! successful load can fail.

use crate::types::Record;
use phf::phf_map;
use std::collections::HashMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Field-name synonyms
// ---------------------------------------------------------------------------

/// Canonical slot a raw field name maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Id,
    Description,
    Guide,
    ActionE,
    ActionK,
}

/// Raw field name (trimmed, lowercased) → canonical slot. Covers every
/// schema revision seen so far; a combined `Action` blob lands in the
/// English action slot.
static FIELD_SLOTS: phf::Map<&'static str, Slot> = phf_map! {
    "no" => Slot::Id,
    "description" => Slot::Description,
    "guide" => Slot::Guide,
    "action" => Slot::ActionE,
    "action(e)" => Slot::ActionE,
    "action(k)" => Slot::ActionK,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Startup load failure. Both variants are fatal — no query path can
/// function without the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// The immutable, insertion-ordered record mapping built once at startup.
///
/// Keyword search scans records in insertion order, so the dataset keeps a
/// `Vec` as the source of truth with a side index for exact-identifier
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Load and normalise the dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse and normalise a dataset from raw JSON text — an array of
    /// objects whose field names may come from any schema revision.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    /// Normalise a sequence of raw field-name-to-value mappings.
    ///
    /// Entries without an identifier are silently dropped. Duplicate
    /// identifiers: the last entry wins, replacing the earlier record in
    /// place so insertion order stays stable.
    pub fn from_entries(
        entries: Vec<serde_json::Map<String, serde_json::Value>>,
    ) -> Self {
        let mut dataset = Dataset::default();

        for entry in entries {
            let mut record = Record {
                no: String::new(),
                description: String::new(),
                guide: String::new(),
                action_e: String::new(),
                action_k: String::new(),
            };

            for (name, value) in &entry {
                let Some(slot) = FIELD_SLOTS.get(name.trim().to_ascii_lowercase().as_str())
                else {
                    continue;
                };
                // Non-string values are tolerated and skipped, like missing
                // fields.
                let Some(text) = value.as_str() else { continue };
                let text = text.trim().to_string();
                match slot {
                    Slot::Id => record.no = text,
                    Slot::Description => record.description = text,
                    Slot::Guide => record.guide = text,
                    Slot::ActionE => record.action_e = text,
                    Slot::ActionK => record.action_k = text,
                }
            }

            if record.no.is_empty() {
                tracing::debug!("dropping entry without identifier");
                continue;
            }

            match dataset.index.get(&record.no) {
                Some(&pos) => {
                    tracing::debug!(no = %record.no, "duplicate identifier, last entry wins");
                    dataset.records[pos] = record;
                }
                None => {
                    dataset.index.insert(record.no.clone(), dataset.records.len());
                    dataset.records.push(record);
                }
            }
        }

        dataset
    }

    /// Exact-identifier lookup. String equality only — no trimming, no
    /// fuzzy matching.
    pub fn get(&self, no: &str) -> Option<&Record> {
        self.index.get(no).map(|&pos| &self.records[pos])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
