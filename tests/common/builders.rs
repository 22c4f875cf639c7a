//! Test builders — ergonomic constructors for dataset entries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

#![allow(unused)]

use risq_core::Dataset;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw dataset entries, producing the JSON shape the
/// loader consumes.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("4.16")
///     .description("Is a safety officer designated?")
///     .guide("Check the appointment letter.")
///     .action_e("Provide the letter.")
///     .build();
/// ```
pub struct EntryBuilder {
    entry: serde_json::Map<String, Value>,
}

impl EntryBuilder {
    pub fn new(no: impl Into<String>) -> Self {
        let mut entry = serde_json::Map::new();
        entry.insert("NO".to_string(), Value::String(no.into()));
        Self { entry }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.entry.insert("DESCRIPTION".to_string(), Value::String(text.into()));
        self
    }

    pub fn guide(mut self, text: impl Into<String>) -> Self {
        self.entry.insert("Guide".to_string(), Value::String(text.into()));
        self
    }

    pub fn action_e(mut self, text: impl Into<String>) -> Self {
        self.entry.insert("action(E)".to_string(), Value::String(text.into()));
        self
    }

    pub fn action_k(mut self, text: impl Into<String>) -> Self {
        self.entry.insert("action(K)".to_string(), Value::String(text.into()));
        self
    }

    /// Insert an arbitrary raw field, for schema-variation tests.
    pub fn raw_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entry.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> serde_json::Map<String, Value> {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Dataset helpers
// ---------------------------------------------------------------------------

/// Build a [`Dataset`] from entry builders.
pub fn dataset_of(entries: Vec<serde_json::Map<String, Value>>) -> Dataset {
    Dataset::from_entries(entries)
}

/// Build a dataset of `n` numbered records with generated field text.
pub fn build_corpus(n: usize) -> Dataset {
    let entries = (0..n)
        .map(|i| {
            EntryBuilder::new(format!("{}.{}", i / 10 + 1, i % 10 + 1))
                .description(format!("Is item {i} maintained as required?"))
                .guide(format!("Check the records for item {i}. Verify the logbook."))
                .action_e(format!("Provide evidence for item {i}."))
                .build()
        })
        .collect();
    Dataset::from_entries(entries)
}
