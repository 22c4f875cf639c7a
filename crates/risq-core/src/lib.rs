//! risq-core — RISQ mapper core library.
//!
//! This crate holds everything UI-independent: the dataset loader, the query
//! engine, and the two filesystem collaborators (document store, feedback
//! log), plus the shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Dataset ──► Search ──► UI (TUI / CLI)
//!               │
//!               ├──► Docs      (per-record attachment folders)
//!               └──► Feedback  (append-only log)
//! ```
//!
//! The dataset is built once at startup, immutable afterwards, and passed by
//! shared reference into the query functions. Queries are synchronous linear
//! scans; at a few hundred records there is nothing to index.

pub mod config;
pub mod dataset;
pub mod docs;
pub mod feedback;
pub mod search;
pub mod types;

pub use dataset::Dataset;
pub use types::{DetailLine, Fragment, Hit, Record, Section, Snippet};
