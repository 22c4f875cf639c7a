//! risq-mapper — RISQ inspection-item lookup
//!
//! Terminal tool for searching a RISQ (Rightship Inspection Ship
//! Questionnaire) dataset: exact item-number lookup and case-insensitive
//! keyword search, with an interactive TUI and plain-output subcommands for
//! scripting. This crate exposes the text rendering layer as a public module
//! so that integration tests can import it directly.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Search ──► TUI (risq-tui)
//!    │           │
//!    └───────────┴──► render (CLI output)
//! ```
//!
//! The dataset, search engine, docs store, and feedback log live in
//! `risq-core`; the interactive interface lives in `risq-tui`.

pub mod render;
