//! Feedback log integration harness.
//!
//! # What this covers
//!
//! - **Append-only blocks**: each entry is one timestamped block terminated
//!   by a `---` separator line, appended in a single write.
//! - **Accumulation**: entries append in order; earlier entries are never
//!   rewritten.
//! - **First write**: appending creates the log file when absent.
//! - **Reading**: `read_all` returns `None` for a log that was never
//!   written, `Some(contents)` otherwise.
//!
//! # Running
//!
//! ```sh
//! cargo test --test feedback_harness
//! ```

use pretty_assertions::assert_eq;
use risq_core::feedback::FeedbackLog;

fn log_in_temp_dir() -> (tempfile::TempDir, FeedbackLog) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let log = FeedbackLog::new(dir.path().join("feedback.log"));
    (dir, log)
}

/// The first append creates the file; the entry is one timestamped block
/// ending with the separator.
#[test]
fn first_append_creates_timestamped_block() {
    let (_dir, log) = log_in_temp_dir();
    log.append("Item 4.16 guide text is out of date.").unwrap();

    let contents = log.read_all().unwrap().expect("log exists after append");
    assert!(contents.starts_with('['));
    assert!(contents.contains("UTC]\nItem 4.16 guide text is out of date.\n---\n"));
}

/// Entries accumulate in append order, each with its own separator.
#[test]
fn entries_accumulate_in_order() {
    let (_dir, log) = log_in_temp_dir();
    log.append("first note").unwrap();
    log.append("second note").unwrap();

    let contents = log.read_all().unwrap().unwrap();
    let first = contents.find("first note").unwrap();
    let second = contents.find("second note").unwrap();
    assert!(first < second);
    assert_eq!(contents.matches("---\n").count(), 2);
}

/// Multi-line feedback stays one block: the separator appears once, after
/// the whole text.
#[test]
fn multiline_entry_is_a_single_block() {
    let (_dir, log) = log_in_temp_dir();
    log.append("line one\nline two").unwrap();

    let contents = log.read_all().unwrap().unwrap();
    assert!(contents.contains("line one\nline two\n---\n"));
    assert_eq!(contents.matches("---\n").count(), 1);
}

/// Reading a log that was never written yields `None`, not an error.
#[test]
fn absent_log_reads_as_none() {
    let (_dir, log) = log_in_temp_dir();
    assert_eq!(log.read_all().unwrap(), None);
}

/// Appending to a deep path fails with an error instead of panicking.
#[test]
fn unwritable_path_surfaces_io_error() {
    let (dir, _) = log_in_temp_dir();
    let log = FeedbackLog::new(dir.path().join("missing-dir").join("feedback.log"));
    assert!(log.append("note").is_err());
}
