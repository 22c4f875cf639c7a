//! Feedback log — an append-only text file shared by all sessions.
//!
//! Each entry is a timestamped block terminated by a `---` separator line.
//! The whole block is written with a single append-mode `write`, so
//! concurrent sessions interleave at block granularity without any locking.
//! Reading back a log that does not exist yet is "none yet", not an error.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator line between feedback blocks.
const SEPARATOR: &str = "---";

/// Handle to the append-only feedback log file.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one feedback block: a UTC timestamp header, the text, and the
    /// separator line, newline-terminated. The block is formatted first and
    /// written with one call.
    pub fn append(&self, text: &str) -> std::io::Result<()> {
        let block = format!(
            "[{}]\n{}\n{SEPARATOR}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            text.trim_end(),
        );

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        tracing::debug!(path = %self.path.display(), bytes = block.len(), "feedback appended");
        Ok(())
    }

    /// The full accumulated log, or `None` when no feedback has been left
    /// yet (the file does not exist).
    pub fn read_all(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.log"));
        assert_eq!(log.read_all().unwrap(), None);
    }

    #[test]
    fn append_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.log"));
        log.append("snippet for 4.16 looks wrong").unwrap();
        log.append("second note").unwrap();

        let content = log.read_all().unwrap().unwrap();
        assert!(content.contains("snippet for 4.16 looks wrong"));
        assert!(content.contains("second note"));
        assert_eq!(content.matches(SEPARATOR).count(), 2);
        assert!(content.ends_with('\n'));
    }
}
