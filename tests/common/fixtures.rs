//! Canned dataset fixtures shared across harnesses.

#![allow(unused)]

use risq_core::Dataset;

/// A small bilingual corpus covering the quirks the loader and search engine
/// must handle: both field-name schema revisions, a combined "Action" blob,
/// Korean action text, a duplicate identifier, and an entry without one.
pub const MIXED_CORPUS: &str = r#"[
    {
        "NO": "4.16",
        "DESCRIPTION": "Is a safety officer designated and trained on board?",
        "Guide": "Check the appointment letter. Verify the training records held by the safety officer. Confirm familiarisation was completed.",
        "action(E)": "Provide the appointment letter and training certificates.",
        "action(K)": "임명장과 교육 수료증을 제공하십시오."
    },
    {
        "no": "5.2",
        "description": "Are enclosed space entry permits completed before entry?",
        "guide": "Sample recent permits. Atmosphere readings must predate entry.",
        "Action": "Show completed permits for the last three entries."
    },
    {
        "NO": "7.1",
        "DESCRIPTION": "Is the mooring equipment maintained per the planned maintenance system?",
        "Guide": "Inspect winch brakes. Brake test records should be within 12 months."
    },
    {
        "DESCRIPTION": "An orphan entry without an identifier that must be dropped."
    },
    {
        "NO": "4.16",
        "DESCRIPTION": "Is a safety officer designated, trained, and carrying out duties?",
        "Guide": "Check the appointment letter. Interview the safety officer about recent inspections.",
        "action(E)": "Provide the appointment letter and inspection reports.",
        "action(K)": "임명장과 점검 보고서를 제공하십시오."
    }
]"#;

/// Parse [`MIXED_CORPUS`] into a dataset. After duplicate collapse and the
/// orphan drop this holds exactly three records: 4.16, 5.2, 7.1.
pub fn mixed_dataset() -> Dataset {
    Dataset::from_json_str(MIXED_CORPUS).expect("fixture corpus must parse")
}

/// Write `contents` to a `risq_data.json` inside a fresh temp dir, returning
/// the dir (keep it alive) and the file path.
pub fn corpus_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("risq_data.json");
    std::fs::write(&path, contents).expect("write corpus file");
    (dir, path)
}
