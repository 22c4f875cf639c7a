//! Document store integration harness.
//!
//! # What this covers
//!
//! - **Folder-per-item layout**: documents for item `4.16` live under
//!   `<docs_root>/4.16/` and nowhere else.
//! - **Extension filter**: only the supported office/image extensions are
//!   listed, case-insensitively; other files and subdirectories are
//!   skipped.
//! - **Graceful absence**: a missing docs root or item folder yields an
//!   empty listing, never an error.
//! - **Deterministic order**: listings are sorted by file name.
//!
//! # Running
//!
//! ```sh
//! cargo test --test docs_harness
//! ```

use pretty_assertions::assert_eq;
use risq_core::docs;
use std::fs;

fn docs_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp docs root")
}

/// Supported files inside the item's folder are listed sorted by name.
#[test]
fn lists_supported_files_sorted() {
    let root = docs_root();
    let folder = root.path().join("4.16");
    fs::create_dir(&folder).unwrap();
    for name in ["photo.jpg", "checklist.pdf", "matrix.xlsx"] {
        fs::write(folder.join(name), b"x").unwrap();
    }

    let names: Vec<String> = docs::list_documents(root.path(), "4.16")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["checklist.pdf", "matrix.xlsx", "photo.jpg"]);
}

/// Unsupported extensions and extensionless files are filtered out; the
/// extension check is case-insensitive.
#[test]
fn filters_by_extension_case_insensitively() {
    let root = docs_root();
    let folder = root.path().join("5.2");
    fs::create_dir(&folder).unwrap();
    for name in ["permit.PDF", "scan.JPG", "notes.txt", "archive.zip", "README"] {
        fs::write(folder.join(name), b"x").unwrap();
    }

    let names: Vec<String> = docs::list_documents(root.path(), "5.2")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["permit.PDF", "scan.JPG"]);
}

/// Subdirectories inside an item folder are not documents.
#[test]
fn skips_subdirectories() {
    let root = docs_root();
    let folder = root.path().join("7.1");
    fs::create_dir(&folder).unwrap();
    fs::create_dir(folder.join("old.pdf")).unwrap(); // a dir with a doc-like name
    fs::write(folder.join("brake-test.pdf"), b"x").unwrap();

    let names: Vec<String> = docs::list_documents(root.path(), "7.1")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["brake-test.pdf"]);
}

/// A missing item folder, and a missing docs root entirely, both yield an
/// empty listing.
#[test]
fn missing_folders_yield_empty_listing() {
    let root = docs_root();
    assert!(docs::list_documents(root.path(), "9.99").is_empty());
    assert!(docs::list_documents(&root.path().join("nope"), "9.99").is_empty());
}

/// Documents from one item's folder never leak into another's listing.
#[test]
fn folders_are_isolated_per_item() {
    let root = docs_root();
    for no in ["4.16", "5.2"] {
        let folder = root.path().join(no);
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join(format!("{no}.pdf")), b"x").unwrap();
    }

    let names: Vec<String> = docs::list_documents(root.path(), "4.16")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["4.16.pdf"]);
}

/// A listed document's contents can be read back through its handle.
#[test]
fn document_contents_are_readable() {
    let root = docs_root();
    let folder = root.path().join("4.16");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("letter.pdf"), b"appointment").unwrap();

    let documents = docs::list_documents(root.path(), "4.16");
    assert_eq!(documents[0].read().unwrap(), b"appointment");
}
