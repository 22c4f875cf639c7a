//! Document store — per-record attachment folders.
//!
//! For a record identifier `4.16`, company documents live under
//! `<docs_root>/4.16/`. The only contract with this collaborator is listing
//! the folder's document files and reading their bytes on demand. A missing
//! folder or a folder with no matching files is "no documents", never an
//! error.

use phf::phf_set;
use std::path::{Path, PathBuf};

/// File extensions (lowercased) that count as a document or image
/// attachment. Anything else in the folder is ignored.
static DOC_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "png", "jpg", "jpeg",
};

/// One attachment associated with a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
}

impl Document {
    /// Byte contents, read on demand.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// List the documents associated with a record identifier, sorted by file
/// name. Absence of the folder, or of any matching files, yields an empty
/// list.
pub fn list_documents(docs_root: &Path, no: &str) -> Vec<Document> {
    let folder = docs_root.join(no);
    let Ok(entries) = std::fs::read_dir(&folder) else {
        tracing::debug!(folder = %folder.display(), "no document folder");
        return Vec::new();
    };

    let mut documents: Vec<Document> = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let path = entry.path();
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            if !DOC_EXTENSIONS.contains(ext.as_str()) {
                return None;
            }
            let name = path.file_name()?.to_str()?.to_string();
            Some(Document { name, path })
        })
        .collect();

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    documents
}
