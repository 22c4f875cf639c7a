//! Core types for risq-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the normalised [`Record`], the [`Section`] discriminant naming
//! which field a match was found in, and the display-oriented result types
//! produced by the search layer.

/// One RISQ inspection item, normalised from whichever dataset schema
/// revision it was loaded from.
///
/// All fields are whitespace-trimmed at load time. Optional fields default
/// to the empty string; only [`Record::no`] is required (entries without an
/// identifier are dropped by the loader). Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record identifier, e.g. `"4.16"`. Unique within a dataset.
    pub no: String,
    /// Bilingual item description (the "question" text).
    pub description: String,
    /// Inspector guidance text. Usually the longest field.
    pub guide: String,
    /// Action instructions, English. Schema revisions with a single combined
    /// `Action` blob land here.
    pub action_e: String,
    /// Action instructions, Korean. Empty for single-blob schema revisions.
    pub action_k: String,
}

/// Which text field of a [`Record`] a keyword match was found in.
///
/// The variant order is also the search priority order: the first section
/// containing the keyword wins and later sections of the same record are
/// not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Description,
    Guide,
    ActionE,
    ActionK,
}

impl Section {
    /// All sections in search priority order.
    pub const ALL: [Section; 4] = [
        Section::Description,
        Section::Guide,
        Section::ActionE,
        Section::ActionK,
    ];

    /// The matching field of `record` for this section.
    pub fn field_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Section::Description => &record.description,
            Section::Guide => &record.guide,
            Section::ActionE => &record.action_e,
            Section::ActionK => &record.action_k,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // These are the dataset's own column labels, kept verbatim so the UI
        // matches the source spreadsheets.
        match self {
            Section::Description => write!(f, "DESCRIPTION"),
            Section::Guide => write!(f, "Guide"),
            Section::ActionE => write!(f, "action(E)"),
            Section::ActionK => write!(f, "action(K)"),
        }
    }
}

/// A run of text plus whether it is a keyword occurrence.
///
/// A highlighted string is a `Vec<Fragment>`; concatenating the `text` of
/// every fragment reproduces the input byte-for-byte, original casing
/// included. Renderers decide what "emphasis" means (a ratatui style, a
/// `**…**` marker pair).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// True when this fragment is an occurrence of the search keyword.
    pub hit: bool,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Fragment { text: text.into(), hit: false }
    }

    pub fn hit(text: impl Into<String>) -> Self {
        Fragment { text: text.into(), hit: true }
    }
}

/// A sentence-bounded excerpt of a field surrounding a keyword match.
///
/// `clipped_start` / `clipped_end` flag omitted context beyond the excerpt;
/// renderers turn them into leading/trailing ellipsis markers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snippet {
    pub text: String,
    pub clipped_start: bool,
    pub clipped_end: bool,
}

/// One keyword-search result: which record matched, where, and the snippet
/// ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub no: String,
    pub section: Section,
    /// Sentence-bounded excerpt of the matched field.
    pub snippet: Snippet,
    /// The snippet text with highlighting applied.
    pub fragments: Vec<Fragment>,
}

/// One display line of the expandable full-field view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub fragments: Vec<Fragment>,
    /// True when the line contains Hangul; renderers style Korean lines
    /// differently from English ones.
    pub hangul: bool,
}

impl DetailLine {
    /// The line's text with highlight boundaries erased.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_labels_match_dataset_columns() {
        assert_eq!(Section::Description.to_string(), "DESCRIPTION");
        assert_eq!(Section::Guide.to_string(), "Guide");
        assert_eq!(Section::ActionE.to_string(), "action(E)");
        assert_eq!(Section::ActionK.to_string(), "action(K)");
    }

    #[test]
    fn field_of_selects_the_right_slot() {
        let record = Record {
            no: "1.1".into(),
            description: "d".into(),
            guide: "g".into(),
            action_e: "e".into(),
            action_k: "k".into(),
        };
        assert_eq!(Section::Description.field_of(&record), "d");
        assert_eq!(Section::Guide.field_of(&record), "g");
        assert_eq!(Section::ActionE.field_of(&record), "e");
        assert_eq!(Section::ActionK.field_of(&record), "k");
    }
}
