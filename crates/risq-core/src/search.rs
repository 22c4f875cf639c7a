//! Query engine — keyword scan, snippet extraction, and highlighting.
//!
//! A query is a pure function of `(dataset, keyword)`: a single synchronous
//! scan over the records in insertion order, no state, no ranking. Per
//! record, fields are tested in the fixed priority order of
//! [`Section::ALL`]; the first field containing the keyword wins and later
//! fields of the same record are skipped, so a record surfaces at most once
//! per query. That masking is the original tool's documented behaviour and
//! is kept as-is.
//!
//! All matching is a case-insensitive substring test, implemented as a
//! `regex` over the escaped keyword so highlighting and matching can never
//! disagree on what counts as an occurrence.

use crate::dataset::Dataset;
use crate::types::{DetailLine, Fragment, Hit, Section, Snippet};
use regex::{Regex, RegexBuilder};

/// Bytes of field text omitted beyond the excerpt before a snippet side is
/// flagged as clipped (rendered with an ellipsis marker). A snippet that
/// reaches the field edge never flags that side, no matter where in the
/// field the match sits.
pub const SNIPPET_CONTEXT: usize = 120;

/// Case-insensitive matcher for a literal keyword.
fn ci_matcher(keyword: &str) -> Regex {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .expect("escaped literal must be a valid pattern")
}

// ---------------------------------------------------------------------------
// Keyword search
// ---------------------------------------------------------------------------

/// Scan every record for a case-insensitive keyword match.
///
/// Empty (or whitespace-only) input short-circuits to no results before any
/// scanning — callers distinguish that from a scan that found nothing.
/// Matches come back in dataset order with a highlighted, sentence-bounded
/// snippet each.
pub fn keyword_search(dataset: &Dataset, keyword: &str) -> Vec<Hit> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    let matcher = ci_matcher(keyword);
    let mut hits = Vec::new();

    for record in dataset {
        for section in Section::ALL {
            let field = section.field_of(record);
            if matcher.is_match(field) {
                let snippet = extract_snippet(field, &matcher);
                let fragments = highlight_with(&snippet.text, &matcher);
                hits.push(Hit {
                    no: record.no.clone(),
                    section,
                    snippet,
                    fragments,
                });
                break;
            }
        }
    }

    tracing::debug!(keyword, hits = hits.len(), "keyword search");
    hits
}

// ---------------------------------------------------------------------------
// Snippet extraction
// ---------------------------------------------------------------------------

/// Sentence-bounded excerpt of `field` around the first occurrence of
/// `keyword` (case-insensitive).
///
/// The excerpt runs from just after the nearest period before the match to
/// the nearest period after it (inclusive), falling back to the field edges,
/// then trimmed. A side is flagged clipped when more than
/// [`SNIPPET_CONTEXT`] bytes of field text beyond the excerpt were left out.
/// A keyword the field does not contain yields an empty snippet.
pub fn snippet(field: &str, keyword: &str) -> Snippet {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Snippet::default();
    }
    extract_snippet(field, &ci_matcher(keyword))
}

fn extract_snippet(field: &str, matcher: &Regex) -> Snippet {
    let Some(m) = matcher.find(field) else {
        return Snippet::default();
    };

    // '.' is ASCII, so byte arithmetic around it stays on char boundaries.
    let start = field[..m.start()].rfind('.').map(|i| i + 1).unwrap_or(0);
    let end = field[m.end()..]
        .find('.')
        .map(|i| m.end() + i + 1)
        .unwrap_or(field.len());

    Snippet {
        text: field[start..end].trim().to_string(),
        clipped_start: start > SNIPPET_CONTEXT,
        clipped_end: field.len().saturating_sub(end) > SNIPPET_CONTEXT,
    }
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// Split `text` into fragments, marking every case-insensitive occurrence of
/// `keyword` as a hit. Original casing is preserved; concatenating the
/// fragments reproduces `text` byte-for-byte. An empty keyword yields one
/// plain fragment.
pub fn highlight(text: &str, keyword: &str) -> Vec<Fragment> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return vec![Fragment::plain(text)];
    }
    highlight_with(text, &ci_matcher(keyword))
}

fn highlight_with(text: &str, matcher: &Regex) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for m in matcher.find_iter(text) {
        if m.start() > last {
            fragments.push(Fragment::plain(&text[last..m.start()]));
        }
        fragments.push(Fragment::hit(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        fragments.push(Fragment::plain(&text[last..]));
    }
    if fragments.is_empty() {
        fragments.push(Fragment::plain(text));
    }
    fragments
}

// ---------------------------------------------------------------------------
// Full-field rendering
// ---------------------------------------------------------------------------

/// Render an entire field for the expandable detail view: highlighting
/// applied, split into paragraph lines after sentence-ending periods, each
/// line flagged when it contains Hangul.
///
/// A period ends a sentence unless it sits between two ASCII digits, which
/// keeps item references like "4.16" on one line. Pre-existing newlines in
/// the field (action blobs are newline-separated lists) also break lines;
/// blank lines are dropped.
pub fn detail_lines(field: &str, keyword: &str) -> Vec<DetailLine> {
    let keyword = keyword.trim();
    let matcher = (!keyword.is_empty()).then(|| ci_matcher(keyword));

    split_paragraphs(field)
        .into_iter()
        .map(|line| DetailLine {
            fragments: match &matcher {
                Some(m) => highlight_with(line, m),
                None => vec![Fragment::plain(line)],
            },
            hangul: contains_hangul(line),
        })
        .collect()
}

/// Split on newlines and after sentence-ending periods; a period flanked by
/// digits on both sides is part of a decimal, not a boundary. Lines are
/// trimmed and blank lines dropped.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    let mut push = |s: &mut usize, end: usize, next: usize| {
        let line = text[*s..end].trim();
        if !line.is_empty() {
            lines.push(line);
        }
        *s = next;
    };

    for (i, c) in text.char_indices() {
        match c {
            '\n' => push(&mut start, i, i + 1),
            '.' => {
                let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
                let next_digit = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
                if !(prev_digit && next_digit) {
                    push(&mut start, i + 1, i + 1);
                }
            }
            _ => {}
        }
    }
    push(&mut start, text.len(), text.len());

    lines
}

/// True when the text contains Hangul — syllable blocks, Jamo, or
/// compatibility Jamo.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
