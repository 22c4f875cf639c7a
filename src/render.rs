//! Plain-text rendering for the CLI subcommands.
//!
//! Keyword occurrences are emphasised with `**…**` markers so matches stay
//! visible when output is piped or grepped. Truncated snippets carry an
//! `…` on the clipped side.

use risq_core::{search, Fragment, Hit, Record, Section, Snippet};
use std::fmt::Write;

/// Render one search hit as a single result line:
/// `4.16   DESCRIPTION  │ …snippet with **keyword** emphasised…`
pub fn hit_line(hit: &Hit, show_section_labels: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<6} ", hit.no);
    if show_section_labels {
        let _ = write!(out, "{:<11} ", hit.section.to_string());
    }
    out.push_str("│ ");
    push_snippet(&mut out, &hit.snippet, &hit.fragments);
    out
}

fn push_snippet(out: &mut String, snippet: &Snippet, fragments: &[Fragment]) {
    if snippet.clipped_start {
        out.push_str("… ");
    }
    for frag in fragments {
        push_fragment(out, frag);
    }
    if snippet.clipped_end {
        out.push_str(" …");
    }
}

fn push_fragment(out: &mut String, frag: &Fragment) {
    if frag.hit {
        let _ = write!(out, "**{}**", frag.text);
    } else {
        out.push_str(&frag.text);
    }
}

/// Render a full record the way the detail pane shows it: each non-empty
/// section in priority order, sentence-per-line, keyword emphasised.
pub fn record(record: &Record, keyword: &str, show_section_labels: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RISQ {}", record.no);

    for section in Section::ALL {
        let field = section.field_of(record);
        if field.is_empty() {
            continue;
        }
        out.push('\n');
        if show_section_labels {
            let _ = writeln!(out, "{section}");
        }
        for line in search::detail_lines(field, keyword) {
            out.push_str("  ");
            for frag in &line.fragments {
                push_fragment(&mut out, frag);
            }
            out.push('\n');
        }
    }
    out
}

/// Render the document listing for a record.
pub fn documents(no: &str, names: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "documents for RISQ {no}");
    if names.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for name in names {
            let _ = writeln!(out, "  - {name}");
        }
    }
    out
}
