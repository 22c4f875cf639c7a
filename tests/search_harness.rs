//! Keyword search integration harness.
//!
//! # What this covers
//!
//! This is the most critical harness in the suite. Search semantics are
//! deliberately simple — scan order, first matching section wins, no
//! ranking — and every one of those properties is easy to break while
//! refactoring.
//!
//! - **Section priority**: DESCRIPTION masks Guide, Guide masks the action
//!   fields. One hit per record, from the highest-priority section that
//!   matches.
//! - **Dataset order**: hits come back in dataset order, never sorted by
//!   any relevance measure.
//! - **Case-insensitivity**: ASCII case variants of the keyword all match,
//!   and the emphasised text preserves the field's original casing.
//! - **Literal matching**: regex metacharacters in the keyword are taken
//!   literally.
//! - **Snippet bounds**: snippets extend to the surrounding sentence
//!   boundaries, with clip flags only when real context was omitted.
//! - **Empty input**: a blank or whitespace-only keyword short-circuits to
//!   no hits.
//! - **Property: fragment fidelity**: for any field and keyword, the
//!   highlight fragments concatenate back to exactly the input text.
//!
//! # What this does NOT cover
//!
//! - TUI rendering of hits and details (unit-tested in risq-tui)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use risq_core::{search, Section};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Section priority and ordering
// ---------------------------------------------------------------------------

/// "safety officer" appears in 4.16's description and guide: the hit must
/// report the description and the guide occurrence is masked.
#[test]
fn first_matching_section_masks_later_ones() {
    let hits = search::keyword_search(&mixed_dataset(), "safety officer");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].no, "4.16");
    assert_eq!(hits[0].section, Section::Description);
}

/// "the" matches every record, each in a different section: hits come back
/// in dataset order, one per record, each reporting its own first matching
/// section.
#[test]
fn hits_follow_dataset_order() {
    let hits = search::keyword_search(&mixed_dataset(), "the");
    let ids: Vec<&str> = hits.iter().map(|h| h.no.as_str()).collect();
    assert_eq!(ids, vec!["4.16", "5.2", "7.1"]);

    let sections: Vec<Section> = hits.iter().map(|h| h.section).collect();
    assert_eq!(
        sections,
        vec![Section::Guide, Section::ActionE, Section::Description]
    );
}

/// A keyword only present in the Korean action text still hits, reporting
/// the action(K) section.
#[test]
fn korean_keyword_matches_action_k() {
    let hits = search::keyword_search(&mixed_dataset(), "임명장");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].section, Section::ActionK);
}

/// No matching record anywhere yields an empty hit list.
#[test]
fn unmatched_keyword_yields_no_hits() {
    assert!(search::keyword_search(&mixed_dataset(), "ballast").is_empty());
}

// ---------------------------------------------------------------------------
// Case handling
// ---------------------------------------------------------------------------

/// ASCII case variants of the keyword all produce the same hit.
#[rstest]
#[case("permits")]
#[case("Permits")]
#[case("PERMITS")]
#[case("pErMiTs")]
fn keyword_matches_case_insensitively(#[case] keyword: &str) {
    let hits = search::keyword_search(&mixed_dataset(), keyword);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].no, "5.2");
}

/// The emphasised fragment carries the field's original casing, not the
/// query's.
#[test]
fn emphasis_preserves_original_casing() {
    let hits = search::keyword_search(&mixed_dataset(), "SAFETY");
    let emphasised: Vec<&str> = hits[0]
        .fragments
        .iter()
        .filter(|f| f.hit)
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(emphasised, vec!["safety"]);
}

// ---------------------------------------------------------------------------
// Literal matching
// ---------------------------------------------------------------------------

/// A keyword containing a period matches only the literal text. "4.16" in a
/// field is found; "4x16" is not.
#[test]
fn metacharacters_in_keyword_are_literal() {
    let dataset = dataset_of(vec![
        EntryBuilder::new("1.1").guide("Refer to item 4.16 for details.").build(),
        EntryBuilder::new("1.2").guide("Use a 4x16 timber batten.").build(),
    ]);
    let hits = search::keyword_search(&dataset, "4.16");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].no, "1.1");
}

/// Blank and whitespace-only keywords short-circuit to no hits.
#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_keyword_short_circuits(#[case] keyword: &str) {
    assert!(search::keyword_search(&mixed_dataset(), keyword).is_empty());
}

// ---------------------------------------------------------------------------
// Snippet bounds
// ---------------------------------------------------------------------------

/// A keyword in the second sentence of 4.16's guide yields exactly that
/// sentence, with no clip markers since nothing beyond the context window
/// was omitted.
#[test]
fn snippet_is_the_surrounding_sentence() {
    let hits = search::keyword_search(&mixed_dataset(), "recent inspections");
    assert_eq!(hits[0].no, "4.16");
    assert_eq!(
        hits[0].snippet.text,
        "Interview the safety officer about recent inspections."
    );
    assert!(!hits[0].snippet.clipped_start);
    assert!(!hits[0].snippet.clipped_end);
}

/// A keyword buried mid-paragraph in a long multi-sentence field produces
/// clip markers on both sides, since whole sentences were omitted.
#[test]
fn deep_match_in_long_field_is_clipped_both_sides() {
    let pad = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do \
               eiusmod tempor incididunt ut labore et dolore magna aliqua. "
        .repeat(2);
    let field = format!("{pad}The keyword anchor sits here. {pad}");
    let dataset =
        dataset_of(vec![EntryBuilder::new("9.1").description(field).build()]);

    let hits = search::keyword_search(&dataset, "anchor");
    assert_eq!(hits[0].snippet.text, "The keyword anchor sits here.");
    assert!(hits[0].snippet.clipped_start);
    assert!(hits[0].snippet.clipped_end);
}

/// A long field with no sentence boundaries yields the whole field as the
/// snippet; no marker may appear even though the match sits deep in it.
#[test]
fn whole_field_snippet_never_carries_markers() {
    let pad = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(4);
    let field = format!("{pad}the keyword anchor sits here {pad}");
    let dataset = dataset_of(vec![EntryBuilder::new("9.2")
        .description(field.clone())
        .build()]);

    let hits = search::keyword_search(&dataset, "anchor");
    assert_eq!(hits[0].snippet.text, field.trim());
    assert!(!hits[0].snippet.clipped_start);
    assert!(!hits[0].snippet.clipped_end);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// Highlight fragments always concatenate back to the input text, for
    /// arbitrary fields and keywords.
    #[test]
    fn prop_fragments_concatenate_to_field(
        field in ".{0,200}",
        keyword in ".{0,20}",
    ) {
        let fragments = search::highlight(&field, &keyword);
        let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
        prop_assert_eq!(rebuilt, field);
    }

    /// Every hit's identifier resolves back to a record in the dataset, and
    /// hit identifiers are unique.
    #[test]
    fn prop_hits_resolve_and_are_unique(keyword in "[a-zA-Z ]{1,12}") {
        let dataset = build_corpus(50);
        let hits = search::keyword_search(&dataset, &keyword);
        let mut seen = std::collections::HashSet::new();
        for hit in &hits {
            prop_assert!(dataset.get(&hit.no).is_some());
            prop_assert!(seen.insert(hit.no.clone()));
        }
    }
}
