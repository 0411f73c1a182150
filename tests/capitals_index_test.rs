//! Tests for the candidate index and autocomplete filter.

use weatherle::{CandidateIndex, CAPITALS};

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(CandidateIndex::normalize("  Paris "), "paris");
    assert_eq!(CandidateIndex::normalize("BUENOS AIRES"), "buenos aires");
    assert_eq!(CandidateIndex::normalize(""), "");
    assert_eq!(CandidateIndex::normalize("   "), "");
}

#[test]
fn test_contains_expects_normalized_input() {
    let index = CandidateIndex::new(["paris", "rome"]);

    assert!(index.contains("paris"));
    assert!(index.contains("rome"));
    // Membership is exact; callers normalize first.
    assert!(!index.contains("Paris"));
    assert!(!index.contains(" paris"));
    assert!(!index.contains("atlantis"));
}

#[test]
fn test_construction_normalizes_entries() {
    let index = CandidateIndex::new(["  Paris ", "ROME"]);

    assert!(index.contains("paris"));
    assert!(index.contains("rome"));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_construction_dedups_preserving_first_occurrence() {
    let index = CandidateIndex::new(["kingston", "oslo", "Kingston", "kingston"]);

    let entries: Vec<&str> = index.entries().iter().map(String::as_str).collect();
    assert_eq!(entries, ["kingston", "oslo"]);
}

#[test]
fn test_construction_drops_blank_names() {
    let index = CandidateIndex::new(["", "   ", "oslo"]);

    assert_eq!(index.len(), 1);
}

#[test]
fn test_suggest_prefix_match() {
    let index = CandidateIndex::new(["paris", "rome"]);

    assert_eq!(index.suggest("pa", 10), vec!["paris"]);
    assert_eq!(index.suggest("", 10), Vec::<&str>::new());
}

#[test]
fn test_suggest_normalizes_the_prefix() {
    let index = CandidateIndex::new(["paris", "rome"]);

    assert_eq!(index.suggest("  PA", 10), vec!["paris"]);
}

#[test]
fn test_suggest_whitespace_prefix_yields_nothing() {
    let index = CandidateIndex::new(["paris", "rome"]);

    assert!(index.suggest("   ", 10).is_empty());
}

#[test]
fn test_suggest_respects_limit() {
    let index = CandidateIndex::builtin();

    assert_eq!(index.suggest("b", 3).len(), 3);
    assert!(index.suggest("b", 100).len() > 3);
}

#[test]
fn test_suggest_returns_declaration_order() {
    let index = CandidateIndex::builtin();

    // Roster order, not alphabetical order.
    assert_eq!(
        index.suggest("pa", 10),
        vec!["paris", "papeete", "palikir", "panama", "paramaribo"]
    );
}

#[test]
fn test_suggest_no_match_yields_nothing() {
    let index = CandidateIndex::builtin();

    assert!(index.suggest("zz", 10).is_empty());
}

#[test]
fn test_builtin_roster_is_normalized_and_unique() {
    let index = CandidateIndex::builtin();

    // The raw roster carries one duplicate ("kingston").
    assert_eq!(index.len(), CAPITALS.len() - 1);
    for entry in index.entries() {
        assert_eq!(entry, &CandidateIndex::normalize(entry));
    }
}

#[test]
fn test_builtin_roster_spans_the_worker_list() {
    let index = CandidateIndex::builtin();

    assert!(index.contains("kabul"));
    assert!(index.contains("buenos aires"));
    assert!(index.contains("washington dc"));
    assert!(index.contains("lusaka"));
}
