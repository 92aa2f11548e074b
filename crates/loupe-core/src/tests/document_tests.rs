//! Tests for [`Document`].

use crate::{Document, Range};

#[test]
fn new_document_starts_at_version_zero() {
    let document = Document::new("json", "{}");
    assert_eq!(document.language_id(), "json");
    assert_eq!(document.content(), "{}");
    assert_eq!(document.version(), 0);
    assert!(!document.is_empty());
}

#[test]
fn empty_document_reports_empty() {
    assert!(Document::new("plaintext", "").is_empty());
}

#[test]
fn with_content_returns_a_new_version() {
    let original = Document::new("css", "a {}");
    let replaced = original.with_content("b {}");
    assert_eq!(original.content(), "a {}");
    assert_eq!(replaced.content(), "b {}");
    assert_eq!(replaced.language_id(), "css");
    assert_eq!(replaced.version(), 1);
}

#[test]
fn with_language_keeps_content() {
    let original = Document::new("plaintext", "1 + 2");
    let relabelled = original.with_language("math");
    assert_eq!(relabelled.language_id(), "math");
    assert_eq!(relabelled.content(), "1 + 2");
    assert_eq!(relabelled.version(), 1);
}

#[test]
fn text_in_slices_content() {
    let document = Document::new("plaintext", "hello world");
    let range = document.offset_converter().range(6, 11).expect("range");
    assert_eq!(document.text_in(&range), Some("world"));
}

#[test]
fn text_in_rejects_ranges_splitting_characters() {
    let document = Document::new("plaintext", "é");
    let range = Range::from_offsets_in_text("ab", 1, 2).expect("range");
    assert_eq!(document.text_in(&range), None);
}
