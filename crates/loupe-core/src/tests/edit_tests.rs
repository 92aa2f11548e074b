//! Tests for [`TextEdit`], [`apply_text_edits`] and [`DocumentEditor`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Document, DocumentEditor, EditError, OffsetConverter, TextEdit, apply_text_edits};

fn range(text: &str, start: usize, end: usize) -> crate::Range {
    OffsetConverter::new(text).range(start, end).expect("range")
}

#[test]
fn insert_is_zero_width() {
    let converter = OffsetConverter::new("hello");
    let edit = TextEdit::insert(converter.position_at(5), "!");
    assert!(edit.is_insertion());
    assert!(!edit.is_deletion());
    assert!(edit.range().is_empty());
}

#[test]
fn delete_has_empty_replacement() {
    let edit = TextEdit::delete(range("hello", 1, 3));
    assert!(edit.is_deletion());
    assert!(edit.new_text().is_empty());
}

#[test]
fn apply_text_edits_splices_in_position_order() {
    let text = "width: 10px; height: 20px;";
    let edits = vec![
        TextEdit::replace(range(text, 21, 23), "40"),
        TextEdit::replace(range(text, 7, 9), "30"),
    ];
    let output = apply_text_edits(text, &edits).expect("apply");
    assert_eq!(output, "width: 30px; height: 40px;");
}

#[test]
fn insertions_at_one_point_keep_submission_order() {
    let text = "ac";
    let converter = OffsetConverter::new(text);
    let edits = vec![
        TextEdit::insert(converter.position_at(1), "b"),
        TextEdit::insert(converter.position_at(1), "B"),
    ];
    assert_eq!(apply_text_edits(text, &edits).expect("apply"), "abBc");
}

#[test]
fn insertion_before_replacement_at_same_offset() {
    let text = "abcdef";
    let converter = OffsetConverter::new(text);
    let edits = vec![
        TextEdit::replace(range(text, 2, 4), "XY"),
        TextEdit::insert(converter.position_at(2), "_"),
    ];
    assert_eq!(apply_text_edits(text, &edits).expect("apply"), "ab_XYef");
}

#[test]
fn overlapping_edits_are_rejected() {
    let text = "hello world";
    let edits = vec![
        TextEdit::replace(range(text, 0, 5), "howdy"),
        TextEdit::replace(range(text, 3, 8), "x"),
    ];
    let result = apply_text_edits(text, &edits);
    assert!(matches!(result, Err(EditError::Overlapping { .. })));
}

#[test]
fn out_of_bounds_edits_are_rejected() {
    let long = "hello world";
    let edits = vec![TextEdit::replace(range(long, 6, 11), "there")];
    let result = apply_text_edits("hello", &edits);
    assert_eq!(
        result,
        Err(EditError::OutOfBounds {
            start: 6,
            end: 11,
            length: 5
        })
    );
}

#[test]
fn edits_splitting_a_character_are_rejected() {
    let edits = vec![TextEdit::replace(range("ab", 1, 2), "x")];
    let result = apply_text_edits("é", &edits);
    assert_eq!(result, Err(EditError::NotCharBoundary { offset: 1 }));
}

#[test]
fn editor_commits_batch_and_bumps_version() {
    let document = Document::new("plaintext", "hello world");
    let target = range(document.content(), 6, 11);
    let mut editor = DocumentEditor::new(document);
    editor.replace(target, "there");
    assert_eq!(editor.pending().len(), 1);

    let committed = editor.apply_edits().expect("apply");
    assert_eq!(committed.content(), "hello there");
    assert_eq!(committed.version(), 1);
    assert!(editor.pending().is_empty());
}

#[test]
fn editor_notifies_observers_once_per_commit() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let document = Document::new("plaintext", "abc");
    let mut editor = DocumentEditor::new(document);
    editor.subscribe(move |doc: &Document| sink.borrow_mut().push(doc.content().to_owned()));

    let converter = OffsetConverter::new("abc");
    editor
        .insert(converter.position_at(0), ">")
        .insert(converter.position_at(3), "<")
        .delete(range("abc", 1, 2));
    editor.apply_edits().expect("apply");

    assert_eq!(*seen.borrow(), vec![String::from(">ac<")]);
}

#[test]
fn rejected_batch_leaves_document_and_discards_edits() {
    let seen = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&seen);

    let mut editor = DocumentEditor::new(Document::new("plaintext", "hello world"));
    editor.subscribe(move |_: &Document| *counter.borrow_mut() += 1);
    editor
        .replace(range("hello world", 0, 5), "a")
        .replace(range("hello world", 4, 6), "b");

    assert!(editor.apply_edits().is_err());
    assert_eq!(editor.document().content(), "hello world");
    assert_eq!(editor.document().version(), 0);
    assert!(editor.pending().is_empty());
    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn empty_batch_still_notifies() {
    let seen = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&seen);

    let mut editor = DocumentEditor::new(Document::new("plaintext", "same"));
    editor.subscribe(move |_: &Document| *counter.borrow_mut() += 1);
    let document = editor.apply_edits().expect("apply");

    assert_eq!(document.version(), 0);
    assert_eq!(*seen.borrow(), 1);
}
