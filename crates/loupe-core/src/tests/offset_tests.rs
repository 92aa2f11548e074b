//! Tests for [`OffsetConverter`].

use rstest::rstest;

use crate::{OffsetConverter, Position};

#[rstest]
#[case(0, Position::new(0, 0, 0))]
#[case(2, Position::new(0, 2, 2))]
#[case(3, Position::new(1, 0, 3))]
#[case(6, Position::new(1, 3, 6))]
#[case(7, Position::new(2, 0, 7))]
fn position_at_counts_rows_and_columns(#[case] offset: usize, #[case] expected: Position) {
    let converter = OffsetConverter::new("ab\ncde\n");
    assert_eq!(converter.position_at(offset), expected);
}

#[test]
fn offsets_past_the_end_clamp_to_the_end() {
    let converter = OffsetConverter::new("ab\ncd");
    assert_eq!(converter.position_at(5), Position::new(1, 2, 5));
    assert_eq!(converter.position_at(500), Position::new(1, 2, 5));
}

#[test]
fn empty_text_has_one_row() {
    let converter = OffsetConverter::new("");
    assert_eq!(converter.row_count(), 1);
    assert_eq!(converter.position_at(3), Position::new(0, 0, 0));
}

#[test]
fn carriage_returns_stay_on_their_row() {
    let converter = OffsetConverter::new("a\r\nb");
    assert_eq!(converter.position_at(1), Position::new(0, 1, 1));
    assert_eq!(converter.position_at(3), Position::new(1, 0, 3));
}

#[test]
fn columns_count_bytes() {
    let converter = OffsetConverter::new("é=1");
    assert_eq!(converter.position_at(2), Position::new(0, 2, 2));
}

#[rstest]
#[case(0, 0, Some(0))]
#[case(0, 2, Some(2))]
#[case(0, 3, None)]
#[case(1, 3, Some(6))]
#[case(2, 0, None)]
fn offset_at_inverts_position_at(
    #[case] row: usize,
    #[case] column: usize,
    #[case] expected: Option<usize>,
) {
    let converter = OffsetConverter::new("ab\ncde");
    assert_eq!(converter.offset_at(row, column), expected);
}

#[test]
fn lookups_in_any_order_agree() {
    let text = "one\ntwo\nthree\n";
    let converter = OffsetConverter::new(text);
    let forward: Vec<_> = (0..=text.len()).map(|o| converter.position_at(o)).collect();
    let backward: Vec<_> = (0..=text.len())
        .rev()
        .map(|o| converter.position_at(o))
        .collect();
    let reversed: Vec<_> = backward.into_iter().rev().collect();
    assert_eq!(forward, reversed);
}
