//! Byte offset to row/column conversion.

use crate::error::RangeError;
use crate::position::Position;
use crate::range::Range;

/// Maps byte offsets of one text to [`Position`]s.
///
/// Construction scans the text once to record where every row starts; each
/// lookup is a binary search over those row starts. Only `\n` ends a row, so
/// a `\r` before it stays part of the preceding row.
///
/// Offsets past the end of the text are clamped to the end.
///
/// # Example
///
/// ```
/// use loupe_core::OffsetConverter;
///
/// let converter = OffsetConverter::new("ab\ncd");
/// assert_eq!(converter.position_at(4).row(), 1);
/// assert_eq!(converter.position_at(4).column(), 1);
/// assert_eq!(converter.position_at(99).offset(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetConverter {
    row_starts: Vec<usize>,
    length: usize,
}

impl OffsetConverter {
    /// Builds a converter for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut row_starts = vec![0];
        row_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(index, _)| index + 1),
        );
        Self {
            row_starts,
            length: text.len(),
        }
    }

    /// Returns the length in bytes of the text this converter describes.
    #[must_use]
    pub const fn text_len(&self) -> usize {
        self.length
    }

    /// Returns the number of rows in the text (at least one).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Returns the position of `offset`, clamping it to the end of the text.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let clamped = offset.min(self.length);
        // `row_starts[0] == 0`, so at least one start is `<= clamped`.
        let row = self
            .row_starts
            .partition_point(|start| *start <= clamped)
            .saturating_sub(1);
        let row_start = self.row_starts.get(row).copied().unwrap_or_default();
        Position::new(row, clamped.saturating_sub(row_start), clamped)
    }

    /// Returns the byte offset of `(row, column)`, or `None` when the row
    /// does not exist or the column runs past the end of the row.
    #[must_use]
    pub fn offset_at(&self, row: usize, column: usize) -> Option<usize> {
        let row_start = *self.row_starts.get(row)?;
        let row_end = self
            .row_starts
            .get(row + 1)
            .map_or(self.length, |next| next.saturating_sub(1));
        let offset = row_start.checked_add(column)?;
        (offset <= row_end).then_some(offset)
    }

    /// Builds a range from two byte offsets.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Reversed`] when `start` lies after `end`.
    pub fn range(&self, start: usize, end: usize) -> Result<Range, RangeError> {
        Range::try_new(self.position_at(start), self.position_at(end))
    }
}
