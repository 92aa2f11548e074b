//! Row/column positions within a text.

use serde::{Deserialize, Serialize};

/// A location inside a text.
///
/// Rows and columns are zero-indexed. Columns count UTF-8 bytes from the
/// start of the row, matching Tree-sitter conventions. The byte offset from
/// the start of the text is carried alongside so ranges can slice the text
/// they were computed from without another lookup.
///
/// Ordering compares rows, then columns, then offsets.
///
/// # Example
///
/// ```
/// use loupe_core::Position;
///
/// let pos = Position::new(2, 4, 17);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.column(), 4);
/// assert_eq!(pos.offset(), 17);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-indexed row.
    pub row: usize,
    /// Zero-indexed column (byte offset within the row).
    pub column: usize,
    /// Byte offset from the start of the text.
    pub offset: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, column: usize, offset: usize) -> Self {
        Self {
            row,
            column,
            offset,
        }
    }

    /// Returns the zero-indexed row.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-indexed column.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the byte offset from the start of the text.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Expresses this position relative to `origin`.
    ///
    /// On the origin's row the column is shifted by the origin's column; on
    /// later rows only the row is shifted. Positions before the origin
    /// saturate at zero.
    #[must_use]
    pub const fn relative_to(&self, origin: Self) -> Self {
        let row = self.row.saturating_sub(origin.row);
        let column = if row == 0 {
            self.column.saturating_sub(origin.column)
        } else {
            self.column
        };
        Self {
            row,
            column,
            offset: self.offset.saturating_sub(origin.offset),
        }
    }

    /// Inverse of [`Position::relative_to`]: resolves a relative position
    /// against `origin`.
    #[must_use]
    pub const fn absolute_from(&self, origin: Self) -> Self {
        let column = if self.row == 0 {
            self.column.saturating_add(origin.column)
        } else {
            self.column
        };
        Self {
            row: self.row.saturating_add(origin.row),
            column,
            offset: self.offset.saturating_add(origin.offset),
        }
    }
}
