//! Half-open spans between two positions.

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::offset::OffsetConverter;
use crate::position::Position;

/// A half-open span of text: `start` is inclusive and `end` is exclusive.
///
/// A range always satisfies `start <= end`. Ranges are immutable; every
/// transformation returns a new value.
///
/// # Example
///
/// ```
/// use loupe_core::Range;
///
/// let range = Range::from_offsets_in_text("width: 10px", 7, 9)?;
/// assert_eq!(range.byte_range(), 7..9);
/// assert!(!range.is_empty());
/// # Ok::<(), loupe_core::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Creates a range from ordered endpoints.
    ///
    /// Callers must pass `start <= end`; debug builds assert it. Use
    /// [`Range::try_new`] when the order is not known to hold.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {start:?} lies after end {end:?}");
        Self { start, end }
    }

    /// Creates a range, reporting reversed endpoints as an error.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Reversed`] when `start > end`.
    pub fn try_new(start: Position, end: Position) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a zero-width range at `position`.
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Creates a range from two byte offsets into `text`.
    ///
    /// Offsets past the end of the text are clamped to its end. Equal
    /// offsets yield a zero-width range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Reversed`] when `start` lies after `end`.
    pub fn from_offsets_in_text(text: &str, start: usize, end: usize) -> Result<Self, RangeError> {
        OffsetConverter::new(text).range(start, end)
    }

    /// Creates a range spanning two positions given in either order.
    ///
    /// Intended for user selections, where the anchor may follow the head.
    #[must_use]
    pub fn from_unsorted_positions(first: Position, second: Position) -> Self {
        if first <= second {
            Self::new(first, second)
        } else {
            Self::new(second, first)
        }
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` when the range covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the range in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns the byte offsets covered by the range.
    #[must_use]
    pub const fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }

    /// Returns `true` when `position` lies inside the range.
    ///
    /// The end is exclusive, except that a zero-width range contains its own
    /// position.
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        if self.is_empty() {
            return position == self.start;
        }
        self.start <= position && position < self.end
    }

    /// Returns `true` when `other` lies entirely inside this range.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` when the two ranges share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Expresses this range relative to `origin`.
    #[must_use]
    pub const fn relative_to(&self, origin: Position) -> Self {
        Self {
            start: self.start.relative_to(origin),
            end: self.end.relative_to(origin),
        }
    }

    /// Resolves a relative range against `origin`.
    #[must_use]
    pub const fn absolute_from(&self, origin: Position) -> Self {
        Self {
            start: self.start.absolute_from(origin),
            end: self.end.absolute_from(origin),
        }
    }
}
