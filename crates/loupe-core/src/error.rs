//! Error types for ranges and edits.

use thiserror::Error;

use crate::position::Position;

/// Errors raised while constructing a [`Range`](crate::Range).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RangeError {
    /// The start of the range lies after its end.
    ///
    /// Reversed endpoints are reported rather than swapped so that callers
    /// computing offsets in the wrong order notice the mistake.
    #[error("range start {start:?} lies after end {end:?}")]
    Reversed {
        /// The requested start.
        start: Position,
        /// The requested end.
        end: Position,
    },
}

/// Errors raised while applying a batch of text edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditError {
    /// An edit reaches past the end of the text.
    #[error("edit at bytes {start}..{end} is outside the text (length {length})")]
    OutOfBounds {
        /// Start byte of the offending edit.
        start: usize,
        /// End byte of the offending edit.
        end: usize,
        /// Length of the text the batch was applied to.
        length: usize,
    },

    /// An edit boundary falls inside a multi-byte character.
    #[error("edit boundary at byte {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary {
        /// The offending byte offset.
        offset: usize,
    },

    /// Two edits in the same batch touch overlapping text.
    #[error("edits at bytes {first_start}..{first_end} and {second_start}..{second_end} overlap")]
    Overlapping {
        /// Start byte of the earlier edit.
        first_start: usize,
        /// End byte of the earlier edit.
        first_end: usize,
        /// Start byte of the later edit.
        second_start: usize,
        /// End byte of the later edit.
        second_end: usize,
    },
}
