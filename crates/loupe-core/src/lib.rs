//! Core text model for the Loupe pattern engine.
//!
//! This crate provides the value types every other Loupe crate builds on:
//! positions and ranges inside a text, the offset converter that maps byte
//! offsets to row/column coordinates, immutable documents, text edits with
//! the batching [`DocumentEditor`], and engine configuration.
//!
//! # Core types
//!
//! - [`Position`] and [`Range`]: zero-based coordinates and half-open spans
//! - [`OffsetConverter`]: byte offset to position mapping for one text
//! - [`Document`]: language identity plus content, replaced on change
//! - [`TextEdit`] and [`DocumentEditor`]: batched, atomic text edits
//! - [`EngineConfig`]: limits shared by the pattern finders
//!
//! # Example
//!
//! ```
//! use loupe_core::{Document, Range};
//!
//! let document = Document::new("json", "{\n  \"a\": 1\n}");
//! let converter = document.offset_converter();
//! let position = converter.position_at(5);
//! assert_eq!((position.row(), position.column()), (1, 3));
//! ```

mod config;
mod document;
mod edit;
mod error;
mod offset;
mod position;
mod range;

pub use config::EngineConfig;
pub use document::Document;
pub use edit::{DocumentEditor, DocumentObserver, TextEdit, apply_text_edits};
pub use error::{EditError, RangeError};
pub use offset::OffsetConverter;
pub use position::Position;
pub use range::Range;

#[cfg(test)]
mod tests;
