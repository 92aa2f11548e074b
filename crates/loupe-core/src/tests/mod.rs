//! Unit tests for `loupe_core` types.

mod document_tests;
mod edit_tests;
mod offset_tests;
