//! Unit and behaviour tests for loupe-template.

mod valuator_tests;
