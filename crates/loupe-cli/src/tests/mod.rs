//! Unit and behaviour tests for the CLI runtime.

mod support;
