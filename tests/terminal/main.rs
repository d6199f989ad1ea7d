//! Integration tests for command dispatch.
//!
//! Tests for the interpreter outside of the game:
//! - Canned commands and the unknown-command fallback
//! - `clear` and `exit` semantics
//! - Catalog overrides

mod catalog_tests;
mod dispatch_tests;
