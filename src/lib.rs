//! Folio - Portfolio terminal
//!
//! This crate re-exports both layers of the terminal for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: folio_runtime   — REPL, line editing, rendering, CLI, logging
//! Layer 0: folio_terminal  — Session, commands, levels, game engine, interpreter
//! ```

pub use folio_runtime as runtime;
pub use folio_terminal as terminal;
