//! REPL, CLI, and rendering for the portfolio terminal.
//!
//! This crate provides:
//! - [`Repl`] - Interactive terminal around the interpreter
//! - [`Renderer`] - ANSI rendering of interpreter output
//! - [`logging`] - Structured logging setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::Renderer;
pub use repl::{Flow, Repl};
