//! Command interpreter and hacking puzzle for the portfolio terminal.
//!
//! This crate provides:
//! - [`Interpreter`] - Dispatches one input line against a [`Session`]
//! - [`GameEngine`] - The three-level hacking puzzle state machine
//! - [`Catalog`] - Canned commands, levels, and the welcome line
//! - [`Output`] - Plain or structured responses with emphasis hints

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod commands;
pub mod error;
pub mod game;
pub mod interpreter;
pub mod level;
pub mod output;
pub mod session;

pub use catalog::Catalog;
pub use commands::{CommandTable, ControlVerb};
pub use error::{Error, ErrorKind, Result};
pub use game::{Game, GameEngine, GameState, MAX_ATTEMPTS, Outcome, Transition};
pub use interpreter::{Interpreter, Response, Step, normalize};
pub use level::{LevelKind, LevelSpec};
pub use output::{Line, Output, OutputBuilder, Tone};
pub use session::{Exchange, Session};
