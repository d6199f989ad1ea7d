//! Session state for one open terminal.
//!
//! The session holds the exchange history and the puzzle state. History is
//! a persistent vector, so the interpreter can hand back a new session while
//! the previous one stays intact.

use im::Vector;

use crate::game::Game;
use crate::output::Output;

/// One input/output pair shown in the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    /// The text the user submitted, exactly as typed.
    pub input: String,
    /// The response.
    pub output: Output,
    /// Position in the session; strictly increasing, never reused.
    pub sequence: u64,
}

/// Conversation state for one terminal instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    history: Vector<Exchange>,
    game: Game,
    next_sequence: u64,
}

impl Session {
    /// Creates an empty session with no game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchanges in display order.
    #[must_use]
    pub const fn history(&self) -> &Vector<Exchange> {
        &self.history
    }

    /// The puzzle state.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns true while a puzzle is being played.
    #[must_use]
    pub const fn is_game_active(&self) -> bool {
        self.game.is_active()
    }

    /// The most recent exchange, if any.
    #[must_use]
    pub fn last_exchange(&self) -> Option<&Exchange> {
        self.history.last()
    }

    /// Appends an exchange and returns the sequence number it was given.
    pub fn record(&mut self, input: impl Into<String>, output: Output) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(Exchange {
            input: input.into(),
            output,
            sequence,
        });
        sequence
    }

    /// Empties the history. The game and the sequence counter are untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Replaces the puzzle state.
    pub fn set_game(&mut self, game: Game) {
        self.game = game;
    }
}
