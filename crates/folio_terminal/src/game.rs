//! The hacking puzzle state machine.
//!
//! A game moves through the catalog's levels in order. Sequence levels take
//! their tokens one at a time; word and math levels take a single token.
//! Every wrong answer costs an attempt, and running out of attempts locks
//! the game until the next `hack`.
//!
//! ```text
//!            hack                 last level solved
//! Inactive ───────► InProgress ─────────────────────► Won
//!    ▲                │   ▲ │
//!    │                │   │ │ level solved / code accepted / wrong answer
//!    │                │   └─┘
//!    │                │ attempts exhausted
//!    │                ▼
//!    └────────── LockedOut        (hack restarts from any inactive state)
//! ```

use crate::level::LevelSpec;
use crate::output::{Output, Tone};

/// Attempts granted at the start of every game.
pub const MAX_ATTEMPTS: u8 = 3;

/// Progress through a puzzle that is still being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    level: usize,
    progress: Vec<String>,
    attempts_remaining: u8,
}

impl GameState {
    /// A fresh game at the first level.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: 0,
            progress: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
        }
    }

    /// Index of the current level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Tokens accepted so far on the current level.
    #[must_use]
    pub fn progress(&self) -> &[String] {
        &self.progress
    }

    /// Wrong answers still allowed before lockout.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The puzzle's lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Game {
    /// No game has been started in this session.
    #[default]
    Inactive,
    /// A puzzle is being played.
    InProgress(GameState),
    /// The last level was solved.
    Won,
    /// Attempts ran out.
    LockedOut,
}

impl Game {
    /// Returns true while a puzzle is being played.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }

    /// Returns the in-progress state, if any.
    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        match self {
            Self::InProgress(state) => Some(state),
            _ => None,
        }
    }
}

/// What a single game step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new game began.
    Started,
    /// A sequence token was accepted; the level continues.
    Accepted {
        /// Tokens accepted so far.
        entered: usize,
        /// Tokens the level requires.
        required: usize,
    },
    /// A level was solved and play moved to `next`.
    LevelComplete {
        /// Index of the level now being played.
        next: usize,
    },
    /// The final level was solved.
    Won,
    /// The answer was wrong; attempts remain.
    WrongAnswer {
        /// Attempts left.
        remaining: u8,
    },
    /// The answer was wrong and no attempts remain.
    LockedOut,
    /// The stored level no longer exists in the catalog.
    Abandoned,
}

/// The result of one game step: the new game, its output, and what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The game after the step.
    pub game: Game,
    /// Text to show the user.
    pub output: Output,
    /// Summary of the step.
    pub outcome: Outcome,
}

/// Drives the puzzle over a fixed level list.
#[derive(Clone, Copy, Debug)]
pub struct GameEngine<'a> {
    levels: &'a [LevelSpec],
}

impl<'a> GameEngine<'a> {
    /// Creates an engine over the given levels.
    #[must_use]
    pub const fn new(levels: &'a [LevelSpec]) -> Self {
        Self { levels }
    }

    /// Starts a new game at the first level, discarding any previous game.
    #[must_use]
    pub fn start(&self) -> Transition {
        let state = GameState::new();
        let mut output = Output::builder().line(Tone::Success, "🔒 SECURITY BREACH INITIATED...");

        if let Some(level) = self.levels.first() {
            output = output.line(Tone::Plain, format!("Level 1: {}", level.description()));
            if level.is_sequence() {
                output = output
                    .line(Tone::Code, format!("Sequence: {}", level.sequence_display()))
                    .line(Tone::Warning, "IMPORTANT: Enter one code at a time!")
                    .line(Tone::Plain, format!("Example: {}", example_walkthrough(level)));
            }
            output = output.line(
                Tone::Muted,
                format!("Attempts remaining: {}", state.attempts_remaining),
            );
            output = match (level.is_sequence(), level.expected(0)) {
                (true, Some(first)) => {
                    output.line(Tone::Muted, format!("Next required code: {first}"))
                }
                _ => output.line_opt(Tone::Info, level.hint().map(|h| format!("Hint: {h}"))),
            };
        }

        tracing::info!(levels = self.levels.len(), "hacking game started");
        Transition {
            game: Game::InProgress(state),
            output: output.build(),
            outcome: Outcome::Started,
        }
    }

    /// Applies one line of input to an in-progress game.
    #[must_use]
    pub fn submit(&self, state: &GameState, input: &str) -> Transition {
        let Some(level) = self.levels.get(state.level) else {
            tracing::warn!(level = state.level, "game refers to a missing level");
            return Transition {
                game: Game::Inactive,
                output: Output::builder()
                    .line(Tone::Danger, "The puzzle has changed since this game began.")
                    .line(Tone::Plain, "Type 'hack' to start again.")
                    .build(),
                outcome: Outcome::Abandoned,
            };
        };

        let code = input.to_uppercase();
        let Some(expected) = level.expected(state.progress.len()) else {
            return self.wrong_answer(state, level);
        };
        if code != expected {
            return self.wrong_answer(state, level);
        }

        let mut progress = state.progress.clone();
        progress.push(code);
        let required = level.tokens().len();
        if progress.len() == required {
            return self.level_complete(state);
        }

        let next = level.expected(progress.len()).unwrap_or_default();
        let output = Output::builder()
            .line(Tone::Success, "✅ Code accepted!")
            .line(
                Tone::Code,
                format!("Full sequence: {}", level.sequence_display()),
            )
            .line(Tone::Warning, format!("Next required code: {next}"))
            .line(
                Tone::Muted,
                format!("Progress: {}/{required} codes entered", progress.len()),
            )
            .build();

        let entered = progress.len();
        tracing::debug!(level = state.level, entered, required, "code accepted");
        Transition {
            game: Game::InProgress(GameState {
                progress,
                ..state.clone()
            }),
            output,
            outcome: Outcome::Accepted { entered, required },
        }
    }

    fn level_complete(&self, state: &GameState) -> Transition {
        let completed = state.level;
        let next = completed + 1;

        let Some(next_level) = self.levels.get(next) else {
            tracing::info!("hacking game won");
            return Transition {
                game: Game::Won,
                output: Output::builder()
                    .line(Tone::Success, "🎉 SYSTEM SUCCESSFULLY HACKED! 🎉")
                    .line(Tone::Success, "All security protocols bypassed.")
                    .line(Tone::Muted, "Achievement unlocked: Master Hacker")
                    .build(),
                outcome: Outcome::Won,
            };
        };

        let mut output = Output::builder()
            .line(Tone::Success, format!("✨ LEVEL {} COMPLETE!", completed + 1))
            .line(
                Tone::Plain,
                format!("Level {}: {}", next + 1, next_level.description()),
            );
        if next_level.is_sequence() {
            output = output.line(
                Tone::Code,
                format!("Sequence: {}", next_level.sequence_display()),
            );
        }
        let output = output
            .line_opt(Tone::Info, next_level.hint().map(|h| format!("Hint: {h}")))
            .build();

        tracing::debug!(completed, next, "level complete");
        Transition {
            game: Game::InProgress(GameState {
                level: next,
                progress: Vec::new(),
                attempts_remaining: state.attempts_remaining,
            }),
            output,
            outcome: Outcome::LevelComplete { next },
        }
    }

    #[allow(clippy::unused_self)]
    fn wrong_answer(&self, state: &GameState, level: &LevelSpec) -> Transition {
        let remaining = state.attempts_remaining.saturating_sub(1);

        if remaining == 0 {
            tracing::info!(level = state.level, "hacking game locked out");
            return Transition {
                game: Game::LockedOut,
                output: Output::builder()
                    .line(Tone::Danger, "❌ SECURITY SYSTEM LOCKED!")
                    .line(
                        Tone::Danger,
                        "Too many failed attempts. Type 'hack' to try again.",
                    )
                    .build(),
                outcome: Outcome::LockedOut,
            };
        }

        let output = Output::builder()
            .line(Tone::Warning, "❌ Incorrect! Try again.")
            .line(Tone::Muted, format!("Attempts remaining: {remaining}"))
            .line_opt(Tone::Info, level.hint().map(|h| format!("Hint: {h}")))
            .build();

        tracing::debug!(level = state.level, remaining, "wrong answer");
        Transition {
            game: Game::InProgress(GameState {
                attempts_remaining: remaining,
                ..state.clone()
            }),
            output,
            outcome: Outcome::WrongAnswer { remaining },
        }
    }
}

/// `First type "RED", then "BLUE", then "GREEN"`
fn example_walkthrough(level: &LevelSpec) -> String {
    level
        .tokens()
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == 0 {
                format!("First type \"{token}\"")
            } else {
                format!("then \"{token}\"")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
