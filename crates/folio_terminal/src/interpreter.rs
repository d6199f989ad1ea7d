//! Command dispatch.
//!
//! Each input line is handled in a fixed order: `clear`, `exit`, the running
//! game, `hack`, then the canned command table. Only the game and command
//! branches record an exchange.

use crate::catalog::Catalog;
use crate::commands::ControlVerb;
use crate::game::GameEngine;
use crate::output::Output;
use crate::session::Session;

/// What the housing surface should do after a line is handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// An exchange was recorded with this output.
    Output(Output),
    /// History was emptied; nothing was recorded.
    Cleared,
    /// The terminal should be hidden; nothing changed.
    Exit,
}

/// A new session together with the response that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The session after the line was handled.
    pub session: Session,
    /// The response for the housing surface.
    pub response: Response,
}

/// Trims and lower-cases input for command matching.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// The terminal's command interpreter.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    catalog: Catalog,
}

impl Interpreter {
    /// Creates an interpreter over the given catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handles a line without touching `session`, returning the next session.
    #[must_use]
    pub fn step(&self, session: &Session, input: &str) -> Step {
        let mut next = session.clone();
        let response = self.execute(&mut next, input);
        Step {
            session: next,
            response,
        }
    }

    /// Handles a line, updating `session` in place.
    pub fn execute(&self, session: &mut Session, input: &str) -> Response {
        let normalized = normalize(input);
        let verb = ControlVerb::parse(&normalized);

        match verb {
            Some(ControlVerb::Clear) => {
                tracing::debug!(cleared = session.history().len(), "clear");
                session.clear_history();
                return Response::Cleared;
            }
            Some(ControlVerb::Exit) => {
                tracing::debug!("exit");
                return Response::Exit;
            }
            _ => {}
        }

        let engine = GameEngine::new(self.catalog.levels());

        if let Some(state) = session.game().state() {
            let transition = engine.submit(state, input);
            tracing::debug!(outcome = ?transition.outcome, "game input");
            session.set_game(transition.game);
            return Self::respond(session, input, transition.output);
        }

        if verb == Some(ControlVerb::Hack) {
            let transition = engine.start();
            session.set_game(transition.game);
            return Self::respond(session, input, transition.output);
        }

        let output = match self.catalog.commands().lookup(&normalized) {
            Some(text) => {
                tracing::debug!(command = %normalized, "canned command");
                Output::text(text)
            }
            None => {
                tracing::debug!(input, "unknown command");
                Output::Text(format!(
                    "Command not found: {input}. Type 'help' for available commands."
                ))
            }
        };
        Self::respond(session, input, output)
    }

    fn respond(session: &mut Session, input: &str, output: Output) -> Response {
        session.record(input, output.clone());
        Response::Output(output)
    }
}
