//! Dispatch tests.
//!
//! Tests for command lookup, history recording, and control verbs.

use folio_terminal::{Game, Interpreter, Output, Response, Session};
use proptest::prelude::*;

fn output_of(response: Response) -> Output {
    match response {
        Response::Output(output) => output,
        other => panic!("expected output, got {other:?}"),
    }
}

// =============================================================================
// Canned commands
// =============================================================================

#[test]
fn every_canned_command_answers() {
    let interp = Interpreter::default();
    let mut session = Session::new();

    for (command, expected_start) in [
        ("help", "Available commands:"),
        ("about", "Hi! I'm Tom"),
        ("skills", "Technical Skills:"),
        ("projects", "Recent Projects:"),
        ("contact", "Email: "),
    ] {
        let out = output_of(interp.execute(&mut session, command));
        assert!(
            out.to_plain().starts_with(expected_start),
            "{command} answered {out}"
        );
    }

    assert_eq!(session.history().len(), 5);
}

#[test]
fn unknown_command_message_is_exact() {
    let interp = Interpreter::default();
    let mut session = Session::new();

    let out = output_of(interp.execute(&mut session, "ls -la"));
    assert_eq!(
        out.to_plain(),
        "Command not found: ls -la. Type 'help' for available commands."
    );
}

#[test]
fn history_keeps_raw_input_in_order() {
    let interp = Interpreter::default();
    let mut session = Session::new();

    for line in ["  Help", "ABOUT  ", "whoami"] {
        interp.execute(&mut session, line);
    }

    let inputs: Vec<_> = session.history().iter().map(|e| e.input.clone()).collect();
    assert_eq!(inputs, ["  Help", "ABOUT  ", "whoami"]);

    let sequences: Vec<_> = session.history().iter().map(|e| e.sequence).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// Control verbs
// =============================================================================

#[test]
fn clear_empties_history_and_records_nothing() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    interp.execute(&mut session, "help");
    interp.execute(&mut session, "nope");

    assert_eq!(interp.execute(&mut session, "clear"), Response::Cleared);
    assert!(session.history().is_empty());
}

#[test]
fn clear_is_idempotent() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    interp.execute(&mut session, "about");

    let once = interp.step(&session, "clear").session;
    let twice = interp.step(&once, "clear").session;
    assert_eq!(once, twice);
}

#[test]
fn clear_keeps_the_game() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    interp.execute(&mut session, "hack");
    interp.execute(&mut session, "red");

    interp.execute(&mut session, "  Clear ");
    assert!(session.history().is_empty());
    assert_eq!(session.game().state().unwrap().progress(), ["RED"]);
}

#[test]
fn exit_changes_nothing() {
    let interp = Interpreter::default();
    let session = Session::new();
    let session = interp.step(&session, "about").session;

    let step = interp.step(&session, "EXIT");
    assert_eq!(step.response, Response::Exit);
    assert_eq!(step.session, session);
}

#[test]
fn hack_records_an_exchange() {
    let interp = Interpreter::default();
    let step = interp.step(&Session::new(), "HACK");

    assert!(step.session.is_game_active());
    let exchange = step.session.last_exchange().unwrap();
    assert_eq!(exchange.input, "HACK");
    assert!(exchange.output.contains("SECURITY BREACH INITIATED"));
}

#[test]
fn commands_resume_after_game_ends() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    for line in ["hack", "a", "b", "c"] {
        interp.execute(&mut session, line);
    }
    assert_eq!(session.game(), &Game::LockedOut);

    let out = output_of(interp.execute(&mut session, "skills"));
    assert!(out.to_plain().starts_with("Technical Skills:"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn unknown_inputs_get_the_fallback(input in "[a-z]{1,12}( [a-z0-9]{1,6})?") {
        let interp = Interpreter::default();
        let normalized = input.trim().to_lowercase();
        prop_assume!(interp.catalog().commands().lookup(&normalized).is_none());
        prop_assume!(!["clear", "exit", "hack"].contains(&normalized.as_str()));

        let step = interp.step(&Session::new(), &input);
        prop_assert_eq!(
            step.response,
            Response::Output(Output::Text(format!(
                "Command not found: {input}. Type 'help' for available commands."
            )))
        );
        prop_assert_eq!(step.session.history().len(), 1);
    }

    #[test]
    fn clear_always_empties(lines in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let interp = Interpreter::default();
        let mut session = Session::new();
        for line in &lines {
            interp.execute(&mut session, line);
        }
        let game_before = session.game().clone();

        prop_assert_eq!(interp.execute(&mut session, "clear"), Response::Cleared);
        prop_assert!(session.history().is_empty());
        prop_assert_eq!(session.game(), &game_before);
    }
}
