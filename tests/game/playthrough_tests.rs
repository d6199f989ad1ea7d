//! Playthrough tests.
//!
//! Drives complete games through the interpreter.

use folio_terminal::{Game, Interpreter, MAX_ATTEMPTS, Output, Response, Session};

/// Runs lines and returns the output of the last one.
fn play(interp: &Interpreter, session: &mut Session, lines: &[&str]) -> Output {
    let mut last = None;
    for line in lines {
        if let Response::Output(out) = interp.execute(session, line) {
            last = Some(out);
        }
    }
    last.expect("at least one line should produce output")
}

#[test]
fn hack_starts_fresh() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    play(&interp, &mut session, &["hack"]);

    let state = session.game().state().unwrap();
    assert_eq!(state.level(), 0);
    assert!(state.progress().is_empty());
    assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
    assert_eq!(MAX_ATTEMPTS, 3);
}

#[test]
fn first_level_in_any_case() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    play(&interp, &mut session, &["hack"]);

    let first = play(&interp, &mut session, &["Red"]);
    assert!(first.contains("Code accepted!"));
    assert!(first.contains("Next required code: BLUE"));

    let second = play(&interp, &mut session, &["bLuE"]);
    assert!(second.contains("Code accepted!"));
    assert!(second.contains("Progress: 2/3 codes entered"));

    let done = play(&interp, &mut session, &["green"]);
    assert!(done.contains("LEVEL 1 COMPLETE!"));
    assert!(done.contains("Level 2:"));
    assert_eq!(session.game().state().unwrap().level(), 1);
}

#[test]
fn full_winning_run() {
    let interp = Interpreter::default();
    let mut session = Session::new();

    let level3 = play(
        &interp,
        &mut session,
        &["hack", "red", "blue", "green", "python"],
    );
    assert!(level3.contains("LEVEL 2 COMPLETE!"));
    assert!(level3.contains("Hint: Calculate: (8 * 6) - 6"));

    let victory = play(&interp, &mut session, &["42"]);
    assert!(victory.contains("SYSTEM SUCCESSFULLY HACKED!"));
    assert_eq!(session.game(), &Game::Won);
    assert!(!session.is_game_active());
}

#[test]
fn after_victory_input_is_a_command_lookup() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    play(
        &interp,
        &mut session,
        &["hack", "red", "blue", "green", "python", "42"],
    );

    let out = play(&interp, &mut session, &["42"]);
    assert_eq!(
        out.to_plain(),
        "Command not found: 42. Type 'help' for available commands."
    );
    let about = play(&interp, &mut session, &["about"]);
    assert!(about.to_plain().starts_with("Hi! I'm Tom"));
}

#[test]
fn hack_after_victory_restarts() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    play(
        &interp,
        &mut session,
        &["hack", "red", "blue", "green", "python", "42", "hack"],
    );

    let state = session.game().state().unwrap();
    assert_eq!(state.level(), 0);
    assert_eq!(state.attempts_remaining(), 3);
}

#[test]
fn every_game_step_is_recorded() {
    let interp = Interpreter::default();
    let mut session = Session::new();
    play(&interp, &mut session, &["hack", "red", "oops", "blue"]);

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.history()[2].input, "oops");
}
