//! Catalog tests.
//!
//! Tests for interpreting against content loaded from TOML.

use folio_terminal::{Catalog, ErrorKind, Interpreter, Response, Session};

const CUSTOM: &str = r#"
welcome = "Welcome to the lab."

[commands]
help = "Try 'hobbies'."
hobbies = "Climbing and Rust."

[[levels]]
kind = "sequence"
tokens = ["up", "up", "down"]
description = "Enter the cheat code."

[[levels]]
kind = "word"
tokens = ["ferris"]
description = "Name the crab."
hint = "The Rust mascot."
"#;

#[test]
fn custom_commands_replace_defaults() {
    let interp = Interpreter::new(Catalog::from_toml(CUSTOM).unwrap());
    let mut session = Session::new();

    let Response::Output(out) = interp.execute(&mut session, "Hobbies") else {
        panic!("expected output");
    };
    assert_eq!(out.to_plain(), "Climbing and Rust.");

    let Response::Output(out) = interp.execute(&mut session, "skills") else {
        panic!("expected output");
    };
    assert!(out.to_plain().starts_with("Command not found: skills."));
    assert_eq!(interp.catalog().welcome(), "Welcome to the lab.");
}

#[test]
fn custom_levels_drive_the_game() {
    let interp = Interpreter::new(Catalog::from_toml(CUSTOM).unwrap());
    let mut session = Session::new();

    for line in ["hack", "UP", "up", "Down"] {
        interp.execute(&mut session, line);
    }
    assert_eq!(session.game().state().unwrap().level(), 1);

    let Response::Output(out) = interp.execute(&mut session, "ferris") else {
        panic!("expected output");
    };
    assert!(out.contains("SYSTEM SUCCESSFULLY HACKED!"));
    assert!(!session.is_game_active());
}

#[test]
fn repeated_tokens_must_each_be_entered() {
    let interp = Interpreter::new(Catalog::from_toml(CUSTOM).unwrap());
    let mut session = Session::new();

    for line in ["hack", "up", "down"] {
        interp.execute(&mut session, line);
    }
    let state = session.game().state().unwrap();
    assert_eq!(state.progress(), ["UP"]);
    assert_eq!(state.attempts_remaining(), 2);
}

#[test]
fn invalid_catalog_is_rejected() {
    let err = Catalog::from_toml(
        r#"
        [commands]
        hack = "nope"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCatalog(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Catalog::from_toml("[[levels]\nkind = ").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CatalogParse(_)));
}
