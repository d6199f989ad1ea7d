//! Integration tests for the REPL surface.
//!
//! Drives the REPL with a scripted line editor and script files.

use std::path::PathBuf;

use folio_runtime::{Flow, LineEditor, ReadResult, Repl, ReplConfig};
use folio_terminal::{Catalog, Game, Interpreter, Result};

/// Replays a fixed list of editor events.
struct ScriptedEditor {
    events: Vec<ReadResult>,
}

impl ScriptedEditor {
    fn lines(lines: &[&str]) -> Self {
        Self {
            events: lines
                .iter()
                .rev()
                .map(|l| ReadResult::Line((*l).to_string()))
                .collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.events.pop().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn repl(editor: ScriptedEditor) -> Repl<ScriptedEditor> {
    Repl::with_editor(
        editor,
        Interpreter::new(Catalog::default()),
        ReplConfig::plain().with_banner(false),
    )
}

fn temp_script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("folio-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn interrupted_line_is_ignored() {
    let mut editor = ScriptedEditor::lines(&["help"]);
    editor.events.push(ReadResult::Interrupted);
    let mut repl = repl(editor);

    repl.run().unwrap();
    assert_eq!(repl.session().history().len(), 1);
}

#[test]
fn winning_session_through_the_prompt() {
    let mut repl = repl(ScriptedEditor::lines(&[
        "hack", "red", "blue", "green", "python", "42",
    ]));

    repl.run().unwrap();
    assert_eq!(repl.session().game(), &Game::Won);
    assert_eq!(repl.session().history().len(), 6);
}

#[test]
fn clear_through_the_prompt() {
    let mut repl = repl(ScriptedEditor::lines(&["about", "skills", "clear", "help"]));

    repl.run().unwrap();
    let inputs: Vec<_> = repl
        .session()
        .history()
        .iter()
        .map(|e| e.input.clone())
        .collect();
    assert_eq!(inputs, ["help"]);
}

#[test]
fn script_file_runs_every_line() {
    let path = temp_script("walkthrough.txt", "hack\nred\n\nblue\ngreen\n");
    let mut repl = repl(ScriptedEditor::lines(&[]));

    assert_eq!(repl.run_script(&path).unwrap(), Flow::Continue);
    assert_eq!(repl.session().game().state().unwrap().level(), 1);
    assert_eq!(repl.session().history().len(), 4);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn script_exit_stops_early() {
    let path = temp_script("exit.txt", "about\nexit\nskills\n");
    let mut repl = repl(ScriptedEditor::lines(&[]));

    assert_eq!(repl.run_script(&path).unwrap(), Flow::Exit);
    assert_eq!(repl.session().history().len(), 1);

    std::fs::remove_file(path).unwrap();
}
