//! The terminal REPL.
//!
//! The REPL is the housing surface around the interpreter: it rejects blank
//! lines, renders responses, repaints on `clear`, and stops on `exit`.

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{CLEAR_SCREEN, Renderer};
use folio_terminal::{Error, Interpreter, Response, Result, Session};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// The terminal was closed.
    Exit,
}

/// The interactive terminal.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Command interpreter and its catalog.
    interpreter: Interpreter,

    /// History and game state.
    session: Session,

    /// Prompts, banner, and color.
    config: ReplConfig,

    /// Output formatting.
    renderer: Renderer,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(interpreter: Interpreter, config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(interpreter.catalog())?;
        Ok(Self::with_editor(editor, interpreter, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, interpreter: Interpreter, config: ReplConfig) -> Self {
        let renderer = Renderer::new(config.color);
        Self {
            editor,
            interpreter,
            session: Session::new(),
            config,
            renderer,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// The prompt for the current game state.
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.config.prompt_for(self.session.is_game_active())
    }

    /// Runs the REPL loop until `exit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? == Flow::Continue {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    fn read_eval_print(&mut self) -> Result<Flow> {
        let prompt = self.prompt().to_string();
        let line = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(Flow::Continue);
            }
            ReadResult::Eof => return Ok(Flow::Exit),
        };

        // Blank lines never reach the interpreter
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        self.editor.add_history(&line);
        let response = self.eval(&line);
        Ok(self.print_response(&response))
    }

    /// Hands one line to the interpreter without printing anything.
    pub fn eval(&mut self, line: &str) -> Response {
        self.interpreter.execute(&mut self.session, line)
    }

    /// Feeds a script through the interpreter, echoing each line.
    ///
    /// Blank lines are skipped. Stops early at `exit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_script(&mut self, path: &Path) -> Result<Flow> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), "running script");
        Ok(self.run_lines(source.lines()))
    }

    /// Feeds lines through the interpreter, echoing each one.
    pub fn run_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Flow {
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            println!("{}", self.renderer.render_input(line));
            let response = self.eval(line);
            if self.print_response(&response) == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn print_response(&self, response: &Response) -> Flow {
        match response {
            Response::Output(output) => {
                println!("{}\n", self.renderer.render(output));
                Flow::Continue
            }
            Response::Cleared => {
                if self.renderer.color() {
                    print!("{CLEAR_SCREEN}");
                }
                self.print_welcome();
                Flow::Continue
            }
            Response::Exit => Flow::Exit,
        }
    }

    fn print_welcome(&self) {
        println!(
            "{}\n",
            self.renderer
                .render_welcome(self.interpreter.catalog().welcome())
        );
        let _ = io::stdout().flush();
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        if self.renderer.color() {
            println!("\x1b[1;36m");
        }
        println!("  __       _ _       ");
        println!(" / _| ___ | (_) ___  ");
        println!("| |_ / _ \\| | |/ _ \\ ");
        println!("|  _| (_) | | | (_) |");
        println!("|_|  \\___/|_|_|\\___/ ");
        if self.renderer.color() {
            println!("\x1b[0m");
        } else {
            println!();
        }
        self.print_welcome();
    }
}
