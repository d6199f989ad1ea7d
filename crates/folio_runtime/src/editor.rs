//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use crate::highlight::TerminalHighlighter;
use folio_terminal::{Catalog, ControlVerb, Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;

/// Lines of input history kept by the editor.
const MAX_HISTORY: usize = 500;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct TerminalHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: TerminalHighlighter,
}

impl Highlighter for TerminalHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the first word against known command names.
struct CommandCompleter {
    keywords: Vec<String>,
}

impl CommandCompleter {
    fn new(catalog: &Catalog) -> Self {
        Self {
            keywords: default_keywords(catalog),
        }
    }

    fn candidates(&self, word: &str) -> Vec<Pair> {
        let word = word.to_lowercase();
        self.keywords
            .iter()
            .filter(|kw| kw.starts_with(&word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos].len() - line[..pos].trim_start().len();

        // Commands are single words
        if line[start..pos].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        Ok((start, self.candidates(&line[start..pos])))
    }
}

/// Canned command names and control verbs, sorted.
#[must_use]
pub fn default_keywords(catalog: &Catalog) -> Vec<String> {
    let mut keywords: Vec<String> = catalog
        .commands()
        .keys()
        .map(String::from)
        .chain(ControlVerb::ALL.iter().map(|v| v.keyword().to_string()))
        .collect();
    keywords.sort();
    keywords
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<TerminalHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor for the given catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(MAX_HISTORY)
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = TerminalHelper {
            completer: CommandCompleter::new(catalog),
            hinter: HistoryHinter::new(),
            highlighter: TerminalHighlighter::new(catalog),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
