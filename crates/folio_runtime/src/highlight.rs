//! Input highlighting for the REPL.

use std::borrow::Cow;

use folio_terminal::{Catalog, ControlVerb, normalize};

/// Highlights recognized commands as the user types.
pub struct TerminalHighlighter {
    commands: Vec<String>,
}

impl TerminalHighlighter {
    /// Creates a highlighter that knows the catalog's commands.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            commands: catalog.commands().keys().map(String::from).collect(),
        }
    }

    /// Highlight a line of input.
    ///
    /// Control verbs are green, canned commands bold, anything else is left
    /// alone. Surrounding whitespace is preserved.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let normalized = normalize(line);
        let color = if ControlVerb::parse(&normalized).is_some() {
            "\x1b[1;32m"
        } else if self.commands.iter().any(|c| *c == normalized) {
            "\x1b[1m"
        } else {
            return Cow::Borrowed(line);
        };

        let start = line.len() - line.trim_start().len();
        let end = line.trim_end().len();
        Cow::Owned(format!(
            "{}{color}{}\x1b[0m{}",
            &line[..start],
            &line[start..end],
            &line[end..]
        ))
    }
}
