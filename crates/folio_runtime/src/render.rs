//! ANSI rendering of interpreter output.

use folio_terminal::{Line, Output, Tone};

const RESET: &str = "\x1b[0m";

/// Clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Turns [`Output`] into printable text.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer; without color, tone hints are dropped.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Returns true if this renderer emits ANSI escapes.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Renders an output to a string without a trailing newline.
    #[must_use]
    pub fn render(&self, output: &Output) -> String {
        match output {
            Output::Text(text) => text.clone(),
            Output::Lines(lines) => lines
                .iter()
                .map(|line| self.render_line(line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Renders an echoed input line, e.g. `➜ help`.
    #[must_use]
    pub fn render_input(&self, input: &str) -> String {
        if self.color {
            format!("\x1b[32m➜{RESET} \x1b[90m{input}{RESET}")
        } else {
            format!("➜ {input}")
        }
    }

    /// Renders the welcome line.
    #[must_use]
    pub fn render_welcome(&self, welcome: &str) -> String {
        if self.color {
            format!("\x1b[32m{welcome}{RESET}")
        } else {
            welcome.to_string()
        }
    }

    fn render_line(&self, line: &Line) -> String {
        match tone_code(line.tone) {
            Some(code) if self.color => format!("\x1b[{code}m{}{RESET}", line.text),
            _ => line.text.clone(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// SGR parameters for each tone.
const fn tone_code(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Plain => None,
        Tone::Success => Some("32"),
        Tone::Warning => Some("33"),
        Tone::Danger => Some("31"),
        Tone::Info => Some("36"),
        Tone::Code => Some("1"),
        Tone::Muted => Some("2"),
    }
}
