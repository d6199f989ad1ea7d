//! Renderable interpreter output.
//!
//! A response is either a plain string or a list of lines, each carrying an
//! emphasis hint. Surfaces without rich rendering display the lines joined
//! by newlines and ignore the hints.

use std::fmt;

/// Emphasis hint for one line of structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    /// No emphasis.
    #[default]
    Plain,
    /// Accepted input, progress, victory.
    Success,
    /// Instructions the user must not miss.
    Warning,
    /// Rejected input, lockout.
    Danger,
    /// Hints.
    Info,
    /// Codes and sequences.
    Code,
    /// Secondary details such as counters.
    Muted,
}

/// One line of structured output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// The line text, without a trailing newline.
    pub text: String,
    /// Emphasis hint.
    pub tone: Tone,
}

impl Line {
    /// Creates a line with the given tone.
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// The rendered response of one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Plain text, possibly spanning several lines.
    Text(String),
    /// Structured lines with emphasis hints.
    Lines(Vec<Line>),
}

impl Output {
    /// Creates plain text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Starts a structured output.
    #[must_use]
    pub fn builder() -> OutputBuilder {
        OutputBuilder::default()
    }

    /// Returns the output as plain text, lines joined by `\n`.
    #[must_use]
    pub fn to_plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Returns true if any line of the output contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.contains(needle),
            Self::Lines(lines) => lines.iter().any(|line| line.text.contains(needle)),
        }
    }

    /// Returns the structured lines, or `None` for plain text.
    #[must_use]
    pub fn lines(&self) -> Option<&[Line]> {
        match self {
            Self::Text(_) => None,
            Self::Lines(lines) => Some(lines),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Builder for [`Output::Lines`].
#[derive(Debug, Default)]
pub struct OutputBuilder {
    lines: Vec<Line>,
}

impl OutputBuilder {
    /// Appends a line with the given tone.
    #[must_use]
    pub fn line(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.lines.push(Line::new(tone, text));
        self
    }

    /// Appends a line only when `text` is present.
    #[must_use]
    pub fn line_opt(self, tone: Tone, text: Option<String>) -> Self {
        match text {
            Some(text) => self.line(tone, text),
            None => self,
        }
    }

    /// Finishes the output.
    #[must_use]
    pub fn build(self) -> Output {
        Output::Lines(self.lines)
    }
}
