//! Puzzle level definitions.
//!
//! Levels are static configuration: the game engine reads them but never
//! changes them. Tokens are stored upper-case so that matching only has to
//! upper-case the user's input.

/// What a level asks the player to type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelKind {
    /// Several tokens, entered one at a time in order.
    Sequence(Vec<String>),
    /// One word, found by solving a riddle.
    Word(String),
    /// One numeric string, found by solving an equation.
    Math(String),
}

impl LevelKind {
    /// Short lowercase name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sequence(_) => "sequence",
            Self::Word(_) => "word",
            Self::Math(_) => "math",
        }
    }
}

/// One stage of the hacking puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSpec {
    kind: LevelKind,
    description: String,
    hint: Option<String>,
}

impl LevelSpec {
    /// Creates a sequence level. Tokens are upper-cased.
    pub fn sequence<I, S>(tokens: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kind: LevelKind::Sequence(
                tokens
                    .into_iter()
                    .map(|t| t.as_ref().to_uppercase())
                    .collect(),
            ),
            description: description.into(),
            hint: None,
        }
    }

    /// Creates a word level. The token is upper-cased.
    pub fn word(
        token: impl AsRef<str>,
        description: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            kind: LevelKind::Word(token.as_ref().to_uppercase()),
            description: description.into(),
            hint: Some(hint.into()),
        }
    }

    /// Creates a math level. The token is upper-cased.
    pub fn math(
        token: impl AsRef<str>,
        description: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            kind: LevelKind::Math(token.as_ref().to_uppercase()),
            description: description.into(),
            hint: Some(hint.into()),
        }
    }

    /// Replaces the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    /// Returns the level kind.
    #[must_use]
    pub const fn kind(&self) -> &LevelKind {
        &self.kind
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the hint, if the level has one.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Returns true for sequence levels.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self.kind, LevelKind::Sequence(_))
    }

    /// All tokens the level requires, in order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        match &self.kind {
            LevelKind::Sequence(tokens) => tokens,
            LevelKind::Word(token) | LevelKind::Math(token) => std::slice::from_ref(token),
        }
    }

    /// The token expected after `accepted` tokens have been entered.
    #[must_use]
    pub fn expected(&self, accepted: usize) -> Option<&str> {
        self.tokens().get(accepted).map(String::as_str)
    }

    /// The full sequence joined for display, e.g. `RED > BLUE > GREEN`.
    #[must_use]
    pub fn sequence_display(&self) -> String {
        self.tokens().join(" > ")
    }

    /// The three levels the portfolio terminal ships with.
    #[must_use]
    pub fn standard_levels() -> Vec<Self> {
        vec![
            Self::sequence(
                ["RED", "BLUE", "GREEN"],
                "Enter each code separately in the correct order.",
            ),
            Self::word(
                "PYTHON",
                "Solve the riddle to find the password.",
                "I am a snake, and also a programming language. What am I?",
            ),
            Self::math(
                "42",
                "Solve the equation to proceed.",
                "Calculate: (8 * 6) - 6",
            ),
        ]
    }
}
