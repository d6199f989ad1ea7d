//! Configuration for the REPL surface.

/// Prompt shown when no game is running.
pub const DEFAULT_PROMPT: &str = "➜ ";

/// Prompt shown while the hacking game is in progress.
pub const DEFAULT_GAME_PROMPT: &str = "[HACKING IN PROGRESS] ➜ ";

/// Controls how the REPL presents itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Prompt while a game is active.
    pub game_prompt: String,

    /// Whether to print the banner and welcome line on start.
    pub show_banner: bool,

    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            game_prompt: DEFAULT_GAME_PROMPT.to_string(),
            show_banner: true,
            color: true,
        }
    }
}

impl ReplConfig {
    /// Configuration without colors, for pipes and dumb terminals.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the game prompt.
    #[must_use]
    pub fn with_game_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.game_prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable/disable colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The prompt for the given game state.
    #[must_use]
    pub fn prompt_for(&self, game_active: bool) -> &str {
        if game_active {
            &self.game_prompt
        } else {
            &self.prompt
        }
    }
}
