//! Canned command table and control verbs.
//!
//! Canned commands map a lowercase key to fixed text. Control verbs are
//! handled by the interpreter's dispatch and never appear in the table.

use std::collections::BTreeMap;

/// Commands that change terminal state instead of printing canned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlVerb {
    /// Empty the history.
    Clear,
    /// Ask the housing surface to hide the terminal.
    Exit,
    /// Start the hacking puzzle.
    Hack,
}

impl ControlVerb {
    /// Every control verb.
    pub const ALL: [Self; 3] = [Self::Clear, Self::Exit, Self::Hack];

    /// The keyword that invokes this verb.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Exit => "exit",
            Self::Hack => "hack",
        }
    }

    /// Matches an already-normalized command.
    #[must_use]
    pub fn parse(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.keyword() == normalized)
    }
}

/// Fixed mapping from command keyword to response text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<String, String>,
}

impl CommandTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds a command. The key is lower-cased and trimmed.
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Adds or replaces a command. The key is lower-cased and trimmed.
    pub fn insert(&mut self, key: impl AsRef<str>, text: impl Into<String>) {
        self.entries
            .insert(key.as_ref().trim().to_lowercase(), text.into());
    }

    /// Looks up an already-normalized command.
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    /// Command keywords in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of canned commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
            .with(
                "help",
                "Available commands:\n  help - Show this help message\n  about - Learn about me\n  skills - List my technical skills\n  clear - Clear the terminal\n  projects - View my projects\n  contact - Get my contact info\n  hack - Start the hacking mini-game\n  exit - Close the terminal",
            )
            .with(
                "about",
                "Hi! I'm Tom, a Computer Science student passionate about creating innovative solutions. I love exploring new technologies and building things that make a difference.",
            )
            .with(
                "skills",
                "Technical Skills:\n- Next.js\n- React\n- TypeScript\n- JavaScript\n- C#\n- Python\n- Vite",
            )
            .with(
                "projects",
                "Recent Projects:\n1. Project-B - Restaurant reservation system\n2. Project-Alpha - Text adventure game\n3. UDPClient - Network implementation",
            )
            .with(
                "contact",
                "Email: Tom.vangenderen@gmail.com\nGitHub: https://github.com/TomvGenderen\nLinkedIn: https://www.linkedin.com/in/tom-van-genderen-4a2076235/",
            )
    }
}
