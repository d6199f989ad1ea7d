//! Product content: canned commands, puzzle levels, and the welcome line.
//!
//! [`Catalog::default`] is the content the terminal ships with. A TOML file
//! can replace any part of it:
//!
//! ```toml
//! welcome = "Welcome! Type 'help' for available commands."
//!
//! [commands]
//! about = "Hi there."
//!
//! [[levels]]
//! kind = "sequence"
//! tokens = ["RED", "BLUE", "GREEN"]
//! description = "Enter each code separately in the correct order."
//!
//! [[levels]]
//! kind = "math"
//! tokens = ["42"]
//! description = "Solve the equation to proceed."
//! hint = "Calculate: (8 * 6) - 6"
//! ```
//!
//! Sections left out of the file keep their built-in content.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::commands::{CommandTable, ControlVerb};
use crate::error::{Error, Result};
use crate::level::LevelSpec;

/// The welcome line shown when the terminal opens.
pub const DEFAULT_WELCOME: &str =
    "Welcome to Tom's interactive terminal! Type 'help' for available commands.";

/// Immutable content consumed by the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    commands: CommandTable,
    levels: Vec<LevelSpec>,
    welcome: String,
}

impl Catalog {
    /// Creates a catalog from parts, validating the level list.
    ///
    /// # Errors
    ///
    /// Returns an error if the levels or commands break a catalog rule.
    pub fn new(
        commands: CommandTable,
        levels: Vec<LevelSpec>,
        welcome: impl Into<String>,
    ) -> Result<Self> {
        let catalog = Self {
            commands,
            levels,
            welcome: welcome.into(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a catalog from TOML, filling missing sections from the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the result is invalid.
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        let defaults = Self::default();

        let commands = match file.commands {
            Some(entries) => entries
                .into_iter()
                .fold(CommandTable::new(), |table, (key, text)| {
                    table.with(key, text)
                }),
            None => defaults.commands,
        };

        let levels = match file.levels {
            Some(levels) => levels
                .into_iter()
                .enumerate()
                .map(|(index, level)| level.into_level(index))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.levels,
        };

        Self::new(
            commands,
            levels,
            file.welcome.unwrap_or(defaults.welcome),
        )
    }

    /// Reads and parses a TOML catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_toml(&source)?;
        tracing::debug!(
            path = %path.display(),
            commands = catalog.commands.len(),
            levels = catalog.levels.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Returns the canned command table.
    #[must_use]
    pub const fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Returns the ordered puzzle levels.
    #[must_use]
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Returns the welcome line.
    #[must_use]
    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(Error::invalid_catalog("level list is empty"));
        }

        for (index, level) in self.levels.iter().enumerate() {
            let number = index + 1;
            if level.tokens().is_empty() {
                return Err(Error::invalid_catalog(format!(
                    "level {number} has no tokens"
                )));
            }
            if level.tokens().iter().any(|t| t.trim().is_empty()) {
                return Err(Error::invalid_catalog(format!(
                    "level {number} has a blank token"
                )));
            }
            if level.tokens().iter().any(|t| t.trim() != t.as_str()) {
                return Err(Error::invalid_catalog(format!(
                    "level {number} has a token with surrounding whitespace"
                )));
            }
        }

        for key in self.commands.keys() {
            if key.is_empty() {
                return Err(Error::invalid_catalog("command with an empty name"));
            }
            if ControlVerb::parse(key).is_some() {
                return Err(Error::invalid_catalog(format!(
                    "command '{key}' shadows a control verb"
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            commands: CommandTable::default(),
            levels: LevelSpec::standard_levels(),
            welcome: DEFAULT_WELCOME.to_string(),
        }
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    welcome: Option<String>,
    commands: Option<BTreeMap<String, String>>,
    levels: Option<Vec<LevelFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LevelKindFile {
    Sequence,
    Word,
    Math,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFile {
    kind: LevelKindFile,
    tokens: Vec<String>,
    description: String,
    hint: Option<String>,
}

impl LevelFile {
    fn into_level(self, index: usize) -> Result<LevelSpec> {
        let number = index + 1;
        let Self {
            kind,
            tokens,
            description,
            hint,
        } = self;

        if matches!(kind, LevelKindFile::Sequence) {
            let tokens = tokens.iter().map(|t| t.trim());
            return Ok(LevelSpec::sequence(tokens, description).with_hint(hint));
        }

        let [token] = tokens.as_slice() else {
            return Err(Error::invalid_catalog(format!(
                "level {number} must have exactly one token, found {}",
                tokens.len()
            )));
        };
        let token = token.trim();
        let is_math = matches!(kind, LevelKindFile::Math);

        if is_math && token.parse::<i64>().is_err() {
            return Err(Error::invalid_catalog(format!(
                "level {number} is a math level but '{token}' is not a number"
            )));
        }

        // Word and math levels require a hint
        let Some(hint) = hint else {
            return Err(Error::invalid_catalog(format!(
                "level {number} is a {} level without a hint",
                if is_math { "math" } else { "word" }
            )));
        };

        Ok(if is_math {
            LevelSpec::math(token, description, hint)
        } else {
            LevelSpec::word(token, description, hint)
        })
    }
}
