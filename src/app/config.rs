//! Configuration types for session creation.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::adapters::DEFAULT_SAVE_FILE;

/// On-disk format of the save file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Compact binary (default)
    #[default]
    Msgpack,
    /// Pretty-printed, hand-editable JSON
    Json,
}

/// Configuration for creating a game session.
///
/// # Examples
///
/// ```
/// use guess_animal::app::{SaveFormat, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_save_file("zoo.json")
///     .with_format(SaveFormat::Json);
/// assert_eq!(config.save_file.to_str(), Some("zoo.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the tree is saved and loaded from
    pub save_file: PathBuf,
    /// Format of that file
    pub format: SaveFormat,
}

impl SessionConfig {
    /// Defaults: `guess_the_animal_save_game.bin` in MessagePack.
    pub fn new() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            format: SaveFormat::default(),
        }
    }

    /// Set the save file path.
    pub fn with_save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_file = path.into();
        self
    }

    /// Set the save file format.
    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
