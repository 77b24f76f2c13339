//! Shared configuration types for CLI commands
//!
//! Settings resolve in three layers: built-in defaults, then an optional JSON
//! config file (`--config`), then explicit command-line flags.

use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::app::{SaveFormat, SessionConfig};

/// Contents of a `--config` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Save file path
    pub save_file: PathBuf,

    /// Save file format
    pub format: SaveFormat,
}

impl Default for PlayConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            save_file: session.save_file,
            format: session.format,
        }
    }
}

impl PlayConfig {
    /// Read a config file. Missing keys keep their defaults.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open config file {path:?}"))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse config file {path:?}"))
    }
}

impl From<PlayConfig> for SessionConfig {
    fn from(config: PlayConfig) -> Self {
        SessionConfig::new()
            .with_save_file(config.save_file)
            .with_format(config.format)
    }
}

/// Storage options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct StorageArgs {
    /// Save file to load from and save to
    #[arg(long, short = 's')]
    pub save_file: Option<PathBuf>,

    /// Save file format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<SaveFormat>,

    /// JSON config file providing defaults for the options above
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl StorageArgs {
    /// Merge defaults, config file and flags into a session configuration.
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        if let Some(save_file) = &self.save_file {
            config.save_file = save_file.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config.into())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::adapters::DEFAULT_SAVE_FILE;

    #[test]
    fn test_defaults_without_config_or_flags() {
        let config = StorageArgs::default().resolve().unwrap();
        assert_eq!(config.save_file, PathBuf::from(DEFAULT_SAVE_FILE));
        assert_eq!(config.format, SaveFormat::Msgpack);
    }

    #[test]
    fn test_config_file_then_flags() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("game.json");
        std::fs::write(&config_path, r#"{"save_file": "zoo.json", "format": "json"}"#).unwrap();

        let from_file = StorageArgs {
            config: Some(config_path.clone()),
            ..StorageArgs::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(from_file.save_file, PathBuf::from("zoo.json"));
        assert_eq!(from_file.format, SaveFormat::Json);

        let overridden = StorageArgs {
            save_file: Some(PathBuf::from("other.bin")),
            format: Some(SaveFormat::Msgpack),
            config: Some(config_path),
        }
        .resolve()
        .unwrap();
        assert_eq!(overridden.save_file, PathBuf::from("other.bin"));
        assert_eq!(overridden.format, SaveFormat::Msgpack);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("game.json");
        std::fs::write(&config_path, r#"{"format": "json"}"#).unwrap();

        let config = PlayConfig::load(&config_path).unwrap();
        assert_eq!(config.save_file, PathBuf::from(DEFAULT_SAVE_FILE));
        assert_eq!(config.format, SaveFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = StorageArgs {
            config: Some(PathBuf::from("/nonexistent_12345/game.json")),
            ..StorageArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
