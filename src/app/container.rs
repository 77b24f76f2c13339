//! Dependency injection container for the guessing game.
//!
//! This module provides centralized dependency management following hexagonal
//! architecture principles. The container owns the persistence adapter and
//! provides factory methods for sessions.

use std::{path::PathBuf, sync::Arc};

use super::config::{SaveFormat, SessionConfig};
use crate::{
    adapters::{JsonRepository, MsgPackRepository},
    ports::TreeRepository,
    session::GameSession,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use guess_animal::app::{App, SessionConfig};
///
/// let app = App::new(SessionConfig::new());
/// let session = app.create_session();
/// assert!(session.is_empty());
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use guess_animal::app::App;
/// use guess_animal::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_save_file("test_animals")
///     .build();
/// ```
pub struct App {
    /// Repository for tree persistence
    repository: Arc<dyn TreeRepository + Send + Sync>,
    /// Where sessions save to
    save_file: PathBuf,
}

impl App {
    /// Create an app whose repository matches `config.format`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            repository: repository_for(config.format),
            save_file: config.save_file,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the repository.
    pub fn repository(&self) -> Arc<dyn TreeRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    pub fn save_file(&self) -> &std::path::Path {
        &self.save_file
    }

    /// Create a fresh session bound to this app's storage.
    pub fn create_session(&self) -> GameSession {
        GameSession::with_shared_repository(self.repository(), self.save_file.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Repository adapter for a save format.
pub fn repository_for(format: SaveFormat) -> Arc<dyn TreeRepository + Send + Sync> {
    match format {
        SaveFormat::Msgpack => Arc::new(MsgPackRepository::new()),
        SaveFormat::Json => Arc::new(JsonRepository::new()),
    }
}

/// Builder for constructing an app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories.
pub struct AppBuilder {
    repository: Option<Arc<dyn TreeRepository + Send + Sync>>,
    config: SessionConfig,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            repository: None,
            config: SessionConfig::default(),
        }
    }

    /// Set a custom repository, overriding the configured format.
    pub fn with_repository<R: TreeRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set the save file used by sessions.
    pub fn with_save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.save_file = path.into();
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses the adapter for the configured
    /// format.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| repository_for(self.config.format)),
            save_file: self.config.save_file,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
