//! Game session: rounds, the dirty flag, and save/load requests
//!
//! A [`GameSession`] owns the live [`DecisionTree`] and is the only thing
//! that mutates it. It tracks whether the tree differs from what was last
//! persisted and whether a round has been played, which the menu uses to
//! decide what to offer.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{info, warn};

use crate::{
    Result,
    error::Error,
    knowledge::{DecisionTree, RoundOutcome},
    ports::{Oracle, TreeRepository},
};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing created or loaded yet.
    Fresh,
    /// A tree was created or loaded; no rounds played on it.
    Ready,
    /// At least one round has been played.
    Played,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The tree was written.
    Saved { path: PathBuf },
    /// Nothing changed since the last save; the repository was not touched.
    Unchanged,
}

/// Result of a load request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored tree replaced the live one.
    Loaded { path: PathBuf, animals: usize },
    /// Nothing is stored at the save path; the live tree is untouched.
    NotFound { path: PathBuf },
}

/// One player's game.
///
/// # Examples
///
/// ```
/// use guess_animal::adapters::{Answer, InMemoryRepository, ScriptedOracle};
/// use guess_animal::session::{GameSession, SaveOutcome};
///
/// let repo = InMemoryRepository::new();
/// let mut session = GameSession::new(repo.clone(), "animals");
///
/// session.new_game();
/// session.play_round(&mut ScriptedOracle::new([Answer::text("cat")]))?;
/// assert!(session.is_dirty());
///
/// assert!(matches!(session.request_save()?, SaveOutcome::Saved { .. }));
/// assert!(!session.is_dirty());
/// # Ok::<(), guess_animal::Error>(())
/// ```
pub struct GameSession {
    tree: DecisionTree,
    repository: Arc<dyn TreeRepository + Send + Sync>,
    save_path: PathBuf,
    state: SessionState,
    dirty: bool,
}

impl GameSession {
    /// Create a session that persists through `repository` at `save_path`.
    pub fn new<R: TreeRepository + Send + Sync + 'static>(
        repository: R,
        save_path: impl Into<PathBuf>,
    ) -> Self {
        Self::with_shared_repository(Arc::new(repository), save_path)
    }

    /// Create a session around an already shared repository.
    pub fn with_shared_repository(
        repository: Arc<dyn TreeRepository + Send + Sync>,
        save_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tree: DecisionTree::new(),
            repository,
            save_path: save_path.into(),
            state: SessionState::Fresh,
            dirty: false,
        }
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Whether the tree has changes that were not saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether a round has been played on the current tree.
    pub fn played_round(&self) -> bool {
        self.state == SessionState::Played
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Throw away the current tree and start over.
    pub fn new_game(&mut self) {
        self.tree.reset();
        self.dirty = false;
        self.state = SessionState::Ready;
    }

    /// Play one round against `oracle`.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures; the tree and flags are unchanged then.
    pub fn play_round<O: Oracle + ?Sized>(&mut self, oracle: &mut O) -> Result<RoundOutcome> {
        let outcome = self.tree.guess_round(oracle)?;
        self.state = SessionState::Played;
        if outcome.mutated() {
            self.dirty = true;
        }
        Ok(outcome)
    }

    /// Persist the tree if it has unsaved changes.
    ///
    /// # Errors
    ///
    /// Returns the repository's error; the dirty flag stays set so the save
    /// can be retried.
    pub fn request_save(&mut self) -> Result<SaveOutcome> {
        if !self.dirty {
            return Ok(SaveOutcome::Unchanged);
        }

        if let Err(e) = self.repository.save(&self.tree, &self.save_path) {
            warn!("saving to {:?} failed: {e}", self.save_path);
            return Err(e);
        }
        self.dirty = false;
        info!(
            "saved {} animal(s) to {:?}",
            self.tree.leaf_count(),
            self.save_path
        );
        Ok(SaveOutcome::Saved {
            path: self.save_path.clone(),
        })
    }

    /// Replace the tree with the saved one.
    ///
    /// A missing save file is not an error: it is reported as
    /// [`LoadOutcome::NotFound`].
    ///
    /// # Errors
    ///
    /// [`Error::CorruptSave`] or [`Error::Io`]; the live tree and flags are
    /// left exactly as they were.
    pub fn request_load(&mut self) -> Result<LoadOutcome> {
        let tree = match self.repository.load(&self.save_path) {
            Ok(tree) => tree,
            Err(Error::SaveNotFound { path }) => {
                info!("no saved game at {path:?}");
                return Ok(LoadOutcome::NotFound { path });
            }
            Err(e) => {
                warn!("rejected saved game: {e}");
                return Err(e);
            }
        };

        let animals = tree.leaf_count();
        self.tree = tree;
        self.dirty = false;
        self.state = SessionState::Ready;
        info!("loaded {animals} animal(s) from {:?}", self.save_path);
        Ok(LoadOutcome::Loaded {
            path: self.save_path.clone(),
            animals,
        })
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .field("save_path", &self.save_path)
            .field("animals", &self.tree.leaf_count())
            .finish_non_exhaustive()
    }
}
