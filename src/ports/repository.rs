//! Repository port for knowledge tree persistence.
//!
//! This module defines the trait boundary between the domain and the storage
//! layer for saving and restoring what the game has learned.

use std::path::Path;

use crate::{Result, knowledge::DecisionTree};

/// Port for persisting and loading decision trees.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (MessagePack, JSON, in-memory) without coupling the game
/// logic to a specific serialization format. Every implementation must
/// round-trip a tree exactly, including the empty tree.
///
/// # Examples
///
/// ```no_run
/// use guess_animal::knowledge::DecisionTree;
/// use guess_animal::ports::TreeRepository;
/// use std::path::Path;
///
/// fn backup<R: TreeRepository>(repo: &R, tree: &DecisionTree) -> guess_animal::Result<()> {
///     repo.save(tree, Path::new("backup.bin"))
/// }
/// ```
pub trait TreeRepository {
    /// Save a tree to persistent storage, replacing anything stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, tree: &DecisionTree, path: &Path) -> Result<()>;

    /// Load a tree from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`crate::Error::SaveNotFound`] if nothing is stored at `path`
    /// - [`crate::Error::CorruptSave`] if the stored data does not decode into
    ///   a structurally valid tree
    /// - [`crate::Error::Io`] for any other read failure
    fn load(&self, path: &Path) -> Result<DecisionTree>;
}
