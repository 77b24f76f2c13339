//! In-memory tree repository for testing.
//!
//! This adapter provides a pure in-memory implementation of TreeRepository,
//! enabling fast tests without any file system I/O. Trees are stored as
//! MessagePack bytes so the full encode/validate path still runs.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    Result,
    error::Error,
    knowledge::{DecisionTree, SavedTree},
    ports::TreeRepository,
};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use guess_animal::adapters::InMemoryRepository;
/// use guess_animal::knowledge::DecisionTree;
/// use guess_animal::ports::TreeRepository;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&DecisionTree::new(), Path::new("animals"))?;
///
/// assert_eq!(repo.save_count(), 1);
/// assert!(repo.load(Path::new("animals"))?.is_empty());
/// # Ok::<(), guess_animal::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage, so a test can keep one
/// handle while a session owns another.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls made so far, successful or not.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    /// Check if a tree is stored under the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage.lock().unwrap().contains_key(&key(path))
    }

    /// Store raw bytes under `path`, bypassing encoding. Used to simulate
    /// damaged save files.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage.lock().unwrap().insert(key(path), bytes);
    }

    /// Clear all stored trees.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl TreeRepository for InMemoryRepository {
    fn save(&self, tree: &DecisionTree, path: &Path) -> Result<()> {
        *self.saves.lock().unwrap() += 1;

        let bytes = rmp_serde::to_vec_named(&SavedTree::from_tree(tree)).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize tree for in-memory storage".to_string(),
                message: e.to_string(),
            }
        })?;

        self.storage.lock().unwrap().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<DecisionTree> {
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key(path)).ok_or_else(|| Error::SaveNotFound {
            path: path.to_path_buf(),
        })?;

        let saved: SavedTree =
            rmp_serde::from_slice(bytes).map_err(|e| Error::corrupt(path, e.to_string()))?;
        saved
            .into_tree()
            .map_err(|e| Error::corrupt(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{identifiers::Animal, knowledge::Node};

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let tree = DecisionTree::from_root(Some(Node::leaf(Animal::new("cat").unwrap())));
        let path = Path::new("animals");

        assert!(!repo.contains(path));

        repo.save(&tree, path).unwrap();
        assert!(repo.contains(path));
        assert_eq!(repo.save_count(), 1);

        assert_eq!(repo.load(path).unwrap(), tree);
    }

    #[test]
    fn test_load_nonexistent_returns_not_found() {
        let repo = InMemoryRepository::new();
        let result = repo.load(Path::new("nonexistent"));
        assert!(matches!(result, Err(Error::SaveNotFound { .. })));
    }

    #[test]
    fn test_raw_garbage_is_corrupt() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(Path::new("bad"), vec![0xc1, 0xc1, 0xc1]);
        assert!(matches!(
            repo.load(Path::new("bad")),
            Err(Error::CorruptSave { .. })
        ));
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();
        let path = Path::new("shared");

        repo1.save(&DecisionTree::new(), path).unwrap();

        assert!(repo2.load(path).unwrap().is_empty());
        assert_eq!(repo2.save_count(), 1);

        repo2.clear();
        assert!(!repo1.contains(path));
    }
}
