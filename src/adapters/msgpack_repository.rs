//! MessagePack implementation of the tree repository.
//!
//! This adapter implements the TreeRepository port using rmp_serde for
//! compact binary serialization. Records are written with field names so the
//! file stays self-describing.

use std::path::Path;

use super::{read_save_file, write_save_file};
use crate::{Result, error::Error, knowledge::DecisionTree, ports::TreeRepository};

/// Default save file name, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "guess_the_animal_save_game.bin";

/// MessagePack-based tree repository.
///
/// # Examples
///
/// ```no_run
/// use guess_animal::adapters::MsgPackRepository;
/// use guess_animal::knowledge::DecisionTree;
/// use guess_animal::ports::TreeRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let tree = DecisionTree::new();
///
/// repo.save(&tree, Path::new("animals.bin"))?;
/// let loaded = repo.load(Path::new("animals.bin"))?;
/// assert_eq!(tree, loaded);
/// # Ok::<(), guess_animal::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl TreeRepository for MsgPackRepository {
    fn save(&self, tree: &DecisionTree, path: &Path) -> Result<()> {
        write_save_file(path, tree, |writer, saved| {
            rmp_serde::encode::write_named(writer, saved).map_err(|e| {
                Error::SerializationContext {
                    operation: "serialize tree to MessagePack".to_string(),
                    message: e.to_string(),
                }
            })
        })
    }

    fn load(&self, path: &Path) -> Result<DecisionTree> {
        read_save_file(path, rmp_serde::decode::from_read)
    }
}
