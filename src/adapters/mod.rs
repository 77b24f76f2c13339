//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod console;
pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;
pub mod scripted_oracle;

use std::{
    fmt::Display,
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use log::debug;
use tempfile::NamedTempFile;

pub use console::Console;
pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::{DEFAULT_SAVE_FILE, MsgPackRepository};
pub use scripted_oracle::{Answer, ScriptedOracle};

use crate::{
    Result,
    error::Error,
    knowledge::{DecisionTree, SavedTree},
};

/// Open a save file, telling a missing file apart from other read failures.
fn open_save_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::SaveNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            operation: format!("open file {path:?}"),
            source,
        },
    })
}

/// Decode and validate a save file.
fn read_save_file<E: Display>(
    path: &Path,
    decode: impl FnOnce(BufReader<File>) -> std::result::Result<SavedTree, E>,
) -> Result<DecisionTree> {
    let file = open_save_file(path)?;
    let saved = decode(BufReader::new(file)).map_err(|e| Error::corrupt(path, e.to_string()))?;

    saved
        .into_tree()
        .map_err(|e| Error::corrupt(path, e.to_string()))
}

/// Encode a save file into a temporary sibling and move it over `path`.
///
/// `path` is only replaced once `encode` and the flush succeeded; on any
/// failure the previous save stays as it was and the temporary is removed.
fn write_save_file(
    path: &Path,
    tree: &DecisionTree,
    encode: impl FnOnce(&mut BufWriter<&mut File>, &SavedTree) -> Result<()>,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|source| Error::Io {
        operation: format!("create temporary file in {dir:?}"),
        source,
    })?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        encode(&mut writer, &SavedTree::from_tree(tree))?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })?;
    }

    temp.persist(path).map_err(|e| Error::Io {
        operation: format!("replace file {path:?}"),
        source: e.error,
    })?;
    debug!("wrote {} animal(s) to {path:?}", tree.leaf_count());
    Ok(())
}
