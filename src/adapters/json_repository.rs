//! JSON implementation of the tree repository.
//!
//! Slower and larger than MessagePack but readable and hand-editable, which
//! makes it the format of choice for `export`.

use std::{io::Write, path::Path};

use super::{read_save_file, write_save_file};
use crate::{Result, error::Error, knowledge::DecisionTree, ports::TreeRepository};

/// Pretty-printed JSON tree repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TreeRepository for JsonRepository {
    fn save(&self, tree: &DecisionTree, path: &Path) -> Result<()> {
        write_save_file(path, tree, |writer, saved| {
            serde_json::to_writer_pretty(&mut *writer, saved).map_err(|e| {
                Error::SerializationContext {
                    operation: "serialize tree to JSON".to_string(),
                    message: e.to_string(),
                }
            })?;
            writeln!(writer).map_err(|source| Error::Io {
                operation: format!("write file {path:?}"),
                source,
            })
        })
    }

    fn load(&self, path: &Path) -> Result<DecisionTree> {
        read_save_file(path, serde_json::from_reader)
    }
}
