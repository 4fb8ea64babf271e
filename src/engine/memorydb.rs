use crate::{Deserialize, Error, Result, database::*};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::warn;

/// Keeps every collection in process memory, encoded as CBOR
///
/// Clones share the same store, so a form and a listing built from clones of one
/// `MemoryDB` see each other's writes. Nothing survives the process.
#[derive(Clone, Debug)]
pub struct MemoryDB {
    dir: PathBuf,
    store: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl Database for MemoryDB {
    const NAME: &str = "MemoryDB";

    fn new(dir: impl AsRef<Path>) -> Self {
        return Self {
            dir: dir.as_ref().to_path_buf(),
            store: Default::default(),
        };
    }
}

impl DatabaseOps for MemoryDB {}

impl DatabaseIO for MemoryDB {
    const EXTENSION: &str = "memorydb";

    fn dir(&self) -> PathBuf { self.dir.clone() }

    fn try_copy_storage(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let source = source.as_ref();

        let mut guard = self.store.write();
        let data = guard
            .get(source)
            .cloned()
            .ok_or_else(|| Error::StorageNotFound {
                file_path: source.to_path_buf(),
            })?;
        let _ = guard.insert(destination.as_ref().to_path_buf(), data);
        return Ok(());
    }

    fn try_write_storage(&self, data: impl serde::Serialize, path: impl AsRef<Path>) -> Result<()> {
        let serialized = minicbor_serde::to_vec(&data).map_err(|e| Error::SerializationFailure {
            reason: e.to_string(),
        })?;

        let mut guard = self.store.write();
        let _ = guard.insert(path.as_ref().to_path_buf(), serialized);
        return Ok(());
    }

    fn try_read_storage<O: for<'a> Deserialize<'a>>(&self, path: impl AsRef<Path>) -> Result<O> {
        let path = path.as_ref();

        let guard = self.store.read();
        let data = guard.get(path).ok_or_else(|| Error::StorageNotFound {
            file_path: path.to_path_buf(),
        })?;

        minicbor_serde::from_slice(data).map_err(|e| {
            warn!(
                "Failed deserialize partition at [{}], caused by: [{e}]",
                path.display()
            );

            return Error::StorageCorrupt {
                file_path: path.to_path_buf(),
                reason: Error::DeserializationFailure {
                    reason: e.to_string(),
                }
                .to_string(),
            };
        })
    }
}

impl MemoryDB {
    /// Stores raw bytes at the path, bypassing serialization
    pub fn insert_raw(&self, path: impl AsRef<Path>, bytes: impl Into<Vec<u8>>) {
        let _ = self
            .store
            .write()
            .insert(path.as_ref().to_path_buf(), bytes.into());
    }
}
