use crate::{Deserialize, Error, Result, database::*, utils::*};
use std::path::{Path, PathBuf};

/// Stores each collection as a pretty-printed JSON array in its own file
#[derive(Clone, Debug)]
pub struct JsonDB {
    db_dir: PathBuf,
}

impl Database for JsonDB {
    const NAME: &'static str = "JsonDB";

    fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            db_dir: dir.as_ref().into(),
        }
    }
}

impl DatabaseOps for JsonDB {}

impl DatabaseIO for JsonDB {
    const EXTENSION: &str = "json";

    fn dir(&self) -> PathBuf { self.db_dir.clone() }

    fn try_copy_storage(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        return try_copy_file(source, destination);
    }

    fn try_write_storage(&self, data: impl serde::Serialize, path: impl AsRef<Path>) -> Result<()> {
        let serialized = serde_json::to_vec_pretty(&data).map_err(|e| {
            Error::SerializationFailure {
                reason: e.to_string(),
            }
        })?;

        return try_write_file(&serialized, path);
    }

    fn try_read_storage<O: for<'a> Deserialize<'a>>(&self, path: impl AsRef<Path>) -> Result<O> {
        let file_data = try_read_file(&path)?;

        serde_json::from_slice(&file_data).map_err(|e| backup_failed_parse(self, path, e))
    }
}
