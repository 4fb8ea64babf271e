use crate::{Error, Result, database::*, record::*};
use std::path::Path;
use tracing::debug;

/// Provides whole-collection operations on named storage files
///
/// Every operation reads or writes the entire collection; nothing is streamed or
/// partially updated. Paths are resolved through [`DatabaseIO::file_path`].
pub trait DatabaseOps: DatabaseIO {
    /// Serializes the entire collection to the named file, overwriting any prior content
    ///
    /// # Errors
    /// - I/O
    /// - Serialization failure
    fn save<T: DatabaseRecord>(
        &self,
        records: impl AsRef<[T]>,
        file_name: impl AsRef<Path>,
    ) -> Result<()> {
        let path = self.file_path(file_name);
        let records = records.as_ref();

        debug!("Saving [{}] record(s) to [{}].", records.len(), path.display());
        return self.try_write_storage(records, path);
    }

    /// Reads the entire collection from the named file
    ///
    /// A file that does not exist yet is an empty collection, not an error.
    ///
    /// # Errors
    /// - I/O
    /// - Parsing failure
    fn load<T: DatabaseRecord>(&self, file_name: impl AsRef<Path>) -> Result<Vec<T>> {
        let path = self.file_path(file_name);

        return match self.try_read_storage::<Vec<T>>(&path) {
            Ok(records) => Ok(records),
            Err(Error::StorageNotFound { file_path }) => {
                debug!("Nothing stored at [{}] yet.", file_path.display());
                Ok(vec![])
            }
            Err(e) => Err(e),
        };
    }

    /// Loads the named collection, appends a single record and saves it back
    ///
    /// No uniqueness is checked; the record always lands at the end.
    ///
    /// See [`DatabaseOps::load`] and [`DatabaseOps::save`] for the list of possible errors.
    fn append<T: DatabaseRecord>(&self, record: T, file_name: impl AsRef<Path>) -> Result<()> {
        let mut records = self.load::<T>(&file_name)?;
        records.push(record);

        return self.save(records, file_name);
    }
}
