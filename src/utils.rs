use crate::{Error, database::Database};
use std::{
    ffi::OsString,
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Appends `.{extension}` to the path, keeping any extension it already has
pub fn with_added_extension(path: impl AsRef<Path>, extension: impl AsRef<str>) -> PathBuf {
    let mut raw: OsString = path.as_ref().as_os_str().to_owned();
    raw.push(".");
    raw.push(extension.as_ref());

    return PathBuf::from(raw);
}

pub fn backup_failed_parse<D: Database>(
    database: &D,
    path: impl AsRef<Path>,
    error: impl std::error::Error,
) -> Error {
    let path = path.as_ref();

    warn!(
        "Failed deserialize file at [{}], creating a new backup, caused by: [{error}]",
        path.display(),
    );

    return match database.try_backup_storage(path, "FAILED_PARSING") {
        Ok(backup_path) => {
            info!("Backup created successfully at [{}]", backup_path.display());

            return Error::StorageCorrupt {
                file_path: path.to_path_buf(),
                reason: Error::DeserializationFailure {
                    reason: error.to_string(),
                }
                .to_string(),
            };
        }
        Err(e) => e,
    };
}

pub fn try_copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> crate::Result<()> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    return fs::copy(source, destination)
        .map(|_| ())
        .map_err(|e| Error::IOCopyFailure {
            path_from: source.display().to_string(),
            path_destination: destination.display().to_string(),
            reason: e,
        });
}

pub fn try_write_file(serialized_bytes: &[u8], path: impl AsRef<Path>) -> crate::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        create_dir_all(parent).map_err(|e| Error::IOCreateDirFailure {
            path: parent.display().to_string(),
            reason: e,
        })?;
    }

    if path.is_dir() {
        return Err(Error::StorageCorrupt {
            file_path: path.to_path_buf(),
            reason: std::io::ErrorKind::IsADirectory.to_string(),
        });
    }

    return fs::write(path, serialized_bytes).map_err(|e| Error::IOWriteFailure {
        path: path.display().to_string(),
        reason: e,
    });
}

pub fn try_read_file(path: impl AsRef<Path>) -> crate::Result<Vec<u8>> {
    let path = path.as_ref();

    return fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::StorageNotFound {
            file_path: path.to_path_buf(),
        },
        _ => Error::StorageInaccessible {
            file_path: path.to_path_buf(),
            reason: e,
        },
    });
}
