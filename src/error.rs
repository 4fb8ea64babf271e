use std::{num::ParseIntError, path::PathBuf};

use derive_more::{Display, Error, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error, From, Display)]
pub enum Error {
    // -- I/O
    #[display("Directory creation at [{path}] failed, caused by: [{reason}]")]
    IOCreateDirFailure {
        path: String,
        reason: std::io::Error,
    },

    #[display("Copy from [{path_from}] to [{path_destination}] failed, caused by: [{reason}]")]
    IOCopyFailure {
        path_from: String,
        path_destination: String,
        reason: std::io::Error,
    },

    #[display("Write to file at [{path}] failed, caused by: [{reason}]")]
    IOWriteFailure {
        path: String,
        reason: std::io::Error,
    },

    #[from]
    #[display("Terminal I/O failed, caused by: [{reason}]")]
    Terminal { reason: std::io::Error },

    // -- Serde
    #[display("Serialization failed, caused by: [{reason}]")]
    SerializationFailure { reason: String },

    #[display("Deserialization failed, caused by: [{reason}]")]
    DeserializationFailure { reason: String },

    // -- Storage
    #[display("Storage file at [{}] not found.", file_path.display())]
    StorageNotFound { file_path: PathBuf },

    #[display("Storage file at [{}] is corrupt, caused by: [{reason}]", file_path.display())]
    StorageCorrupt { file_path: PathBuf, reason: String },

    #[display("Storage file at [{}] is inaccessible, caused by: [{reason}]", file_path.display())]
    StorageInaccessible {
        file_path: PathBuf,
        reason: std::io::Error,
    },

    // -- Input
    #[display("{field} must be a whole number, got [{value}] ({reason})")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: ParseIntError,
    },

    #[display("Only the {saved} were saved, the rest failed: [{reason}]")]
    PartialSubmit {
        saved: &'static str,
        reason: Box<Error>,
    },
}
