use crate::record::{Course, DatabaseRecordPartitioned, Student};
use std::path::{Path, PathBuf};

/// Where the record files live
///
/// File names are stems; each engine appends its own [`DatabaseIO::EXTENSION`].
///
/// [`DatabaseIO::EXTENSION`]: crate::database::DatabaseIO::EXTENSION
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub student_file: String,
    pub course_file: String,
}

impl StoreConfig {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        return Self {
            dir: dir.as_ref().to_path_buf(),
            ..Default::default()
        };
    }

    /// Path of the log file kept next to the record files
    pub fn log_path(&self) -> PathBuf { self.dir.join("coachdesk.log") }
}

impl Default for StoreConfig {
    fn default() -> Self {
        return Self {
            dir: PathBuf::from("."),
            student_file: Student::PARTITION.into(),
            course_file: Course::PARTITION.into(),
        };
    }
}
