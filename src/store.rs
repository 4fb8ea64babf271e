use crate::{
    Result,
    config::StoreConfig,
    database::*,
    record::{Course, Student},
};
use std::path::PathBuf;

/// The student and course collections, backed by one [`Database`]
#[derive(Clone, Debug)]
pub struct RecordStore<DB: Database> {
    db: DB,
    config: StoreConfig,
}

impl<DB: Database> RecordStore<DB> {
    pub fn open(config: StoreConfig) -> Self {
        return Self {
            db: DB::new(&config.dir),
            config,
        };
    }

    pub fn database(&self) -> &DB { &self.db }

    pub fn student_path(&self) -> PathBuf { self.db.file_path(&self.config.student_file) }

    pub fn course_path(&self) -> PathBuf { self.db.file_path(&self.config.course_file) }

    pub fn load_students(&self) -> Result<Vec<Student>> {
        return self.db.load(&self.config.student_file);
    }

    pub fn load_courses(&self) -> Result<Vec<Course>> {
        return self.db.load(&self.config.course_file);
    }

    pub fn save_students(&self, students: &[Student]) -> Result<()> {
        return self.db.save(students, &self.config.student_file);
    }

    pub fn save_courses(&self, courses: &[Course]) -> Result<()> {
        return self.db.save(courses, &self.config.course_file);
    }
}
