use crate::{Deserialize, Serialize};
use derive_more::Display;
use std::fmt::Debug;

/// Represents a Record that can be stored
///
/// Record must implement both [`Serialize`] and [`Deserialize`]
pub trait DatabaseRecord: Serialize + for<'a> Deserialize<'a> + Clone + Debug {}

/// Represents a Record that has a built-in partition
pub trait DatabaseRecordPartitioned: DatabaseRecord {
    /// Specifies the default file stem where records of this type are stored
    const PARTITION: &'static str;
}

/// A student enrolled at the center. Ids are caller-supplied and may repeat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: i32,
    name: String,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        return Self {
            id,
            name: name.into(),
        };
    }

    pub fn id(&self) -> i32 { self.id }

    pub fn name(&self) -> &str { &self.name }
}

impl DatabaseRecord for Student {}

impl DatabaseRecordPartitioned for Student {
    const PARTITION: &'static str = "studentData";
}

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    #[default]
    #[display("MAJOR")]
    Major,
    #[display("NON_MAJOR")]
    NonMajor,
    #[display("OPTIONAL")]
    Optional,
}

impl CourseType {
    /// Cycles forward through the course types, wrapping around
    pub fn next(self) -> Self {
        match self {
            CourseType::Major => CourseType::NonMajor,
            CourseType::NonMajor => CourseType::Optional,
            CourseType::Optional => CourseType::Major,
        }
    }

    /// Cycles backward through the course types, wrapping around
    pub fn prev(self) -> Self {
        match self {
            CourseType::Major => CourseType::Optional,
            CourseType::NonMajor => CourseType::Major,
            CourseType::Optional => CourseType::NonMajor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: i32,
    name: String,
    course_type: CourseType,
}

impl Course {
    pub fn new(id: i32, name: impl Into<String>, course_type: CourseType) -> Self {
        return Self {
            id,
            name: name.into(),
            course_type,
        };
    }

    pub fn id(&self) -> i32 { self.id }

    pub fn name(&self) -> &str { &self.name }

    pub fn course_type(&self) -> CourseType { self.course_type }
}

impl DatabaseRecord for Course {}

impl DatabaseRecordPartitioned for Course {
    const PARTITION: &'static str = "courseData";
}
