//! Entry form for one student and one course.
//!
//! The form only holds text; nothing is parsed until [`EntryForm::submit`].

use crate::{
    Error, Result,
    database::Database,
    event::StoreEvent,
    record::{Course, CourseType, Student},
    store::RecordStore,
};
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    StudentId,
    StudentName,
    CourseId,
    CourseName,
    CourseType,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::StudentId,
        FormField::StudentName,
        FormField::CourseId,
        FormField::CourseName,
        FormField::CourseType,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::StudentId => FormField::StudentName,
            FormField::StudentName => FormField::CourseId,
            FormField::CourseId => FormField::CourseName,
            FormField::CourseName => FormField::CourseType,
            FormField::CourseType => FormField::StudentId,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::StudentId => FormField::CourseType,
            FormField::StudentName => FormField::StudentId,
            FormField::CourseId => FormField::StudentName,
            FormField::CourseName => FormField::CourseId,
            FormField::CourseType => FormField::CourseName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::StudentId => "Student ID",
            FormField::StudentName => "Student Name",
            FormField::CourseId => "Course ID",
            FormField::CourseName => "Course Name",
            FormField::CourseType => "Course Type",
        }
    }

    /// Whether the field takes typed text, as opposed to a selection
    pub fn is_text(self) -> bool { self != FormField::CourseType }
}

/// The records written by a successful submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub student: Student,
    pub course: Course,
}

impl Submission {
    pub fn message(&self) -> String {
        format!(
            "Data saved successfully! Student [{}] and course [{}] added.",
            self.student.id(),
            self.course.id()
        )
    }
}

#[derive(Debug)]
pub struct EntryForm {
    student_id: String,
    student_name: String,
    course_id: String,
    course_name: String,
    course_type: CourseType,
    focused: FormField,
    events: Sender<StoreEvent>,
}

impl EntryForm {
    pub fn new(events: Sender<StoreEvent>) -> Self {
        return Self {
            student_id: String::new(),
            student_name: String::new(),
            course_id: String::new(),
            course_name: String::new(),
            course_type: CourseType::default(),
            focused: FormField::StudentId,
            events,
        };
    }

    pub fn focused(&self) -> FormField { self.focused }

    pub fn focus(&mut self, field: FormField) { self.focused = field; }

    pub fn focus_next(&mut self) { self.focused = self.focused.next(); }

    pub fn focus_prev(&mut self) { self.focused = self.focused.prev(); }

    pub fn course_type(&self) -> CourseType { self.course_type }

    pub fn set_course_type(&mut self, course_type: CourseType) { self.course_type = course_type; }

    pub fn next_course_type(&mut self) { self.course_type = self.course_type.next(); }

    pub fn prev_course_type(&mut self) { self.course_type = self.course_type.prev(); }

    /// Current display value of a field
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::CourseType => self.course_type.to_string(),
            text => self.text(text).map(String::clone).unwrap_or_default(),
        }
    }

    fn text(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::StudentId => Some(&self.student_id),
            FormField::StudentName => Some(&self.student_name),
            FormField::CourseId => Some(&self.course_id),
            FormField::CourseName => Some(&self.course_name),
            FormField::CourseType => None,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::StudentId => Some(&mut self.student_id),
            FormField::StudentName => Some(&mut self.student_name),
            FormField::CourseId => Some(&mut self.course_id),
            FormField::CourseName => Some(&mut self.course_name),
            FormField::CourseType => None,
        }
    }

    /// Replaces the text of a field. Ignored for [`FormField::CourseType`].
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(text) = self.text_mut(field) {
            *text = value.into();
        }
    }

    /// Types a character into the focused field
    pub fn push_char(&mut self, c: char) {
        let focused = self.focused;
        if let Some(text) = self.text_mut(focused) {
            text.push(c);
        }
    }

    /// Deletes the last character of the focused field
    pub fn pop_char(&mut self) {
        let focused = self.focused;
        if let Some(text) = self.text_mut(focused) {
            let _ = text.pop();
        }
    }

    /// Empties the text fields and moves focus back to the first one
    ///
    /// The course type selection is kept.
    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.set_text(field, "");
        }
        self.focused = FormField::StudentId;
    }

    /// Builds the records the current field values describe
    ///
    /// # Errors
    /// - A non-numeric id ([`Error::InvalidInput`])
    pub fn parse(&self) -> Result<(Student, Course)> {
        let student_id = parse_id(FormField::StudentId, &self.student_id)?;
        let course_id = parse_id(FormField::CourseId, &self.course_id)?;

        return Ok((
            Student::new(student_id, self.student_name.as_str()),
            Course::new(course_id, self.course_name.as_str(), self.course_type),
        ));
    }

    /// Appends the described student and course to their files and notifies subscribers
    ///
    /// Both collections are loaded before anything is written, so a read failure leaves
    /// both files untouched. The two saves are not atomic: if the course save fails after
    /// the student save succeeded, [`Error::PartialSubmit`] is returned and the files
    /// disagree.
    ///
    /// # Errors
    /// - A non-numeric id
    /// - I/O
    /// - Parsing failure of an existing file
    pub fn submit<DB: Database>(&self, store: &RecordStore<DB>) -> Result<Submission> {
        let (student, course) = self.parse()?;

        let mut students = store.load_students()?;
        let mut courses = store.load_courses()?;

        students.push(student.clone());
        courses.push(course.clone());

        store.save_students(&students)?;
        if let Err(e) = store.save_courses(&courses) {
            warn!(
                "Saved students to [{}] but not courses to [{}]; the files are now out of step: [{e}]",
                store.student_path().display(),
                store.course_path().display()
            );

            return Err(Error::PartialSubmit {
                saved: "students",
                reason: Box::new(e),
            });
        }

        info!(
            "Appended student [{}] and course [{}] ({} students, {} courses stored).",
            student.id(),
            course.id(),
            students.len(),
            courses.len()
        );

        let event = StoreEvent::RecordsAppended {
            students: students.len(),
            courses: courses.len(),
        };
        if self.events.send(event).is_err() {
            debug!("No listing is subscribed to store events.");
        }

        return Ok(Submission { student, course });
    }
}

fn parse_id(field: FormField, raw: &str) -> Result<i32> {
    return raw.trim().parse::<i32>().map_err(|e| Error::InvalidInput {
        field: field.label(),
        value: raw.to_string(),
        reason: e,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::store_events;

    fn form() -> EntryForm {
        let (tx, _rx) = store_events();
        EntryForm::new(tx)
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = form();
        form.push_char('4');
        form.push_char('2');
        form.focus_next();
        form.push_char('B');
        form.push_char('o');
        form.push_char('x');
        form.pop_char();

        assert_eq!(form.value(FormField::StudentId), "42");
        assert_eq!(form.value(FormField::StudentName), "Bo");
    }

    #[test]
    fn test_typing_on_course_type_is_ignored() {
        let mut form = form();
        form.focus(FormField::CourseType);
        form.push_char('x');
        form.pop_char();

        assert_eq!(form.value(FormField::CourseType), "MAJOR");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = form();
        form.focus_prev();
        assert_eq!(form.focused(), FormField::CourseType);
        form.focus_next();
        assert_eq!(form.focused(), FormField::StudentId);
    }

    #[test]
    fn test_course_type_cycles() {
        let mut form = form();
        form.next_course_type();
        assert_eq!(form.course_type(), CourseType::NonMajor);
        form.next_course_type();
        form.next_course_type();
        assert_eq!(form.course_type(), CourseType::Major);
        form.prev_course_type();
        assert_eq!(form.course_type(), CourseType::Optional);
    }

    #[test]
    fn test_parse_trims_and_rejects_non_numeric() {
        let mut form = form();
        form.set_text(FormField::StudentId, " 7 ");
        form.set_text(FormField::CourseId, "three");

        match form.parse() {
            Err(Error::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "Course ID");
                assert_eq!(value, "three");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }

        form.set_text(FormField::CourseId, "3");
        let (student, course) = form.parse().expect("ids are numeric");
        assert_eq!(student.id(), 7);
        assert_eq!(course.id(), 3);
    }

    #[test]
    fn test_clear_keeps_course_type() {
        let mut form = form();
        form.set_text(FormField::StudentName, "Ann");
        form.set_course_type(CourseType::Optional);
        form.focus(FormField::CourseName);
        form.clear();

        assert_eq!(form.value(FormField::StudentName), "");
        assert_eq!(form.course_type(), CourseType::Optional);
        assert_eq!(form.focused(), FormField::StudentId);
    }
}
