use coachdesk::prelude::*;

pub fn ann() -> Student { Student::new(7, "Ann") }

pub fn algebra() -> Course { Course::new(3, "Algebra", CourseType::Major) }

/// `count` students with ids counting up from 1
pub fn students(count: i32) -> Vec<Student> {
    (1..=count)
        .map(|id| Student::new(id, format!("Student {id}")))
        .collect()
}

/// `count` courses cycling through every course type
pub fn courses(count: i32) -> Vec<Course> {
    let mut course_type = CourseType::Major;

    (1..=count)
        .map(|id| {
            let course = Course::new(100 + id, format!("Course {id}"), course_type);
            course_type = course_type.next();
            course
        })
        .collect()
}

/// A form wired to a fresh event channel, returning the listing end too
pub fn form_and_listing() -> (EntryForm, ListingView) {
    let (tx, rx) = store_events();
    (EntryForm::new(tx), ListingView::new(rx))
}

pub fn fill(
    form: &mut EntryForm,
    student_id: &str,
    student_name: &str,
    course_id: &str,
    course_name: &str,
    course_type: CourseType,
) {
    form.set_text(FormField::StudentId, student_id);
    form.set_text(FormField::StudentName, student_name);
    form.set_text(FormField::CourseId, course_id);
    form.set_text(FormField::CourseName, course_name);
    form.set_course_type(course_type);
}
