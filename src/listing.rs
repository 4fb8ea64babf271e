//! Tabbed listing of every stored student and course.

use crate::{
    Result,
    database::Database,
    event::StoreEvent,
    record::{Course, Student},
    store::RecordStore,
};
use itertools::Itertools;
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

pub const STUDENT_COLUMNS: [&str; 2] = ["Student ID", "Student Name"];
pub const COURSE_COLUMNS: [&str; 3] = ["Course ID", "Course Name", "Course Type"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingTab {
    Students,
    Courses,
}

impl ListingTab {
    pub fn toggle(self) -> Self {
        match self {
            ListingTab::Students => ListingTab::Courses,
            ListingTab::Courses => ListingTab::Students,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListingTab::Students => "Student Data",
            ListingTab::Courses => "Course Data",
        }
    }
}

/// Whether the displayed rows still match the files
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loaded,
    Stale,
}

#[derive(Debug)]
pub struct ListingView {
    students: Vec<Student>,
    courses: Vec<Course>,
    tab: ListingTab,
    state: ViewState,
    events: Receiver<StoreEvent>,
}

impl ListingView {
    /// Creates an empty, stale view; call [`ListingView::refresh`] to populate it
    pub fn new(events: Receiver<StoreEvent>) -> Self {
        return Self {
            students: vec![],
            courses: vec![],
            tab: ListingTab::Students,
            state: ViewState::Stale,
            events,
        };
    }

    pub fn students(&self) -> &[Student] { &self.students }

    pub fn courses(&self) -> &[Course] { &self.courses }

    pub fn tab(&self) -> ListingTab { self.tab }

    pub fn toggle_tab(&mut self) { self.tab = self.tab.toggle(); }

    pub fn state(&self) -> ViewState { self.state }

    /// Marks the rows as out of date, e.g. after a write this view was not told about
    pub fn mark_stale(&mut self) { self.state = ViewState::Stale; }

    /// Reloads both collections and replaces every displayed row, in file order
    ///
    /// Both files are read before anything is replaced; on failure the previous rows
    /// stay and the view is left [`ViewState::Stale`].
    ///
    /// # Errors
    /// - I/O
    /// - Parsing failure
    pub fn refresh<DB: Database>(&mut self, store: &RecordStore<DB>) -> Result<()> {
        let loaded = store
            .load_students()
            .and_then(|students| Ok((students, store.load_courses()?)));

        return match loaded {
            Ok((students, courses)) => {
                debug!(
                    "Listing refreshed with [{}] students and [{}] courses.",
                    students.len(),
                    courses.len()
                );

                self.students = students;
                self.courses = courses;
                self.state = ViewState::Loaded;
                Ok(())
            }
            Err(e) => {
                warn!("Listing refresh failed, keeping previous rows: [{e}]");

                self.state = ViewState::Stale;
                Err(e)
            }
        };
    }

    /// Drains pending [`StoreEvent`]s and refreshes once if any arrived
    ///
    /// Returns whether a refresh happened.
    pub fn sync<DB: Database>(&mut self, store: &RecordStore<DB>) -> Result<bool> {
        let pending = self.events.try_iter().count();
        if pending == 0 {
            return Ok(false);
        }

        debug!("Received [{pending}] store event(s).");
        self.refresh(store)?;
        return Ok(true);
    }

    pub fn student_rows(&self) -> Vec<[String; 2]> {
        self.students
            .iter()
            .map(|s| [s.id().to_string(), s.name().to_string()])
            .collect_vec()
    }

    pub fn course_rows(&self) -> Vec<[String; 3]> {
        self.courses
            .iter()
            .map(|c| {
                [
                    c.id().to_string(),
                    c.name().to_string(),
                    c.course_type().to_string(),
                ]
            })
            .collect_vec()
    }
}
