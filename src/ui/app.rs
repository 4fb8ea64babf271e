//! Main TUI application state and logic

use crate::{
    Error, Result,
    database::Database,
    form::{EntryForm, FormField},
    listing::ListingView,
    store::RecordStore,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::time::Duration;
use tracing::{error, info};

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Form,
    Listing,
}

/// The main application state
pub struct App<DB: Database> {
    /// Where both collections are read from and written to
    pub store: RecordStore<DB>,

    pub form: EntryForm,

    pub listing: ListingView,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl<DB: Database> App<DB> {
    /// Create a new app and load the current records into the listing
    ///
    /// A failed initial load is shown in the status bar rather than aborting startup.
    pub fn new(store: RecordStore<DB>, form: EntryForm, listing: ListingView) -> Self {
        let mut app = App {
            store,
            form,
            listing,
            focused_pane: FocusedPane::Form,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        };
        app.refresh();
        if !app.status_is_error {
            app.set_status("Ready!");
        }
        return app;
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            // Picks up events published outside the key handlers too
            if let Err(e) = self.listing.sync(&self.store) {
                self.set_error(format!("Refresh failed: {e}"));
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Form (fixed height) | Listing | Status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FormField::ALL.len() as u16 + 2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_form_pane(
            frame,
            chunks[0],
            &self.form,
            self.focused_pane == FocusedPane::Form,
        );

        super::panes::render_listing_pane(
            frame,
            chunks[1],
            &self.listing,
            self.focused_pane == FocusedPane::Listing,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.status_is_error,
            (self.listing.students().len(), self.listing.courses().len()),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if ctrl => {
                self.refresh();
            }
            KeyCode::F(5) => {
                self.refresh();
            }
            KeyCode::F(2) => {
                self.listing.toggle_tab();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Tab => match self.focused_pane {
                FocusedPane::Form if self.form.focused() == FormField::CourseType => {
                    self.form.focus_next();
                    self.focused_pane = FocusedPane::Listing;
                }
                FocusedPane::Form => self.form.focus_next(),
                FocusedPane::Listing => self.focused_pane = FocusedPane::Form,
            },
            KeyCode::BackTab => match self.focused_pane {
                FocusedPane::Form if self.form.focused() == FormField::StudentId => {
                    self.form.focus_prev();
                    self.focused_pane = FocusedPane::Listing;
                }
                FocusedPane::Form => self.form.focus_prev(),
                FocusedPane::Listing => self.focused_pane = FocusedPane::Form,
            },
            _ => match self.focused_pane {
                FocusedPane::Form => self.handle_form_key(key),
                FocusedPane::Listing => self.handle_listing_key(key),
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            KeyCode::Left if self.form.focused() == FormField::CourseType => {
                self.form.prev_course_type();
            }
            KeyCode::Right if self.form.focused() == FormField::CourseType => {
                self.form.next_course_type();
            }
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c);
            }
            _ => {}
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.listing.toggle_tab(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Save the form's records and refresh the listing
    ///
    /// Any failure aborts only this submit; the form keeps its values so they can be fixed.
    pub fn submit(&mut self) {
        match self.form.submit(&self.store) {
            Ok(submission) => {
                info!("{}", submission.message());
                self.set_status(submission.message());
                self.form.clear();

                if let Err(e) = self.listing.sync(&self.store) {
                    self.set_error(format!("Saved, but refresh failed: {e}"));
                }
            }
            Err(e) => {
                error!("Submit failed: [{e}]");
                if matches!(e, Error::PartialSubmit { .. }) {
                    self.listing.mark_stale();
                }
                self.set_error(format!("Not saved: {e}"));
            }
        }
    }

    /// Reload both tables from disk
    pub fn refresh(&mut self) {
        match self.listing.refresh(&self.store) {
            Ok(()) => self.set_status(format!(
                "Refreshed: {} students, {} courses",
                self.listing.students().len(),
                self.listing.courses().len()
            )),
            Err(e) => {
                error!("Refresh failed: [{e}]");
                self.set_error(format!("Refresh failed: {e}"));
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use crate::{
        config::StoreConfig, engine::MemoryDB, event::store_events, listing::ViewState,
        record::CourseType,
    };
    use ratatui::backend::TestBackend;

    fn app() -> App<MemoryDB> {
        let store = RecordStore::<MemoryDB>::open(StoreConfig::default());
        let (tx, rx) = store_events();
        App::new(store, EntryForm::new(tx), ListingView::new(rx))
    }

    fn type_text(app: &mut App<MemoryDB>, text: &str) {
        for c in text.chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App<MemoryDB>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn fill_form(app: &mut App<MemoryDB>, student_id: &str) {
        type_text(app, student_id);
        press(app, KeyCode::Tab);
        type_text(app, "Ann");
        press(app, KeyCode::Tab);
        type_text(app, "3");
        press(app, KeyCode::Tab);
        type_text(app, "Algebra");
        press(app, KeyCode::Tab);
    }

    #[test]
    fn test_starts_loaded_and_ready() {
        let app = app();
        assert_eq!(app.listing.state(), ViewState::Loaded);
        assert_eq!(app.status_message, "Ready!");
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_enter_saves_and_listing_follows() {
        let mut app = app();
        fill_form(&mut app, "7");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(!app.status_is_error, "{}", app.status_message);
        assert_eq!(app.listing.students().len(), 1);
        assert_eq!(app.listing.students()[0].name(), "Ann");
        assert_eq!(app.listing.courses()[0].course_type(), CourseType::NonMajor);
        assert_eq!(app.form.value(FormField::StudentId), "");
    }

    #[test]
    fn test_bad_id_is_reported_and_nothing_saved() {
        let mut app = app();
        fill_form(&mut app, "seven");
        press(&mut app, KeyCode::Enter);

        assert!(app.status_is_error);
        assert!(app.status_message.contains("Student ID"));
        assert!(app.store.load_students().expect("memory load").is_empty());
        assert!(app.store.load_courses().expect("memory load").is_empty());
        assert_eq!(app.form.value(FormField::StudentId), "seven");
    }

    #[test]
    fn test_tab_past_last_field_focuses_listing() {
        let mut app = app();
        for _ in 0..FormField::ALL.len() {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focused_pane, FocusedPane::Listing);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.listing.tab(), crate::listing::ListingTab::Courses);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Form);
        assert_eq!(app.form.focused(), FormField::StudentId);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_saved_rows() {
        let mut app = app();
        fill_form(&mut app, "7");
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test backend");
        terminal.draw(|f| app.render(f)).expect("draw");

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Student Data"));
        assert!(screen.contains("Ann"));
        assert!(screen.contains("1 students"));
    }
}
