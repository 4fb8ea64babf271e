//! Listing pane rendering: tab strip plus the active table

use crate::listing::{COURSE_COLUMNS, ListingTab, ListingView, STUDENT_COLUMNS, ViewState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
};

/// Render the listing pane
pub fn render_listing_pane(frame: &mut Frame, area: Rect, listing: &ListingView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match listing.state() {
        ViewState::Loaded => " Coaching Center Data ".to_string(),
        ViewState::Stale => " Coaching Center Data (stale, press F5) ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = match listing.tab() {
        ListingTab::Students => 0,
        ListingTab::Courses => 1,
    };
    let tabs = Tabs::new([ListingTab::Students.title(), ListingTab::Courses.title()])
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[0]);

    let (header, rows, widths): (Vec<&str>, Vec<Row>, Vec<Constraint>) = match listing.tab() {
        ListingTab::Students => (
            STUDENT_COLUMNS.to_vec(),
            listing.student_rows().into_iter().map(Row::new).collect(),
            vec![Constraint::Length(12), Constraint::Min(10)],
        ),
        ListingTab::Courses => (
            COURSE_COLUMNS.to_vec(),
            listing.course_rows().into_iter().map(Row::new).collect(),
            vec![
                Constraint::Length(12),
                Constraint::Min(10),
                Constraint::Length(12),
            ],
        ),
    };

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no records)")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let header = Row::new(header.into_iter().map(Cell::from)).style(
        Style::default()
            .fg(DEFAULT_THEME.header)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(DEFAULT_THEME.fg));

    frame.render_widget(table, chunks[1]);
}
