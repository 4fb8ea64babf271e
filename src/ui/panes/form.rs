//! Entry form pane rendering

use crate::form::{EntryForm, FormField};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

const LABEL_WIDTH: usize = 14;

/// Render the entry form: one line per field, the focused one highlighted
///
/// When the form has focus and a text field is selected, the terminal cursor is placed
/// at the end of its value.
pub fn render_form_pane(frame: &mut Frame, area: Rect, form: &EntryForm, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" New Student & Course ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let selected = is_focused && form.focused() == field;
            let label_style = if selected {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let value = if field.is_text() {
                Span::styled(form.value(field), Style::default().fg(DEFAULT_THEME.fg))
            } else {
                Span::styled(
                    format!("◀ {} ▶", form.value(field)),
                    Style::default().fg(DEFAULT_THEME.secondary),
                )
            };

            let row_style = if selected {
                Style::default().bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
                value,
            ])
            .style(row_style)
        })
        .collect();

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let focused = form.focused();
    if is_focused && focused.is_text() {
        let row = FormField::ALL
            .iter()
            .position(|&f| f == focused)
            .unwrap_or_default() as u16;
        let column = (LABEL_WIDTH + form.value(focused).chars().count()) as u16;

        if row < inner.height && column < inner.width {
            frame.set_cursor_position((inner.x + column, inner.y + row));
        }
    }
}
