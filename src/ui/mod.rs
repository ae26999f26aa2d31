//! UI module for rendering the demo form

pub mod forms;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of one field row, borders included
const FIELD_HEIGHT: u16 = 3;

const HELP_TEXT: &str =
    "Tab/↑↓ move · ←→ change · Space toggle · Enter check empty · Ctrl+R reset · Esc quit";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let mut constraints = vec![Constraint::Length(1)]; // Title
    constraints.extend(app.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" form-lite demo ({:?}) ", app.form.variant()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    for (idx, field) in app.fields.iter().enumerate() {
        let binding = app.binding(field);
        let is_active = idx == app.active_field_index;
        forms::draw_field(frame, chunks[idx + 1], field, &binding, is_active);
    }

    let help_area = chunks[chunks.len() - 2];
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    draw_status_bar(frame, chunks[chunks.len() - 1], app);
}

fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let text = app.status_message.as_deref().unwrap_or("");
    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow),
    )));
    frame.render_widget(status, area);
}
