//! Field rendering utilities for forms

use crate::app::{DemoField, RANGE_MAX};
use form_lite::{Binding, FieldKind, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the range gauge in cells
const GAUGE_WIDTH: usize = 20;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Text shown inside a field box for the given binding
pub fn field_display(field: &DemoField, binding: &Binding) -> String {
    match binding {
        Binding::Text(_) => binding.display_value(),
        Binding::Select(b) => match b.selected_value.as_ref().filter(|v| !v.is_null()) {
            Some(value) => format!("< {} >", value.display_value()),
            None => "< (none) >".to_string(),
        },
        Binding::Membership(b) => format!("{} {}", checkbox(b.value), b.on_value_change.option()),
        Binding::Value(b) => match field.kind() {
            FieldKind::Range => {
                let value = b.value.as_ref().and_then(FieldValue::as_number).unwrap_or(0.0);
                let filled = ((value / RANGE_MAX) * GAUGE_WIDTH as f64).round() as usize;
                let filled = filled.min(GAUGE_WIDTH);
                format!(
                    "{:>3} {}{}",
                    value,
                    "█".repeat(filled),
                    "░".repeat(GAUGE_WIDTH - filled)
                )
            }
            FieldKind::Radio => {
                let selected = b.value.as_ref().and_then(FieldValue::as_text);
                field
                    .choices
                    .iter()
                    .map(|choice| {
                        let mark = if selected == Some(*choice) { "(•)" } else { "( )" };
                        format!("{mark} {choice}")
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
            }
            FieldKind::Switch => match b.value.as_ref().and_then(FieldValue::as_bool) {
                Some(true) => "ON".to_string(),
                Some(false) => "OFF".to_string(),
                None => "(unset)".to_string(),
            },
            _ => {
                let checked = b.value.as_ref().and_then(FieldValue::as_bool).unwrap_or(false);
                checkbox(checked).to_string()
            }
        },
    }
}

/// Draw a form field from its binding
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &DemoField,
    binding: &Binding,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field_display(field, binding);
    let is_text = matches!(binding, Binding::Text(_));
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && is_text { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use form_lite::{FormLiteConfig, FormVariant};

    fn display(app: &App, key: &str, nth: usize) -> String {
        let field = app.fields.iter().filter(|f| f.key == key).nth(nth).unwrap();
        field_display(field, &app.binding(field))
    }

    #[test]
    fn test_default_form_display() {
        let app = App::new(&FormLiteConfig::default());
        assert_eq!(display(&app, "name", 0), "");
        assert_eq!(display(&app, "country", 0), "< (none) >");
        assert_eq!(display(&app, "newsletter", 0), "OFF");
        assert_eq!(display(&app, "plan", 0), "(•) free  ( ) pro  ( ) team");
        assert_eq!(display(&app, "terms", 0), "[ ]");
        assert_eq!(display(&app, "interests", 1), "[ ] tui");
    }

    #[test]
    fn test_range_gauge() {
        let mut app = App::new(&FormLiteConfig::default());
        app.form.on_change("age", RANGE_MAX);
        app.commit();
        let shown = display(&app, "age", 0);
        assert!(shown.starts_with("120 "));
        assert!(!shown.contains('░'));
    }

    #[test]
    fn test_basic_variant_shows_number_in_text_row() {
        let config = FormLiteConfig {
            variant: Some(FormVariant::Basic),
            ..Default::default()
        };
        let app = App::new(&config);
        assert_eq!(display(&app, "age", 0), "18");
        assert!(app.form.get_empty_fields().get("age").is_none());
    }

    #[test]
    fn test_text_row_shows_configured_number() {
        let mut initial = crate::app::default_initial_state();
        initial.insert("name".to_string(), FieldValue::Number(7.0));
        let config = FormLiteConfig {
            initial_state: Some(initial),
            ..Default::default()
        };
        let app = App::new(&config);
        assert_eq!(display(&app, "name", 0), "7");
    }
}
