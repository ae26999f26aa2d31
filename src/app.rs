//! Demo application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use form_lite::{
    Binding, FieldKind, FieldValue, FormController, FormData, FormLiteConfig, RegisterOptions,
    RenderFlag,
};
use std::sync::Arc;

/// Upper bound of the age slider
pub const RANGE_MAX: f64 = 120.0;

/// One row of the demo form
#[derive(Debug, Clone)]
pub struct DemoField {
    pub key: &'static str,
    pub label: &'static str,
    pub options: RegisterOptions,
    /// Values cycled through by select and radio rows
    pub choices: &'static [&'static str],
}

impl DemoField {
    fn new(key: &'static str, label: &'static str, options: RegisterOptions) -> Self {
        Self {
            key,
            label,
            options,
            choices: &[],
        }
    }

    fn with_choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.options.kind
    }
}

const COUNTRIES: &[&str] = &["AR", "CL", "ES", "MX", "PE"];
const PLANS: &[&str] = &["free", "pro", "team"];
const INTERESTS: &[&str] = &["rust", "tui", "forms"];

fn demo_fields() -> Vec<DemoField> {
    let mut fields = vec![
        DemoField::new("name", "Name", RegisterOptions::text()),
        DemoField::new("country", "Country", RegisterOptions::select()).with_choices(COUNTRIES),
        DemoField::new("newsletter", "Newsletter", RegisterOptions::switch()),
        DemoField::new("age", "Age", RegisterOptions::range()),
        DemoField::new("plan", "Plan", RegisterOptions::radio()).with_choices(PLANS),
        DemoField::new("terms", "Accept terms", RegisterOptions::checkbox("accepted")),
    ];
    fields.extend(INTERESTS.iter().map(|interest| {
        DemoField::new(
            "interests",
            "Interests",
            RegisterOptions::checkbox_multiple(*interest),
        )
    }));
    fields
}

/// Values used when the config file provides no initial state
pub fn default_initial_state() -> FormData {
    [
        ("name", FieldValue::from("")),
        ("country", FieldValue::Null),
        ("newsletter", FieldValue::Bool(false)),
        ("age", FieldValue::Number(18.0)),
        ("plan", FieldValue::from("free")),
        ("interests", FieldValue::List(Vec::new())),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Main application struct
pub struct App {
    pub form: FormController,
    pub fields: Vec<DemoField>,
    pub active_field_index: usize,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    render: Arc<RenderFlag>,
    quit: bool,
}

impl App {
    pub fn new(config: &FormLiteConfig) -> Self {
        let render = Arc::new(RenderFlag::new());
        let initial = config
            .initial_state
            .clone()
            .unwrap_or_else(default_initial_state);
        let form = FormController::with_scheduler(initial, config.variant(), render.clone());

        Self {
            form,
            fields: demo_fields(),
            active_field_index: 0,
            status_message: None,
            render,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply queued form updates; true if a redraw is needed
    pub fn commit(&mut self) -> bool {
        let requested = self.render.take();
        self.form.commit() > 0 || requested
    }

    pub fn active_field(&self) -> &DemoField {
        &self.fields[self.active_field_index]
    }

    pub fn binding(&self, field: &DemoField) -> Binding {
        self.form.register(field.key, &field.options)
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('r') if ctrl => {
                self.form.reset_form();
                self.status_message = Some("Form reset".to_string());
            }
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => self.report_empty_fields(),
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    fn report_empty_fields(&mut self) {
        let empty = self.form.get_empty_fields();
        self.status_message = Some(if empty.is_empty() {
            "No empty fields".to_string()
        } else {
            empty
                .iter()
                .map(|(key, message)| format!("{key}: {message}"))
                .collect::<Vec<_>>()
                .join(" | ")
        });
    }

    fn handle_field_key(&self, key: KeyEvent) {
        let field = self.active_field();
        let binding = self.binding(field);

        match (&binding, key.code) {
            (Binding::Text(b), KeyCode::Char(c)) => {
                let mut text = b.text();
                text.push(c);
                b.on_change_text.call(text);
            }
            (Binding::Text(b), KeyCode::Backspace) => {
                let mut text = b.text();
                text.pop();
                b.on_change_text.call(text);
            }
            (Binding::Select(b), KeyCode::Left | KeyCode::Right) => {
                let forward = key.code == KeyCode::Right;
                if let Some(choice) = cycle_choice(field.choices, b.selected_value.as_ref(), forward)
                {
                    b.on_value_change.call(choice);
                }
            }
            (Binding::Value(b), KeyCode::Left | KeyCode::Right) => {
                let forward = key.code == KeyCode::Right;
                match field.kind() {
                    FieldKind::Radio => {
                        if let Some(choice) = cycle_choice(field.choices, b.value.as_ref(), forward)
                        {
                            b.on_value_change.call(choice);
                        }
                    }
                    FieldKind::Range => {
                        let current = b.value.as_ref().and_then(FieldValue::as_number).unwrap_or(0.0);
                        let step = if forward { 1.0 } else { -1.0 };
                        b.on_value_change.call((current + step).clamp(0.0, RANGE_MAX));
                    }
                    _ => {}
                }
            }
            (Binding::Value(b), KeyCode::Char(' ')) => {
                if matches!(field.kind(), FieldKind::Switch | FieldKind::Checkbox) {
                    let on = b.value.as_ref().and_then(FieldValue::as_bool).unwrap_or(false);
                    b.on_value_change.call(!on);
                }
            }
            (Binding::Membership(b), KeyCode::Char(' ')) => b.on_value_change.call(!b.value),
            _ => {}
        }
    }
}

/// Next (or previous) entry of `choices` after `current`, wrapping around
fn cycle_choice(
    choices: &'static [&'static str],
    current: Option<&FieldValue>,
    forward: bool,
) -> Option<&'static str> {
    if choices.is_empty() {
        return None;
    }
    let position = current
        .and_then(FieldValue::as_text)
        .and_then(|text| choices.iter().position(|c| *c == text));
    let index = match (position, forward) {
        (Some(i), true) => (i + 1) % choices.len(),
        (Some(0), false) => choices.len() - 1,
        (Some(i), false) => i - 1,
        (None, true) => 0,
        (None, false) => choices.len() - 1,
    };
    Some(choices[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_lite::{FormVariant, EMPTY_FIELD_MESSAGE};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        app.commit();
    }

    fn focus(app: &mut App, key: &str) {
        app.active_field_index = app.fields.iter().position(|f| f.key == key).unwrap();
    }

    #[test]
    fn test_typing_updates_text_field() {
        let mut app = App::new(&FormLiteConfig::default());
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.get("name"), Some(&FieldValue::from("hi")));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new(&FormLiteConfig::default());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_field_index, app.fields.len() - 1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_field_index, 0);
    }

    #[test]
    fn test_select_cycles_choices() {
        let mut app = App::new(&FormLiteConfig::default());
        focus(&mut app, "country");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get("country"), Some(&FieldValue::from("AR")));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.get("country"), Some(&FieldValue::from("PE")));
    }

    #[test]
    fn test_range_steps_and_clamps() {
        let mut app = App::new(&FormLiteConfig::default());
        focus(&mut app, "age");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get("age"), Some(&FieldValue::Number(19.0)));
        app.form.on_change("age", 0);
        app.commit();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.get("age"), Some(&FieldValue::Number(0.0)));
    }

    #[test]
    fn test_space_toggles_switch_and_checkboxes() {
        let mut app = App::new(&FormLiteConfig::default());
        focus(&mut app, "newsletter");
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.get("newsletter"), Some(&FieldValue::Bool(true)));

        focus(&mut app, "terms");
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.get("terms"), Some(&FieldValue::Bool(true)));

        focus(&mut app, "interests");
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.form.get("interests"),
            Some(&FieldValue::from(vec!["rust", "tui"]))
        );
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.get("interests"), Some(&FieldValue::from(vec!["rust"])));
    }

    #[test]
    fn test_enter_reports_empty_fields() {
        let mut app = App::new(&FormLiteConfig::default());
        press(&mut app, KeyCode::Enter);
        let status = app.status_message.clone().unwrap();
        assert!(status.contains(&format!("name: {EMPTY_FIELD_MESSAGE}")));
        assert!(status.contains(&format!("country: {EMPTY_FIELD_MESSAGE}")));
        assert!(!status.contains("newsletter"));
    }

    #[test]
    fn test_ctrl_r_resets_form() {
        let mut app = App::new(&FormLiteConfig::default());
        press(&mut app, KeyCode::Char('x'));
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
            .unwrap();
        app.commit();
        assert_eq!(app.form.form_data(), &default_initial_state());
    }

    #[test]
    fn test_commit_reports_render_request() {
        let mut app = App::new(&FormLiteConfig::default());
        assert!(!app.commit());
        app.form.on_change("name", "Ana");
        assert!(app.commit());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new(&FormLiteConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_basic_variant_binds_range_as_text() {
        let config = FormLiteConfig {
            variant: Some(FormVariant::Basic),
            ..Default::default()
        };
        let app = App::new(&config);
        let age = app.fields.iter().find(|f| f.key == "age").unwrap();
        assert!(app.binding(age).as_text().is_some());
    }

    #[test]
    fn test_basic_variant_edits_extend_stored_number() {
        let config = FormLiteConfig {
            variant: Some(FormVariant::Basic),
            ..Default::default()
        };
        let mut app = App::new(&config);
        focus(&mut app, "age");
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.form.get("age"), Some(&FieldValue::from("185")));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.get("age"), Some(&FieldValue::from("1")));
    }

    #[test]
    fn test_typing_into_configured_bool_keeps_its_text() {
        let mut initial = default_initial_state();
        initial.insert("name".to_string(), FieldValue::Bool(true));
        let config = FormLiteConfig {
            initial_state: Some(initial),
            ..Default::default()
        };
        let mut app = App::new(&config);
        press(&mut app, KeyCode::Char('!'));
        assert_eq!(app.form.get("name"), Some(&FieldValue::from("true!")));
    }

    #[test]
    fn test_cycle_choice_without_choices() {
        assert_eq!(cycle_choice(&[], None, true), None);
    }
}
