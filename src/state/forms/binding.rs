//! Binding descriptors handed to input widgets

use super::field::FieldValue;
use super::update::{FormUpdate, UpdateHandle};

/// Callback that stores whatever value the widget reports
#[derive(Debug, Clone)]
pub struct ValueSetter {
    key: String,
    handle: UpdateHandle,
}

impl ValueSetter {
    pub(crate) fn new(key: &str, handle: UpdateHandle) -> Self {
        Self {
            key: key.to_string(),
            handle,
        }
    }

    pub fn call(&self, value: impl Into<FieldValue>) {
        self.handle.set(&self.key, value.into());
    }
}

/// Callback for text inputs
#[derive(Debug, Clone)]
pub struct TextSetter {
    key: String,
    handle: UpdateHandle,
}

impl TextSetter {
    pub(crate) fn new(key: &str, handle: UpdateHandle) -> Self {
        Self {
            key: key.to_string(),
            handle,
        }
    }

    pub fn call(&self, text: impl Into<String>) {
        self.handle.set(&self.key, FieldValue::Text(text.into()));
    }
}

/// Callback that adds or removes one option of a checkbox group
#[derive(Debug, Clone)]
pub struct MembershipToggle {
    key: String,
    option: String,
    handle: UpdateHandle,
}

impl MembershipToggle {
    pub(crate) fn new(key: &str, option: &str, handle: UpdateHandle) -> Self {
        Self {
            key: key.to_string(),
            option: option.to_string(),
            handle,
        }
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn call(&self, checked: bool) {
        self.handle.send(FormUpdate::Toggle {
            key: self.key.clone(),
            option: self.option.clone(),
            checked,
        });
    }
}

/// Props for select-style widgets
#[derive(Debug, Clone)]
pub struct SelectBinding {
    pub selected_value: Option<FieldValue>,
    pub on_value_change: ValueSetter,
}

/// Props for switch, radio, range and single checkbox widgets
#[derive(Debug, Clone)]
pub struct ValueBinding {
    pub value: Option<FieldValue>,
    pub on_value_change: ValueSetter,
}

/// Props for one option of a checkbox group
#[derive(Debug, Clone)]
pub struct MembershipBinding {
    /// Whether the option is currently in the list
    pub value: bool,
    pub on_value_change: MembershipToggle,
}

/// Props for text inputs
#[derive(Debug, Clone)]
pub struct TextBinding {
    pub value: Option<FieldValue>,
    pub on_change_text: TextSetter,
}

impl TextBinding {
    /// Current value as text, `""` when unset or null
    pub fn text(&self) -> String {
        self.value
            .as_ref()
            .map(FieldValue::display_value)
            .unwrap_or_default()
    }
}

/// Descriptor returned by `FormController::register`.
///
/// Each variant carries the prop names its widget family expects.
#[derive(Debug, Clone)]
pub enum Binding {
    Select(SelectBinding),
    Value(ValueBinding),
    Membership(MembershipBinding),
    Text(TextBinding),
}

impl Binding {
    /// Current value as a widget would render it
    pub fn display_value(&self) -> String {
        match self {
            Binding::Select(b) => b
                .selected_value
                .as_ref()
                .map(FieldValue::display_value)
                .unwrap_or_default(),
            Binding::Value(b) => b
                .value
                .as_ref()
                .map(FieldValue::display_value)
                .unwrap_or_default(),
            Binding::Membership(b) => b.value.to_string(),
            Binding::Text(b) => b.text(),
        }
    }

    pub fn as_select(&self) -> Option<&SelectBinding> {
        match self {
            Binding::Select(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueBinding> {
        match self {
            Binding::Value(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_membership(&self) -> Option<&MembershipBinding> {
        match self {
            Binding::Membership(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextBinding> {
        match self {
            Binding::Text(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{FieldValue, FormController, FormData, RegisterOptions};

    fn form_with(key: &str, value: FieldValue) -> FormController {
        FormController::basic(FormData::from([(key.to_string(), value)]))
    }

    #[test]
    fn test_text_shows_non_text_values() {
        let controller = form_with("age", FieldValue::Number(18.0));
        let binding = controller.register("age", &RegisterOptions::range());
        assert_eq!(binding.as_text().unwrap().text(), "18");
        assert_eq!(binding.display_value(), "18");
    }

    #[test]
    fn test_text_of_unset_field_is_empty() {
        let controller = form_with("other", FieldValue::Bool(true));
        let binding = controller.register("name", &RegisterOptions::text());
        assert_eq!(binding.display_value(), "");
    }

    #[test]
    fn test_display_value_per_binding_kind() {
        let controller = FormController::new(FormData::from([
            ("on".to_string(), FieldValue::Bool(true)),
            ("tags".to_string(), FieldValue::from(vec!["a"])),
        ]));
        assert_eq!(
            controller.register("on", &RegisterOptions::switch()).display_value(),
            "true"
        );
        assert_eq!(
            controller.register("country", &RegisterOptions::select()).display_value(),
            ""
        );
        assert_eq!(
            controller
                .register("tags", &RegisterOptions::checkbox_multiple("a"))
                .display_value(),
            "true"
        );
    }
}
