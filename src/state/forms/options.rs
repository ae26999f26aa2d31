//! Register options: which widget family a field is bound to

use serde::{Deserialize, Serialize};

/// Widget family a field is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Select,
    Switch,
    Range,
    Radio,
    Checkbox,
    CheckboxMultiple,
    #[default]
    #[serde(other)]
    Text,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Switch => "switch",
            Self::Range => "range",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::CheckboxMultiple => "checkbox-multiple",
        }
    }

    /// Parse a kind name; unknown names bind as plain text
    pub fn parse(name: &str) -> Self {
        match name {
            "select" => Self::Select,
            "switch" => Self::Switch,
            "range" => Self::Range,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "checkbox-multiple" => Self::CheckboxMultiple,
            _ => Self::Text,
        }
    }
}

impl From<&str> for FieldKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Which controller surface is exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Every field kind
    #[default]
    Full,
    /// Only `text`, `select` and `switch`; text reads are not defaulted
    Basic,
}

impl FormVariant {
    pub fn supports(&self, kind: FieldKind) -> bool {
        match self {
            Self::Full => true,
            Self::Basic => matches!(kind, FieldKind::Text | FieldKind::Select | FieldKind::Switch),
        }
    }
}

/// Options passed to `FormController::register`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterOptions {
    pub kind: FieldKind,
    /// Option identifier for checkbox groups
    pub value: Option<String>,
}

impl RegisterOptions {
    pub fn new(kind: impl Into<FieldKind>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn select() -> Self {
        Self::new(FieldKind::Select)
    }

    pub fn switch() -> Self {
        Self::new(FieldKind::Switch)
    }

    pub fn range() -> Self {
        Self::new(FieldKind::Range)
    }

    pub fn radio() -> Self {
        Self::new(FieldKind::Radio)
    }

    pub fn checkbox(value: impl Into<String>) -> Self {
        Self::new(FieldKind::Checkbox).with_value(value)
    }

    pub fn checkbox_multiple(value: impl Into<String>) -> Self {
        Self::new(FieldKind::CheckboxMultiple).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The checkbox option identifier, `""` when unset
    pub fn option_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
