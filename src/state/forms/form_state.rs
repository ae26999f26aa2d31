//! Form state controller

use super::binding::{
    Binding, MembershipBinding, MembershipToggle, SelectBinding, TextBinding, TextSetter,
    ValueBinding, ValueSetter,
};
use super::field::FieldValue;
use super::options::{FieldKind, FormVariant, RegisterOptions};
use super::update::{FormUpdate, NoopScheduler, RenderScheduler, UpdateHandle};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Field name to value mapping
pub type FormData = BTreeMap<String, FieldValue>;

/// Field name to message, for fields that are currently empty
pub type EmptyFieldsReport = BTreeMap<String, String>;

/// Message attached to every empty field
pub const EMPTY_FIELD_MESSAGE: &str = "Este campo está vacío";

/// Owns the values of one form and hands out widget bindings.
///
/// Changes are queued and only become visible in `form_data` after
/// `commit`, which folds them in order. Each commit publishes a new
/// snapshot; earlier snapshots are never mutated.
pub struct FormController {
    data: Arc<FormData>,
    initial: Arc<FormData>,
    variant: FormVariant,
    handle: UpdateHandle,
    rx: UnboundedReceiver<FormUpdate>,
}

impl FormController {
    /// Full-featured controller supporting every field kind
    pub fn new(initial: FormData) -> Self {
        Self::with_variant(initial, FormVariant::Full)
    }

    /// Reduced controller: `text`, `select` and `switch` only
    pub fn basic(initial: FormData) -> Self {
        Self::with_variant(initial, FormVariant::Basic)
    }

    pub fn with_variant(initial: FormData, variant: FormVariant) -> Self {
        Self::with_scheduler(initial, variant, Arc::new(NoopScheduler))
    }

    pub fn with_scheduler(
        initial: FormData,
        variant: FormVariant,
        scheduler: Arc<dyn RenderScheduler>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let initial = Arc::new(initial);
        Self {
            data: Arc::new(FormData::clone(&initial)),
            initial,
            variant,
            handle: UpdateHandle::new(tx, scheduler),
            rx,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Committed values
    pub fn form_data(&self) -> &FormData {
        &self.data
    }

    /// Shared handle on the committed values
    pub fn snapshot(&self) -> Arc<FormData> {
        Arc::clone(&self.data)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.data.get(key)
    }

    /// Sender for queueing updates from outside a binding
    pub fn handle(&self) -> UpdateHandle {
        self.handle.clone()
    }

    /// Queue `key = value`
    pub fn on_change(&self, key: &str, value: impl Into<FieldValue>) {
        self.handle.set(key, value.into());
    }

    /// Queue a return to the initial values
    pub fn reset_form(&self) {
        self.handle.send(FormUpdate::Reset);
    }

    /// Apply every queued update in order and publish the result.
    ///
    /// Returns the number of updates applied.
    pub fn commit(&mut self) -> usize {
        let mut next = Arc::clone(&self.data);
        let mut applied = 0;

        while let Ok(update) = self.rx.try_recv() {
            next = self.apply(&next, update);
            applied += 1;
        }

        if applied > 0 {
            tracing::debug!(applied, fields = next.len(), "committed form updates");
            self.data = next;
        }
        applied
    }

    fn apply(&self, current: &Arc<FormData>, update: FormUpdate) -> Arc<FormData> {
        match update {
            FormUpdate::Set { key, value } => {
                let mut next = FormData::clone(current);
                next.insert(key, value);
                Arc::new(next)
            }
            FormUpdate::Toggle {
                key,
                option,
                checked,
            } => {
                let mut items = current
                    .get(&key)
                    .and_then(FieldValue::as_list)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                if checked {
                    if !items.contains(&option) {
                        items.push(option);
                    }
                } else {
                    items.retain(|item| *item != option);
                }
                let mut next = FormData::clone(current);
                next.insert(key, FieldValue::List(items));
                Arc::new(next)
            }
            FormUpdate::Reset => {
                tracing::debug!("resetting form to initial values");
                Arc::clone(&self.initial)
            }
        }
    }

    /// Value under `key`, or `fallback` when it is missing or null
    fn value_or(&self, key: &str, fallback: FieldValue) -> FieldValue {
        match self.data.get(key) {
            Some(value) if !value.is_null() => value.clone(),
            _ => fallback,
        }
    }

    fn raw(&self, key: &str) -> Option<FieldValue> {
        self.data.get(key).cloned()
    }

    /// Build the widget props for `key`
    pub fn register(&self, key: &str, options: &RegisterOptions) -> Binding {
        let kind = if self.variant.supports(options.kind) {
            options.kind
        } else {
            FieldKind::Text
        };

        match kind {
            FieldKind::Select => Binding::Select(SelectBinding {
                selected_value: self.raw(key),
                on_value_change: self.value_setter(key),
            }),
            FieldKind::Switch | FieldKind::Radio => Binding::Value(ValueBinding {
                value: self.raw(key),
                on_value_change: self.value_setter(key),
            }),
            FieldKind::Range => Binding::Value(ValueBinding {
                value: Some(self.value_or(key, FieldValue::Number(0.0))),
                on_value_change: self.value_setter(key),
            }),
            FieldKind::Checkbox => {
                if matches!(self.data.get(key), Some(FieldValue::List(_))) {
                    self.membership(key, options.option_value())
                } else {
                    Binding::Value(ValueBinding {
                        value: Some(self.value_or(key, FieldValue::Bool(false))),
                        on_value_change: self.value_setter(key),
                    })
                }
            }
            FieldKind::CheckboxMultiple => self.membership(key, options.option_value()),
            FieldKind::Text => {
                let value = match self.variant {
                    FormVariant::Full => Some(self.value_or(key, FieldValue::Text(String::new()))),
                    FormVariant::Basic => self.raw(key),
                };
                Binding::Text(TextBinding {
                    value,
                    on_change_text: TextSetter::new(key, self.handle()),
                })
            }
        }
    }

    fn value_setter(&self, key: &str) -> ValueSetter {
        ValueSetter::new(key, self.handle())
    }

    fn membership(&self, key: &str, option: &str) -> Binding {
        let is_member = self
            .data
            .get(key)
            .and_then(FieldValue::as_list)
            .is_some_and(|items| items.iter().any(|item| item == option));
        Binding::Membership(MembershipBinding {
            value: is_member,
            on_value_change: MembershipToggle::new(key, option, self.handle()),
        })
    }

    /// Fields present in the form whose value is `""` or null
    pub fn get_empty_fields(&self) -> EmptyFieldsReport {
        self.data
            .iter()
            .filter(|(_, value)| value.is_blank())
            .map(|(key, _)| (key.clone(), EMPTY_FIELD_MESSAGE.to_string()))
            .collect()
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormData::new())
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("data", &self.data)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
