//! In-memory form for headless validation.

use std::collections::HashMap;

use crate::{FieldAccessor, FieldState};

#[derive(Debug, Clone, Default)]
struct MemoryField {
    value: String,
    state: FieldState,
    error: Option<String>,
}

/// A form backed by a map of field values.
///
/// Useful to validate submitted data without any UI, and to observe the
/// state and error the engine reports for each field.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    order: Vec<String>,
    fields: HashMap<String, MemoryField>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (or replace its value), builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field's value, adding the field if needed. State is kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.fields.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.fields.entry(name).or_default().value = value.into();
    }

    /// Visual state of a field, `None` if the form has no such field.
    pub fn state(&self, name: &str) -> Option<FieldState> {
        self.fields.get(name).map(|f| f.state)
    }

    /// Error currently shown for a field.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.error.as_deref())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut form = Self::new();
        for (name, value) in iter {
            form.set(name, value);
        }
        form
    }
}

impl FieldAccessor for MemoryForm {
    fn value(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(|f| f.value.clone())
    }

    fn set_state(&mut self, name: &str, state: FieldState) {
        if let Some(field) = self.fields.get_mut(name) {
            field.state = state;
        }
    }

    fn show_error(&mut self, name: &str, message: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.error = Some(message.to_string());
        }
    }

    fn clear_error(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.error = None;
        }
    }

    fn field_names(&self) -> Vec<String> {
        self.order.clone()
    }
}
