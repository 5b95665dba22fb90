//! Capability interface between the validation engine and a UI toolkit.

use crate::FieldState;

/// Read and annotate the fields of one form.
///
/// Implemented once per toolkit binding. The engine never touches the UI
/// directly: it reads values through [`FieldAccessor::value`] and reports
/// results through the three write methods.
pub trait FieldAccessor {
    /// Current value of the named field, or `None` if the form has no such field.
    fn value(&self, name: &str) -> Option<String>;

    /// Apply a visual state to the field.
    fn set_state(&mut self, name: &str, state: FieldState);

    /// Show `message` as the field's single error annotation,
    /// creating it on first failure and updating it afterwards.
    fn show_error(&mut self, name: &str, message: &str);

    /// Remove the field's error annotation, if any.
    fn clear_error(&mut self, name: &str);

    /// Names of every input in the form, in form order.
    fn field_names(&self) -> Vec<String>;

    /// Whether the form contains the named field.
    fn has_field(&self, name: &str) -> bool {
        self.value(name).is_some()
    }
}

/// Read-only view of the form handed to rule predicates.
///
/// Gives a rule the name of the field it is checking and lets cross-field
/// rules look up other fields' current values.
pub struct FieldContext<'a> {
    name: &'a str,
    form: &'a dyn FieldAccessor,
}

impl<'a> FieldContext<'a> {
    pub fn new(name: &'a str, form: &'a dyn FieldAccessor) -> Self {
        Self { name, form }
    }

    /// Name of the field being validated.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Current value of another field in the same form.
    pub fn value_of(&self, other: &str) -> Option<String> {
        self.form.value(other)
    }
}
