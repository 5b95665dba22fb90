use std::fmt;

use crate::accessor::FieldContext;

/// A rule predicate: returns true when the value passes.
pub type Predicate = Box<dyn Fn(&str, &FieldContext<'_>) -> bool>;

/// A single validation rule: a predicate and the message shown when it fails.
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &FieldContext<'_>) -> bool + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Evaluate the rule against a value.
    pub fn check(&self, value: &str, cx: &FieldContext<'_>) -> bool {
        (self.predicate)(value, cx)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
