//! The validation engine.

use std::rc::Rc;

use regex::Regex;

use crate::accessor::{FieldAccessor, FieldContext};
use crate::events::{EventResult, EventRouter, FieldEventKind};
use crate::result::{FieldError, ValidationResult};
use crate::rule::Rule;
use crate::{FieldState, ValidatorOptions, rules};

/// Rules registered for one field, in registration order.
#[derive(Debug)]
struct FieldEntry {
    name: String,
    rules: Vec<Rule>,
}

/// Binds ordered rules to the named fields of one form and enforces them.
///
/// Rules for a field run in registration order and stop at the first
/// failure, whose message becomes the field's error. Fields are kept in the
/// order they were first registered, which is the order [`validate_all`]
/// visits them in.
///
/// # Example
///
/// ```ignore
/// let mut validator = FormValidator::new(ValidatorOptions::default());
/// validator
///     .field("email")
///     .required("Email is required")
///     .email("Please enter a valid email address")
///     .field("password")
///     .required("Password is required")
///     .min_length(8, "Password must be at least 8 characters");
///
/// if !validator.validate_all(&mut form) {
///     // errors are now shown next to the offending fields
/// }
/// ```
///
/// [`validate_all`]: FormValidator::validate_all
#[derive(Debug, Default)]
pub struct FormValidator {
    options: ValidatorOptions,
    fields: Vec<FieldEntry>,
}

impl FormValidator {
    /// Create a validator with no rules.
    pub fn new(options: ValidatorOptions) -> Self {
        Self {
            options,
            fields: Vec::new(),
        }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Append a rule to a field's rule set. Rules accumulate per name.
    pub fn add_rule<F>(
        &mut self,
        field_name: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> &mut Self
    where
        F: Fn(&str, &FieldContext<'_>) -> bool + 'static,
    {
        let field_name = field_name.into();
        let rule = Rule::new(predicate, message);
        match self.fields.iter_mut().find(|f| f.name == field_name) {
            Some(entry) => entry.rules.push(rule),
            None => self.fields.push(FieldEntry {
                name: field_name,
                rules: vec![rule],
            }),
        }
        self
    }

    /// Start adding rules to a field with the fluent builder.
    pub fn field(&mut self, name: impl Into<String>) -> FieldBuilder<'_> {
        FieldBuilder {
            validator: self,
            name: name.into(),
        }
    }

    /// Names of fields with at least one rule, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of rules registered for a field.
    pub fn rule_count(&self, name: &str) -> usize {
        self.rules(name).map_or(0, <[Rule]>::len)
    }

    fn rules(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_slice())
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate one field and update its visual state.
    ///
    /// Returns true if every rule passes. A field without rules, or one the
    /// form does not contain, is valid and left untouched.
    pub fn validate_field<A: FieldAccessor>(&self, form: &mut A, name: &str) -> bool {
        self.check_field(form, name).is_none()
    }

    /// Validate every registered field, without stopping at the first
    /// invalid one. Returns true if all of them pass.
    pub fn validate_all<A: FieldAccessor>(&self, form: &mut A) -> bool {
        self.validate_form(form).is_valid()
    }

    /// Validate every registered field and collect the failures.
    pub fn validate_form<A: FieldAccessor>(&self, form: &mut A) -> ValidationResult {
        let errors = self
            .fields
            .iter()
            .filter_map(|field| {
                self.check_field(form, &field.name)
                    .map(|message| FieldError {
                        field_name: field.name.clone(),
                        message,
                    })
            })
            .collect();

        ValidationResult::from_errors(errors)
    }

    /// Run a field's rules, render the outcome and return the failing
    /// rule's message, if any.
    fn check_field<A: FieldAccessor>(&self, form: &mut A, name: &str) -> Option<String> {
        let rules = self.rules(name)?;
        let value = form.value(name)?;

        form.clear_error(name);
        form.set_state(name, FieldState::Neutral);

        let failed = {
            let cx = FieldContext::new(name, &*form);
            rules
                .iter()
                .find(|rule| !rule.check(&value, &cx))
                .map(|rule| rule.message().to_string())
        };

        match &failed {
            Some(message) => {
                log::debug!("field '{name}' failed validation: {message}");
                form.show_error(name, message);
                form.set_state(name, FieldState::Invalid);
            }
            None => form.set_state(name, FieldState::Valid),
        }

        failed
    }

    /// Return a field to the neutral state and remove its error.
    pub fn clear_field<A: FieldAccessor>(&self, form: &mut A, name: &str) {
        if form.has_field(name) {
            form.clear_error(name);
            form.set_state(name, FieldState::Neutral);
        }
    }

    /// Clear every registered field.
    pub fn reset<A: FieldAccessor>(&self, form: &mut A) {
        for field in &self.fields {
            self.clear_field(form, &field.name);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Validate the whole form before submission.
    ///
    /// Returns `PreventDefault` if any field is invalid.
    pub fn handle_submit<A: FieldAccessor>(&self, form: &mut A) -> EventResult {
        if self.validate_all(form) {
            EventResult::Continue
        } else {
            log::debug!("submission prevented: form has invalid fields");
            EventResult::PreventDefault
        }
    }

    /// Live feedback for a field event, honouring the options.
    ///
    /// Returns whether validation ran.
    pub fn handle_field_event<A: FieldAccessor>(
        &self,
        form: &mut A,
        name: &str,
        kind: FieldEventKind,
    ) -> bool {
        let enabled = match kind {
            FieldEventKind::Input => self.options.validate_on_input,
            FieldEventKind::Blur => self.options.validate_on_blur,
        };
        if enabled {
            self.validate_field(form, name);
        }
        enabled
    }

    /// Subscribe a shared validator to submission and, per the options, to
    /// the input and blur events of each of `fields`.
    pub fn attach<C, I>(validator: &Rc<Self>, router: &mut EventRouter<C>, fields: I)
    where
        C: FieldAccessor + 'static,
        I: IntoIterator<Item = String>,
    {
        let v = Rc::clone(validator);
        router.on_submit(move |form| v.handle_submit(form));

        if !validator.options.is_live() {
            return;
        }

        let kinds = [
            (FieldEventKind::Input, validator.options.validate_on_input),
            (FieldEventKind::Blur, validator.options.validate_on_blur),
        ];
        for name in fields {
            for (kind, enabled) in kinds {
                if !enabled {
                    continue;
                }
                let v = Rc::clone(validator);
                let field = name.clone();
                router.on_field_event(name.clone(), kind, move |form| {
                    v.validate_field(form, &field);
                    EventResult::Continue
                });
            }
        }
    }

    /// Consume the validator and build a router wired to every input of `form`.
    pub fn bind<C>(self, form: &C) -> EventRouter<C>
    where
        C: FieldAccessor + 'static,
    {
        let mut router = EventRouter::new();
        Self::attach(&Rc::new(self), &mut router, form.field_names());
        router
    }
}

/// Fluent builder adding rules to one field of a [`FormValidator`].
pub struct FieldBuilder<'a> {
    validator: &'a mut FormValidator,
    name: String,
}

impl<'a> FieldBuilder<'a> {
    /// Add a custom rule.
    pub fn rule<F>(self, predicate: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str, &FieldContext<'_>) -> bool + 'static,
    {
        self.validator.add_rule(self.name.clone(), predicate, msg);
        self
    }

    /// Continue with the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder {
            validator: self.validator,
            name: name.into(),
        }
    }

    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(rules::required, msg)
    }

    /// Require a `local@domain.tld` shaped value.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(rules::email, msg)
    }

    /// Require an RFC 5322 email address.
    pub fn strict_email(self, msg: impl Into<String>) -> Self {
        self.rule(rules::strict_email, msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(rules::min_length(min), msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(rules::max_length(max), msg)
    }

    /// Require the value to match a regex.
    pub fn pattern(self, regex: Regex, msg: impl Into<String>) -> Self {
        self.rule(rules::pattern(regex), msg)
    }

    /// Require the value to equal another field's current value.
    pub fn matches(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        self.rule(rules::matches(other), msg)
    }

    /// Reject `<script>` tags.
    pub fn no_script(self, msg: impl Into<String>) -> Self {
        self.rule(rules::no_script, msg)
    }

    /// Reject quotes, semicolons and backslashes.
    pub fn no_sql_injection(self, msg: impl Into<String>) -> Self {
        self.rule(rules::no_sql_injection, msg)
    }
}
