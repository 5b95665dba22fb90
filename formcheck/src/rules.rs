//! Built-in rule predicates.
//!
//! Every predicate has the shape `Fn(&str, &FieldContext) -> bool` so it can
//! be passed straight to [`FormValidator::add_rule`](crate::FormValidator::add_rule).
//! Predicates never panic: anything they cannot check counts as a failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::accessor::FieldContext;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script[\s\S]*?>").expect("Failed to compile script tag regex")
});

static SQL_META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"\\;]"#).expect("Failed to compile SQL character regex"));

/// Value is not blank.
pub fn required(value: &str, _: &FieldContext<'_>) -> bool {
    !value.trim().is_empty()
}

/// Value looks like `local@domain.tld`.
pub fn email(value: &str, _: &FieldContext<'_>) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Value is an RFC 5322 address. Stricter than [`email`].
pub fn strict_email(value: &str, _: &FieldContext<'_>) -> bool {
    email_address::EmailAddress::is_valid(value)
}

/// Value has at least `min` characters.
pub fn min_length(min: usize) -> impl Fn(&str, &FieldContext<'_>) -> bool {
    move |value, _| value.chars().count() >= min
}

/// Value has at most `max` characters.
pub fn max_length(max: usize) -> impl Fn(&str, &FieldContext<'_>) -> bool {
    move |value, _| value.chars().count() <= max
}

/// Value matches `regex` somewhere. Anchor the pattern to match the whole value.
pub fn pattern(regex: Regex) -> impl Fn(&str, &FieldContext<'_>) -> bool {
    move |value, _| regex.is_match(value)
}

/// Value equals the current value of `other`.
///
/// Fails when `other` is not part of the form.
pub fn matches(other: impl Into<String>) -> impl Fn(&str, &FieldContext<'_>) -> bool + 'static {
    let other = other.into();
    move |value, cx| cx.value_of(&other).is_some_and(|other| other == value)
}

/// Value contains no `<script ...>` tag.
pub fn no_script(value: &str, _: &FieldContext<'_>) -> bool {
    !SCRIPT_TAG.is_match(value)
}

/// Value contains no quote, semicolon or backslash.
pub fn no_sql_injection(value: &str, _: &FieldContext<'_>) -> bool {
    !SQL_META.is_match(value)
}
