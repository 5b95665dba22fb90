use formcheck::{FieldContext, MemoryForm, rules};
use regex::Regex;

fn check(rule: impl Fn(&str, &FieldContext<'_>) -> bool, value: &str) -> bool {
    let form = MemoryForm::new().with("password", "s3cret!!");
    let cx = FieldContext::new("field", &form);
    rule(value, &cx)
}

#[test]
fn test_required() {
    assert!(!check(rules::required, ""));
    assert!(!check(rules::required, " \t\n"));
    assert!(check(rules::required, " a "));
}

#[test]
fn test_email_shape() {
    let valid = ["user@example.com", "a.b+c@sub.domain.org"];
    let invalid = [
        "",
        "not-an-email",
        "user@example",
        "user @example.com",
        "@example.com",
    ];

    for value in valid {
        assert!(check(rules::email, value), "{value} was rejected");
    }
    for value in invalid {
        assert!(!check(rules::email, value), "{value} was accepted");
    }
}

#[test]
fn test_strict_email() {
    assert!(check(rules::strict_email, "user@example.com"));
    assert!(!check(rules::strict_email, "not-an-email"));
}

#[test]
fn test_lengths_count_characters() {
    assert!(check(rules::min_length(3), "héé"));
    assert!(!check(rules::min_length(4), "héé"));
    assert!(check(rules::max_length(3), "héé"));
    assert!(!check(rules::max_length(2), "héé"));
}

#[test]
fn test_pattern() {
    let digits = Regex::new(r"^\d{4}$").unwrap();
    assert!(check(rules::pattern(digits.clone()), "2024"));
    assert!(!check(rules::pattern(digits), "20x4"));
}

#[test]
fn test_matches_reads_other_field() {
    assert!(check(rules::matches("password"), "s3cret!!"));
    assert!(!check(rules::matches("password"), "other"));
    assert!(!check(rules::matches("missing"), ""));
}

#[test]
fn test_no_script() {
    assert!(check(rules::no_script, "Hello <b>there</b>"));
    assert!(!check(rules::no_script, "<script>alert(1)</script>"));
    assert!(!check(rules::no_script, "x <SCRIPT src=evil.js>"));
    assert!(!check(rules::no_script, "<script\ntype=\"module\">"));
}

#[test]
fn test_no_sql_injection() {
    assert!(check(rules::no_sql_injection, "user@example.com"));
    for value in ["o'brien", "say \"hi\"", "a;b", "back\\slash"] {
        assert!(
            !check(rules::no_sql_injection, value),
            "{value} was accepted"
        );
    }
}
