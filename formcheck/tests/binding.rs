use formcheck::binding::{dispatch_events, dispatch_processed, feedback_element, to_form_event};
use formcheck::{EventResult, FieldAccessor, FieldState, FormEvent, FormKind, ValidatorOptions};
use formdom::{Document, Element, Event, Key, Modifiers};

fn login_document() -> Document {
    Document::new(
        Element::form()
            .id("login-form")
            .child(
                Element::group()
                    .id("email-group")
                    .child(Element::label("Email"))
                    .child(Element::input("email").id("email").class("form-control")),
            )
            .child(
                Element::group()
                    .id("password-group")
                    .child(
                        Element::password("password")
                            .id("password")
                            .class("form-control"),
                    ),
            )
            .child(Element::button("Sign in").id("submit")),
    )
}

fn feedback_count(doc: &Document, group: &str) -> usize {
    doc.element(group)
        .unwrap()
        .content
        .children()
        .iter()
        .filter(|el| el.has_class("invalid-feedback"))
        .count()
}

// ============================================================================
// FieldAccessor
// ============================================================================

#[test]
fn test_value_lookup_by_name() {
    let mut doc = login_document();
    doc.set_value("email", "user@example.com");
    assert_eq!(
        FieldAccessor::value(&doc, "email").as_deref(),
        Some("user@example.com")
    );
    assert_eq!(FieldAccessor::value(&doc, "missing"), None);
    assert_eq!(FieldAccessor::field_names(&doc), vec!["email", "password"]);
}

#[test]
fn test_state_classes_are_exclusive() {
    let mut doc = login_document();
    doc.set_state("email", FieldState::Invalid);
    assert!(doc.has_class("email", "is-invalid"));
    assert!(doc.has_class("email", "form-control"));

    doc.set_state("email", FieldState::Valid);
    assert!(doc.has_class("email", "is-valid"));
    assert!(!doc.has_class("email", "is-invalid"));

    doc.set_state("email", FieldState::Neutral);
    assert!(!doc.has_class("email", "is-valid"));
    assert!(!doc.has_class("email", "is-invalid"));
}

#[test]
fn test_single_feedback_element_per_field() {
    let mut doc = login_document();
    doc.show_error("email", "Email is required");
    doc.show_error("email", "Please enter a valid email address");

    assert_eq!(feedback_count(&doc, "email-group"), 1);
    let feedback = feedback_element(&doc, "email").unwrap();
    assert_eq!(
        feedback.text_content(),
        Some("Please enter a valid email address")
    );

    doc.clear_error("email");
    assert!(feedback_element(&doc, "email").is_none());
    assert_eq!(feedback_count(&doc, "email-group"), 0);
}

#[test]
fn test_fields_sharing_a_parent_keep_separate_errors() {
    let mut doc = Document::new(
        Element::form()
            .id("f")
            .child(Element::input("first").id("first"))
            .child(Element::input("last").id("last")),
    );
    doc.show_error("first", "First is required");
    doc.show_error("last", "Last is required");
    doc.clear_error("first");

    assert!(feedback_element(&doc, "first").is_none());
    assert_eq!(
        feedback_element(&doc, "last").unwrap().text_content(),
        Some("Last is required")
    );
}

// ============================================================================
// Validation through the DOM
// ============================================================================

#[test]
fn test_validation_renders_into_document() {
    let mut doc = login_document();
    let validator = FormKind::Login.validator(ValidatorOptions::default());

    assert!(!validator.validate_field(&mut doc, "email"));
    assert!(doc.has_class("email", "is-invalid"));
    assert_eq!(
        feedback_element(&doc, "email").unwrap().text_content(),
        Some("Email is required")
    );

    doc.set_value("email", "user@example.com");
    assert!(validator.validate_field(&mut doc, "email"));
    assert!(doc.has_class("email", "is-valid"));
    assert!(feedback_element(&doc, "email").is_none());
}

#[test]
fn test_event_translation() {
    let doc = login_document();
    let input = Event::Input {
        target: "email".into(),
        value: "a".into(),
    };
    let field_blur = Event::Blur {
        target: "password".into(),
    };
    let button_blur = Event::Blur {
        target: "submit".into(),
    };
    let submit = Event::Submit {
        target: "login-form".into(),
    };

    assert_eq!(to_form_event(&doc, &input), Some(FormEvent::input("email")));
    assert_eq!(
        to_form_event(&doc, &field_blur),
        Some(FormEvent::blur("password"))
    );
    assert_eq!(to_form_event(&doc, &button_blur), None);
    assert_eq!(to_form_event(&doc, &submit), Some(FormEvent::Submit));
}

#[test]
fn test_typing_gives_live_feedback() {
    let mut doc = login_document();
    let router = FormKind::Login
        .validator(ValidatorOptions::default())
        .bind(&doc);

    let events = doc.type_text("email", "user@");
    dispatch_processed(&mut doc, &router, &events);
    assert!(doc.has_class("email", "is-invalid"));

    let events = doc.type_text("email", "example.com");
    dispatch_processed(&mut doc, &router, &events);
    assert!(doc.has_class("email", "is-valid"));

    // Moving focus away blurs the email field and validates it again.
    let events = doc.focus("password");
    dispatch_processed(&mut doc, &router, &events);
    assert!(doc.has_class("email", "is-valid"));
    assert!(!doc.has_class("password", "is-invalid"));
}

#[test]
fn test_enter_submits_and_is_intercepted() {
    let mut doc = login_document();
    let router = FormKind::Login
        .validator(ValidatorOptions::default())
        .bind(&doc);
    doc.set_value("email", "user@example.com");

    let enter = Event::Key {
        target: Some("email".into()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    };
    let result = dispatch_events(&mut doc, &router, std::slice::from_ref(&enter));
    assert_eq!(result, EventResult::PreventDefault);
    assert_eq!(
        feedback_element(&doc, "password").unwrap().text_content(),
        Some("Password is required")
    );

    doc.set_value("password", "correct horse");
    let result = dispatch_events(&mut doc, &router, &[enter]);
    assert_eq!(result, EventResult::Continue);
    assert!(doc.has_class("password", "is-valid"));
}
