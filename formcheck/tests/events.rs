use std::cell::RefCell;
use std::rc::Rc;

use formcheck::{
    EventResult, EventRouter, FieldEventKind, FieldState, FormEvent, FormValidator, MemoryForm,
    ValidatorOptions,
};

fn signup(options: ValidatorOptions) -> FormValidator {
    let mut v = FormValidator::new(options);
    v.field("email")
        .required("Email is required")
        .email("Please enter a valid email address")
        .field("password")
        .required("Password is required");
    v
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_handlers_run_in_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut router: EventRouter<MemoryForm> = EventRouter::new();

    for label in ["first", "second"] {
        let log = Rc::clone(&log);
        router.on_field_event("email", FieldEventKind::Blur, move |_| {
            log.borrow_mut().push(label);
            EventResult::Continue
        });
    }

    let mut form = MemoryForm::new();
    let result = router.dispatch(&FormEvent::blur("email"), &mut form);
    assert_eq!(result, EventResult::Continue);
    assert_eq!(*log.borrow(), vec!["first", "second"]);

    // Other kinds and fields are not routed to these handlers.
    router.dispatch(&FormEvent::input("email"), &mut form);
    router.dispatch(&FormEvent::blur("password"), &mut form);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_submit_prevented_if_any_handler_prevents() {
    let mut router: EventRouter<MemoryForm> = EventRouter::new();
    router.on_submit(|_| EventResult::PreventDefault);
    router.on_submit(|_| EventResult::Continue);

    let mut form = MemoryForm::new();
    let result = router.dispatch(&FormEvent::Submit, &mut form);
    assert!(result.is_prevented());
}

#[test]
fn test_dispatch_without_handlers_continues() {
    let router: EventRouter<MemoryForm> = EventRouter::default();
    let mut form = MemoryForm::new();
    assert_eq!(
        router.dispatch(&FormEvent::input("email"), &mut form),
        EventResult::Continue
    );
}

// ============================================================================
// Submission interception
// ============================================================================

#[test]
fn test_invalid_form_suppresses_submit() {
    let mut form = MemoryForm::new()
        .with("email", "user@example.com")
        .with("password", "");
    let router = signup(ValidatorOptions::default()).bind(&form);

    let result = router.dispatch(&FormEvent::Submit, &mut form);
    assert_eq!(result, EventResult::PreventDefault);
    assert_eq!(form.error("password"), Some("Password is required"));
    assert_eq!(form.state("email"), Some(FieldState::Valid));
}

#[test]
fn test_valid_form_submits() {
    let mut form = MemoryForm::new()
        .with("email", "user@example.com")
        .with("password", "hunter22");
    let router = signup(ValidatorOptions::default()).bind(&form);

    assert_eq!(
        router.dispatch(&FormEvent::Submit, &mut form),
        EventResult::Continue
    );
}

// ============================================================================
// Live feedback
// ============================================================================

#[test]
fn test_live_feedback_on_input_and_blur() {
    let mut form = MemoryForm::new().with("email", "").with("password", "");
    let router = signup(ValidatorOptions::default()).bind(&form);

    router.dispatch(&FormEvent::input("email"), &mut form);
    assert_eq!(form.error("email"), Some("Email is required"));

    form.set("email", "user@example.com");
    router.dispatch(&FormEvent::blur("email"), &mut form);
    assert_eq!(form.state("email"), Some(FieldState::Valid));

    // Untouched fields stay neutral.
    assert_eq!(form.state("password"), Some(FieldState::Neutral));
}

#[test]
fn test_input_validation_can_be_disabled() {
    let mut form = MemoryForm::new().with("email", "").with("password", "");
    let options = ValidatorOptions::new().validate_on_input(false);
    let router = signup(options).bind(&form);

    assert_eq!(router.handler_count(&FormEvent::input("email")), 0);
    router.dispatch(&FormEvent::input("email"), &mut form);
    assert_eq!(form.state("email"), Some(FieldState::Neutral));

    router.dispatch(&FormEvent::blur("email"), &mut form);
    assert_eq!(form.state("email"), Some(FieldState::Invalid));
}

#[test]
fn test_no_live_validation_still_validates_submit() {
    let mut form = MemoryForm::new().with("email", "").with("password", "");
    let options = ValidatorOptions::new()
        .validate_on_input(false)
        .validate_on_blur(false);
    let router = signup(options).bind(&form);

    assert_eq!(router.handler_count(&FormEvent::blur("email")), 0);
    assert_eq!(router.handler_count(&FormEvent::Submit), 1);
    let result = router.dispatch(&FormEvent::Submit, &mut form);
    assert!(result.is_prevented());
}

#[test]
fn test_every_form_input_is_wired() {
    // Fields without rules get listeners too; validating them is a no-op.
    let mut form = MemoryForm::new()
        .with("email", "")
        .with("password", "")
        .with("remember_me", "on");
    let router = signup(ValidatorOptions::default()).bind(&form);

    assert_eq!(router.handler_count(&FormEvent::input("remember_me")), 1);
    router.dispatch(&FormEvent::input("remember_me"), &mut form);
    assert_eq!(form.state("remember_me"), Some(FieldState::Neutral));
}

#[test]
fn test_handle_field_event_honours_options() {
    let v = signup(ValidatorOptions::new().validate_on_blur(false));
    let mut form = MemoryForm::new().with("email", "").with("password", "");

    let handled = v.handle_field_event(&mut form, "email", FieldEventKind::Blur);
    assert!(!handled);
    assert_eq!(form.state("email"), Some(FieldState::Neutral));
    let handled = v.handle_field_event(&mut form, "email", FieldEventKind::Input);
    assert!(handled);
    assert_eq!(form.state("email"), Some(FieldState::Invalid));
}
