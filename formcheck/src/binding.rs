//! `formdom` binding for the validation engine.
//!
//! Fields are looked up by their `name`. Visual state is the `is-valid` /
//! `is-invalid` class on the field element, and the error message lives in a
//! `div.invalid-feedback` appended to the field's parent, tagged with the
//! field name so that fields sharing a parent each get their own.

use formdom::{Document, Element, Event};

use crate::events::{EventResult, EventRouter, FormEvent};
use crate::{FieldAccessor, FieldState};

/// Class of the element holding a field's error message.
pub const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Data key linking a feedback element to its field name.
const FEEDBACK_FOR: &str = "for";

/// Find the feedback element of a field, if one is shown.
pub fn feedback_element<'a>(doc: &'a Document, name: &str) -> Option<&'a Element> {
    let field = doc.field(name)?;
    doc.parent(&field.id)?.content.children().iter().find(|el| {
        el.has_class(FEEDBACK_CLASS) && el.get_data(FEEDBACK_FOR).map(String::as_str) == Some(name)
    })
}

impl FieldAccessor for Document {
    fn value(&self, name: &str) -> Option<String> {
        self.field(name).map(|el| el.value.clone())
    }

    fn set_state(&mut self, name: &str, state: FieldState) {
        let Some(id) = self.field(name).map(|el| el.id.clone()) else {
            return;
        };
        self.remove_class(&id, FieldState::VALID_CLASS);
        self.remove_class(&id, FieldState::INVALID_CLASS);
        if let Some(class) = state.class() {
            self.add_class(&id, class);
        }
    }

    fn show_error(&mut self, name: &str, message: &str) {
        if let Some(id) = feedback_element(self, name).map(|el| el.id.clone()) {
            self.set_text(&id, message);
            return;
        }

        let Some(field_id) = self.field(name).map(|el| el.id.clone()) else {
            return;
        };
        let Some(parent_id) = self.parent(&field_id).map(|el| el.id.clone()) else {
            log::debug!("field '{name}' has no parent to hold its error message");
            return;
        };

        let feedback = Element::text(message)
            .id(format!("{field_id}-feedback"))
            .class(FEEDBACK_CLASS)
            .data(FEEDBACK_FOR, name);
        self.append_child(&parent_id, feedback);
    }

    fn clear_error(&mut self, name: &str) {
        if let Some(id) = feedback_element(self, name).map(|el| el.id.clone()) {
            self.remove_element(&id);
        }
    }

    fn field_names(&self) -> Vec<String> {
        Document::field_names(self)
    }
}

/// Translate a `formdom` event into a form event.
///
/// Only value changes and focus loss on named fields, and submissions,
/// are relevant to validation.
pub fn to_form_event(doc: &Document, event: &Event) -> Option<FormEvent> {
    if let Event::Submit { .. } = event {
        return Some(FormEvent::Submit);
    }

    let field = doc.element(event.target()?).filter(|el| el.is_field())?;
    let name = field.name.clone()?;
    match event {
        Event::Input { .. } => Some(FormEvent::input(name)),
        Event::Blur { .. } => Some(FormEvent::blur(name)),
        _ => None,
    }
}

/// Run raw events through the document and dispatch the resulting form
/// events to `router`.
///
/// Returns the merged result of every submission in the batch.
pub fn dispatch_events(
    doc: &mut Document,
    router: &EventRouter<Document>,
    events: &[Event],
) -> EventResult {
    let processed = doc.process_events(events);
    dispatch_processed(doc, router, &processed)
}

/// Dispatch events already produced by the document (e.g. from
/// [`Document::focus`] or [`Document::type_text`]).
pub fn dispatch_processed(
    doc: &mut Document,
    router: &EventRouter<Document>,
    events: &[Event],
) -> EventResult {
    let mut result = EventResult::Continue;
    for event in events {
        if let Some(form_event) = to_form_event(doc, event) {
            let outcome = router.dispatch(&form_event, doc);
            if form_event == FormEvent::Submit {
                result = result.merge(outcome);
            }
        }
    }
    result
}
