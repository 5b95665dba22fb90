//! Toolkit-independent form events and handler subscription.
//!
//! A binding translates its own events into [`FormEvent`]s and feeds them to
//! an [`EventRouter`]. Handlers are plain closures over the binding's form
//! type `C`, so tests can dispatch events directly without any event loop.

use std::collections::HashMap;

/// Field events that can trigger live validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEventKind {
    /// The field's value changed.
    Input,
    /// The field lost focus.
    Blur,
}

/// An event addressed to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Field { name: String, kind: FieldEventKind },
    Submit,
}

impl FormEvent {
    pub fn input(name: impl Into<String>) -> Self {
        Self::Field {
            name: name.into(),
            kind: FieldEventKind::Input,
        }
    }

    pub fn blur(name: impl Into<String>) -> Self {
        Self::Field {
            name: name.into(),
            kind: FieldEventKind::Blur,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventResult {
    /// Let the default action (e.g. native submission) happen.
    #[default]
    Continue,
    /// Suppress the default action.
    PreventDefault,
}

impl EventResult {
    pub fn is_prevented(self) -> bool {
        self == Self::PreventDefault
    }

    /// Combine two results; prevention wins.
    pub fn merge(self, other: Self) -> Self {
        if self.is_prevented() || other.is_prevented() {
            Self::PreventDefault
        } else {
            Self::Continue
        }
    }
}

/// An event handler over the form type `C`.
pub type Handler<C> = Box<dyn Fn(&mut C) -> EventResult>;

/// Subscription table mapping form events to handlers.
pub struct EventRouter<C> {
    field_handlers: HashMap<(String, FieldEventKind), Vec<Handler<C>>>,
    submit_handlers: Vec<Handler<C>>,
}

impl<C> EventRouter<C> {
    pub fn new() -> Self {
        Self {
            field_handlers: HashMap::new(),
            submit_handlers: Vec::new(),
        }
    }

    /// Subscribe a handler to one kind of event on one field.
    pub fn on_field_event<F>(&mut self, name: impl Into<String>, kind: FieldEventKind, handler: F)
    where
        F: Fn(&mut C) -> EventResult + 'static,
    {
        self.field_handlers
            .entry((name.into(), kind))
            .or_default()
            .push(Box::new(handler));
    }

    /// Subscribe a handler to form submission.
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: Fn(&mut C) -> EventResult + 'static,
    {
        self.submit_handlers.push(Box::new(handler));
    }

    /// Number of handlers subscribed to an event.
    pub fn handler_count(&self, event: &FormEvent) -> usize {
        self.handlers(event).map_or(0, |handlers| handlers.len())
    }

    /// Run every handler subscribed to `event`, in subscription order.
    ///
    /// Returns `PreventDefault` if any handler asked for it.
    pub fn dispatch(&self, event: &FormEvent, form: &mut C) -> EventResult {
        let Some(handlers) = self.handlers(event) else {
            log::trace!("no handlers for {event:?}");
            return EventResult::Continue;
        };

        log::trace!("dispatching {event:?} to {} handler(s)", handlers.len());
        handlers
            .iter()
            .fold(EventResult::Continue, |result, handler| {
                result.merge(handler(&mut *form))
            })
    }

    fn handlers(&self, event: &FormEvent) -> Option<&Vec<Handler<C>>> {
        match event {
            FormEvent::Field { name, kind } => self.field_handlers.get(&(name.clone(), *kind)),
            FormEvent::Submit => Some(&self.submit_handlers),
        }
    }
}

impl<C> Default for EventRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}
