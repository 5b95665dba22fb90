use crate::element::{self, Element};
use crate::event::{Event, Key};
use crate::focus::FocusState;
use crate::text_input::{TextEditResult, TextInputState};

/// A live form tree together with its focus and text-editing state.
///
/// `Document` is the single owner of the tree: every read and write of
/// values, classes and children goes through it, and user interaction is
/// fed in as raw events through [`Document::process_events`].
#[derive(Debug)]
pub struct Document {
    root: Element,
    focus: FocusState,
    text: TextInputState,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            text: TextInputState::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Get an element by ID.
    pub fn element(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    /// Get a form field by its `name`.
    pub fn field(&self, name: &str) -> Option<&Element> {
        element::find_by_name(&self.root, name)
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: &str) -> Option<&Element> {
        element::find_parent(&self.root, id)
    }

    /// Names of all fields in the document, in document order.
    pub fn field_names(&self) -> Vec<String> {
        element::collect_fields(&self.root)
    }

    /// Currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Replace the value of an element. Returns false if it does not exist.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match element::find_element_mut(&mut self.root, id) {
            Some(el) => {
                el.value = value.into();
                self.text.reset(id);
                true
            }
            None => false,
        }
    }

    /// Add a class to an element. Returns true if the class list changed.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        element::find_element_mut(&mut self.root, id)
            .is_some_and(|el| el.add_class(class))
    }

    /// Remove a class from an element. Returns true if the class list changed.
    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        element::find_element_mut(&mut self.root, id)
            .is_some_and(|el| el.remove_class(class))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Replace the text of a text/label element.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match element::find_element_mut(&mut self.root, id) {
            Some(el) => {
                el.content = element::Content::Text(text.into());
                true
            }
            None => false,
        }
    }

    /// Append a child to an element. Returns false if the parent does not exist.
    pub fn append_child(&mut self, parent_id: &str, child: Element) -> bool {
        match element::find_element_mut(&mut self.root, parent_id) {
            Some(parent) => {
                parent.push_child(child);
                true
            }
            None => false,
        }
    }

    /// Detach an element (and its subtree) from the document.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        let removed = element::remove_element(&mut self.root, id)?;
        if self.focus.focused() == Some(id) {
            self.focus.blur();
        }
        Some(removed)
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Move focus to an element. Returns the generated Blur/Focus events.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.element(id).is_none() {
            log::debug!("focus requested for unknown element {id}");
            return Vec::new();
        }
        self.focus.focus(id)
    }

    /// Remove focus. Returns a Blur event if something was focused.
    pub fn blur(&mut self) -> Vec<Event> {
        self.focus.blur()
    }

    /// Focus a field and type `text` into it, one key press per character.
    /// Returns every event produced along the way.
    pub fn type_text(&mut self, id: &str, text: &str) -> Vec<Event> {
        let mut events = self.focus(id);
        let keys: Vec<Event> = text
            .chars()
            .map(|c| Event::Key {
                target: Some(id.to_string()),
                key: Key::Char(c),
                modifiers: Default::default(),
            })
            .collect();
        events.extend(self.process_events(&keys));
        events
    }

    /// Submit the form containing `id` (or the form `id` itself).
    pub fn submit(&mut self, id: &str) -> Option<Event> {
        element::find_form(&self.root, id).map(|form| Event::Submit {
            target: form.id.clone(),
        })
    }

    /// Process raw events, applying text edits and focus navigation.
    ///
    /// Key presses on an input-capturing element edit its value and become
    /// `Input` events; Enter submits the enclosing form; Tab and Shift+Tab
    /// move focus. All other events pass through unchanged.
    pub fn process_events(&mut self, events: &[Event]) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key { key: Key::Tab, .. } => {
                    output.extend(self.focus.focus_next(&self.root));
                }
                Event::Key {
                    key: Key::BackTab, ..
                } => {
                    output.extend(self.focus.focus_prev(&self.root));
                }
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } => {
                    let Some(el) = element::find_element_mut(&mut self.root, target) else {
                        output.push(event.clone());
                        continue;
                    };
                    if !el.captures_input || el.disabled {
                        output.push(event.clone());
                        continue;
                    }

                    match self.text.handle_key(target, &mut el.value, *key, *modifiers) {
                        TextEditResult::Changed => output.push(Event::Input {
                            target: target.clone(),
                            value: el.value.clone(),
                        }),
                        TextEditResult::Submitted => {
                            if let Some(submit) = self.submit(target) {
                                output.push(submit);
                            }
                        }
                        TextEditResult::Handled => {}
                        TextEditResult::Ignored => output.push(event.clone()),
                    }
                }
                _ => output.push(event.clone()),
            }
        }

        output
    }
}
