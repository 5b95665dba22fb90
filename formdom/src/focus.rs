use crate::element::{Content, Element};
use crate::event::Event;

/// Tracks which element is currently focused.
///
/// Focus changes are reported as events: moving focus away from an element
/// produces a `Blur` for it before the `Focus` of the new element.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns the resulting Blur/Focus events, empty if focus did not change.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }

        let mut events = self.blur();
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Clear focus.
    /// Returns a Blur event if there was something focused.
    pub fn blur(&mut self) -> Vec<Event> {
        match self.focused.take() {
            Some(target) => vec![Event::Blur { target }],
            None => Vec::new(),
        }
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let next = match &self.focused {
            None => 0,
            Some(current) => focusable
                .iter()
                .position(|id| id == current)
                .map_or(0, |i| (i + 1) % focusable.len()),
        };

        self.focus(&focusable[next])
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let last = focusable.len() - 1;
        let prev = match &self.focused {
            None => last,
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => last,
                Some(i) => i - 1,
            },
        };

        self.focus(&focusable[prev])
    }
}

/// Collect IDs of all focusable, enabled elements in document order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
