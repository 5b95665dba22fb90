use std::collections::HashMap;

use crate::event::{Key, Modifiers};

/// Tracks the cursor of every text field that has been edited.
///
/// The text itself lives on the element (`Element::value`); this state only
/// remembers where the next keystroke lands. Fields that were never edited
/// have their cursor at the end of their value.
#[derive(Debug, Default)]
pub struct TextInputState {
    cursors: HashMap<String, usize>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position (in characters) for a field with the given text.
    pub fn cursor(&self, id: &str, text: &str) -> usize {
        let len = text.chars().count();
        self.cursors.get(id).copied().unwrap_or(len).min(len)
    }

    /// Forget the cursor of a field, placing it at the end of the value.
    pub fn reset(&mut self, id: &str) {
        self.cursors.remove(id);
    }

    /// Handle a key press for text editing, mutating `text` in place.
    pub fn handle_key(
        &mut self,
        id: &str,
        text: &mut String,
        key: Key,
        modifiers: Modifiers,
    ) -> TextEditResult {
        let cursor = self.cursor(id, text);
        let len = text.chars().count();

        let (result, new_cursor) = match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                text.insert(char_to_byte_index(text, cursor), c);
                (TextEditResult::Changed, cursor + 1)
            }

            Key::Backspace if modifiers.none() => {
                if cursor > 0 {
                    text.remove(char_to_byte_index(text, cursor - 1));
                    (TextEditResult::Changed, cursor - 1)
                } else {
                    (TextEditResult::Handled, cursor)
                }
            }

            Key::Delete if modifiers.none() => {
                if cursor < len {
                    text.remove(char_to_byte_index(text, cursor));
                    (TextEditResult::Changed, cursor)
                } else {
                    (TextEditResult::Handled, cursor)
                }
            }

            Key::Left if !modifiers.ctrl => (TextEditResult::Handled, cursor.saturating_sub(1)),
            Key::Right if !modifiers.ctrl => (TextEditResult::Handled, (cursor + 1).min(len)),
            Key::Home if !modifiers.ctrl => (TextEditResult::Handled, 0),
            Key::End if !modifiers.ctrl => (TextEditResult::Handled, len),

            Key::Char('u') if modifiers.ctrl => {
                if text.is_empty() {
                    (TextEditResult::Handled, 0)
                } else {
                    text.clear();
                    (TextEditResult::Changed, 0)
                }
            }

            Key::Enter => (TextEditResult::Submitted, cursor),

            _ => (TextEditResult::Ignored, cursor),
        };

        self.cursors.insert(id.to_string(), new_cursor);
        result
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
