use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The kind of element, mirroring the handful of HTML tags a form uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tag {
    Form,
    #[default]
    Group,
    Label,
    Text,
    Input,
    Password,
    TextArea,
    Select,
    Button,
}

impl Tag {
    /// Whether elements with this tag hold a user-editable value
    /// (`input, select, textarea`).
    pub fn is_field(self) -> bool {
        matches!(
            self,
            Tag::Input | Tag::Password | Tag::TextArea | Tag::Select
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    /// Form field name (the `name` attribute).
    pub name: Option<String>,

    // Content
    pub content: Content,
    /// Current value of a field. Empty for non-field elements.
    pub value: String,

    // Visual
    pub classes: Vec<String>,

    // Interaction
    pub focusable: bool,
    /// When true, this element captures keyboard input (text fields).
    pub captures_input: bool,
    pub disabled: bool,

    // Custom data storage (data-* attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Group,
            name: None,
            content: Content::None,
            value: String::new(),
            classes: Vec::new(),
            focusable: false,
            captures_input: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            tag: Tag::Form,
            ..Default::default()
        }
    }

    pub fn group() -> Self {
        Self {
            id: generate_id("group"),
            tag: Tag::Group,
            ..Default::default()
        }
    }

    pub fn label(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            tag: Tag::Label,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a text input element bound to a form field name.
    pub fn input(name: impl Into<String>) -> Self {
        Self::field(Tag::Input, "input", name)
    }

    /// Create a masked text input.
    pub fn password(name: impl Into<String>) -> Self {
        Self::field(Tag::Password, "password", name)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::field(Tag::TextArea, "textarea", name)
    }

    /// Create a select element. Its value is set programmatically,
    /// it does not capture typed input.
    pub fn select(name: impl Into<String>) -> Self {
        Self {
            captures_input: false,
            ..Self::field(Tag::Select, "select", name)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            content: Content::Text(label.into()),
            focusable: true,
            ..Default::default()
        }
    }

    fn field(tag: Tag, prefix: &str, name: impl Into<String>) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            name: Some(name.into()),
            focusable: true,
            captures_input: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if the class was not already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn captures_input(mut self, captures: bool) -> Self {
        self.captures_input = captures;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether this element is a named, editable form field.
    pub fn is_field(&self) -> bool {
        self.tag.is_field() && self.name.is_some()
    }

    /// Text of a text/label element, or `None` for containers and fields.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child in place, replacing text content if there was any.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }
}
