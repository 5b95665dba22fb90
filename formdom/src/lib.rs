pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod text_input;

pub use document::Document;
pub use element::{Content, Element, Tag};
pub use event::{Event, Key, Modifiers};
pub use focus::{FocusState, collect_focusable};
pub use text_input::{TextEditResult, TextInputState};
