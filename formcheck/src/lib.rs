//! Form validation engine.
//!
//! Attach ordered, declarative rules to the named fields of a form, evaluate
//! them on demand or on field events, and reflect the outcome on the fields.
//!
//! # Example
//!
//! ```ignore
//! use formcheck::{FormValidator, MemoryForm, ValidatorOptions};
//!
//! let mut validator = FormValidator::new(ValidatorOptions::default());
//! validator
//!     .field("password")
//!     .required("Password is required")
//!     .field("confirm_password")
//!     .matches("password", "Passwords do not match");
//!
//! let mut form = MemoryForm::new()
//!     .with("password", "abc12345")
//!     .with("confirm_password", "different");
//!
//! assert!(!validator.validate_all(&mut form));
//! assert_eq!(form.error("confirm_password"), Some("Passwords do not match"));
//! ```

pub mod accessor;
pub mod binding;
pub mod error;
pub mod events;
pub mod memory;
pub mod options;
pub mod presets;
pub mod result;
pub mod rule;
pub mod rules;
pub mod state;
pub mod validator;

pub use accessor::{FieldAccessor, FieldContext};
pub use error::ConfigError;
pub use events::{EventResult, EventRouter, FieldEventKind, FormEvent};
pub use memory::MemoryForm;
pub use options::ValidatorOptions;
pub use presets::FormKind;
pub use result::{FieldError, ValidationResult};
pub use rule::Rule;
pub use state::FieldState;
pub use validator::{FieldBuilder, FormValidator};
