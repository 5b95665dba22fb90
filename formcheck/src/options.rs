//! Validator configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Which field events trigger live validation.
///
/// Both default to true. Submission is always validated. Unknown keys in
/// an options file are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Re-validate a field on every value change.
    pub validate_on_input: bool,
    /// Re-validate a field when it loses focus.
    pub validate_on_blur: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            validate_on_input: true,
            validate_on_blur: true,
        }
    }
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether value changes trigger validation.
    pub fn validate_on_input(mut self, enabled: bool) -> Self {
        self.validate_on_input = enabled;
        self
    }

    /// Set whether focus loss triggers validation.
    pub fn validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    /// Whether any live (non-submit) validation is enabled.
    pub fn is_live(&self) -> bool {
        self.validate_on_input || self.validate_on_blur
    }

    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
