//! Rule sets for the application's forms.

use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, FormValidator, ValidatorOptions};

const INVALID_CHARACTERS: &str = "Invalid characters detected";

/// The forms the application validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Registration,
    ServiceRequest,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [Self::Login, Self::Registration, Self::ServiceRequest];

    /// Identifier used on the command line and as the form element ID prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
            Self::ServiceRequest => "service-request",
        }
    }

    /// Build the validator for this form.
    pub fn validator(self, options: ValidatorOptions) -> FormValidator {
        let mut validator = FormValidator::new(options);
        match self {
            Self::Login => {
                email_rules(&mut validator);
                password_rules(&mut validator);
            }
            Self::Registration => {
                validator
                    .field("name")
                    .required("Name is required")
                    .no_script(INVALID_CHARACTERS);
                email_rules(&mut validator);
                password_rules(&mut validator);
                validator
                    .field("confirm_password")
                    .required("Please confirm your password")
                    .matches("password", "Passwords do not match");
            }
            Self::ServiceRequest => {
                validator
                    .field("title")
                    .required("Title is required")
                    .max_length(100, "Title must be less than 100 characters")
                    .no_script(INVALID_CHARACTERS)
                    .field("description")
                    .required("Description is required")
                    .min_length(20, "Description must be at least 20 characters")
                    .no_script(INVALID_CHARACTERS)
                    .field("location")
                    .required("Location is required")
                    .field("date")
                    .required("Date is required");
            }
        }
        validator
    }
}

fn email_rules(validator: &mut FormValidator) {
    validator
        .field("email")
        .required("Email is required")
        .email("Please enter a valid email address")
        .no_sql_injection(INVALID_CHARACTERS);
}

fn password_rules(validator: &mut FormValidator) {
    validator
        .field("password")
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters");
}

impl FromStr for FormKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownForm(s.to_string()))
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
