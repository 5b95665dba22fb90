/// Visual validation state of a single field.
///
/// Derived on every validation pass and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Not validated yet, or cleared.
    #[default]
    Neutral,
    /// Passed every rule.
    Valid,
    /// Failed a rule; an error message is shown.
    Invalid,
}

impl FieldState {
    /// CSS class marking a field that passed validation.
    pub const VALID_CLASS: &'static str = "is-valid";
    /// CSS class marking a field that failed validation.
    pub const INVALID_CLASS: &'static str = "is-invalid";

    /// The class a field in this state carries, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Valid => Some(Self::VALID_CLASS),
            Self::Invalid => Some(Self::INVALID_CLASS),
        }
    }
}
