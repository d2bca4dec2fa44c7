use thiserror::Error;

/// Misuse of a form schema or of the value resolver.
///
/// These never originate from user input: a correctly wired renderer does not
/// produce them, so callers log them and leave the form state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown tab '{0}'")]
    UnknownTab(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' is marked not applicable; text input is disabled")]
    InvalidStateTransition { field: String },

    #[error("field '{field}' has no not-applicable option")]
    UnsupportedOperation { field: String },
}
