//! Error types for lexis.

use thiserror::Error;

use crate::lang::Language;

/// Result type for lexis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lexis operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No morphology rules are registered for the requested language.
    #[error("the {0} language is currently unhandled")]
    UnhandledLanguage(Language),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an unhandled language error.
    #[must_use]
    pub fn unhandled_language(language: Language) -> Self {
        Error::UnhandledLanguage(language)
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhandled_language_names_the_language() {
        let err = Error::unhandled_language(Language::German);
        assert_eq!(err.to_string(), "the German language is currently unhandled");
    }
}
