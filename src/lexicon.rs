//! Handle to the dictionary a word was drawn from.

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// Identity of the lexicon a [`WordElement`](crate::WordElement) comes from.
///
/// Word entities only ever consult the lexicon's identity and language; the
/// dictionary contents themselves (entry lookup, category and feature
/// matching) live in a separate service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    id: Option<String>,
    language: Language,
}

impl Lexicon {
    /// Create an anonymous lexicon handle for the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { id: None, language }
    }

    /// Create a named lexicon handle.
    #[must_use]
    pub fn with_id(id: impl Into<String>, language: Language) -> Self {
        Self {
            id: Some(id.into()),
            language,
        }
    }

    /// Identifier of this lexicon, if it has one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Language this lexicon is written in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}
