//! Language tags for lexicons and morphology dispatch.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Languages a lexicon may be written in.
///
/// Morphology rules currently exist for English and French only; requesting
/// rules for any other variant yields [`Error::UnhandledLanguage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English language
    #[default]
    English,
    /// French language
    French,
    /// German language
    German,
    /// Spanish language
    Spanish,
    /// Italian language
    Italian,
}

impl Language {
    /// ISO 639-1 code for this language.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Italian => "it",
        }
    }

    /// English name of this language.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" => Ok(Language::French),
            "de" | "german" => Ok(Language::German),
            "es" | "spanish" => Ok(Language::Spanish),
            "it" | "italian" => Ok(Language::Italian),
            other => Err(Error::invalid_input(format!("unknown language: {other}"))),
        }
    }
}
