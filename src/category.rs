//! Lexical categories of words.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lexical category of a word.
///
/// `Any` is the wildcard: it matches every category and is suppressed when
/// rendering a word to XML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexicalCategory {
    /// Wildcard category, matches anything
    #[default]
    Any,
    /// Noun
    Noun,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Verb
    Verb,
    /// Determiner (a, the)
    Determiner,
    /// Pronoun (she, it)
    Pronoun,
    /// Conjunction (and, but)
    Conjunction,
    /// Preposition (on, under)
    Preposition,
    /// Complementiser (that, whether)
    Complementiser,
    /// Modal verb (can, must)
    Modal,
    /// Auxiliary verb (be, have)
    Auxiliary,
    /// Symbol or punctuation token
    Symbol,
}

impl LexicalCategory {
    /// Convert to the uppercase label used in serialised output.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            LexicalCategory::Any => "ANY",
            LexicalCategory::Noun => "NOUN",
            LexicalCategory::Adjective => "ADJECTIVE",
            LexicalCategory::Adverb => "ADVERB",
            LexicalCategory::Verb => "VERB",
            LexicalCategory::Determiner => "DETERMINER",
            LexicalCategory::Pronoun => "PRONOUN",
            LexicalCategory::Conjunction => "CONJUNCTION",
            LexicalCategory::Preposition => "PREPOSITION",
            LexicalCategory::Complementiser => "COMPLEMENTISER",
            LexicalCategory::Modal => "MODAL",
            LexicalCategory::Auxiliary => "AUXILIARY",
            LexicalCategory::Symbol => "SYMBOL",
        }
    }

    /// Returns true for the wildcard category.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, LexicalCategory::Any)
    }
}

impl std::fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl std::str::FromStr for LexicalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ANY" => Ok(LexicalCategory::Any),
            "NOUN" => Ok(LexicalCategory::Noun),
            "ADJECTIVE" => Ok(LexicalCategory::Adjective),
            "ADVERB" => Ok(LexicalCategory::Adverb),
            "VERB" => Ok(LexicalCategory::Verb),
            "DETERMINER" => Ok(LexicalCategory::Determiner),
            "PRONOUN" => Ok(LexicalCategory::Pronoun),
            "CONJUNCTION" => Ok(LexicalCategory::Conjunction),
            "PREPOSITION" => Ok(LexicalCategory::Preposition),
            "COMPLEMENTISER" => Ok(LexicalCategory::Complementiser),
            "MODAL" => Ok(LexicalCategory::Modal),
            "AUXILIARY" => Ok(LexicalCategory::Auxiliary),
            "SYMBOL" => Ok(LexicalCategory::Symbol),
            other => Err(Error::invalid_input(format!(
                "unknown lexical category: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrip() {
        let categories = [
            LexicalCategory::Any,
            LexicalCategory::Noun,
            LexicalCategory::Adjective,
            LexicalCategory::Adverb,
            LexicalCategory::Verb,
            LexicalCategory::Determiner,
            LexicalCategory::Pronoun,
            LexicalCategory::Conjunction,
            LexicalCategory::Preposition,
            LexicalCategory::Complementiser,
            LexicalCategory::Modal,
            LexicalCategory::Auxiliary,
            LexicalCategory::Symbol,
        ];

        for category in categories {
            let label = category.as_label();
            let parsed: LexicalCategory = label.parse().unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "adjective".parse::<LexicalCategory>().unwrap(),
            LexicalCategory::Adjective
        );
    }

    #[test]
    fn wildcard_is_the_default() {
        assert_eq!(LexicalCategory::default(), LexicalCategory::Any);
        assert!(LexicalCategory::Any.is_wildcard());
        assert!(!LexicalCategory::Noun.is_wildcard());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("GERUND".parse::<LexicalCategory>().is_err());
    }
}
