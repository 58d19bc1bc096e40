//! Typed feature store shared by all linguistic elements.
//!
//! Elements carry their linguistic annotations in a [`FeatureMap`]: a map
//! from a closed set of well-known keys ([`Feature`]) to typed values
//! ([`FeatureValue`]). Keys are unique and insertion order is irrelevant,
//! so map equality is order-independent.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::word::WordElement;

/// Well-known keys addressing the feature store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Preferred inflected form of a word
    DefaultInflection,
    /// Valid inflected forms of a word
    Inflections,
    /// Alternative spellings of the same form
    SpellingVariants,
    /// Preferred spelling among the variants
    DefaultSpelling,
    /// Surface base form an inflected word realises
    BaseForm,
    /// Lexical entry an inflected word was built from
    BaseWord,
    /// Whether the element is omitted from realised output
    Elided,
}

impl Feature {
    /// Stable lowercase name, used in diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::DefaultInflection => "default_inflection",
            Feature::Inflections => "inflections",
            Feature::SpellingVariants => "spelling_variants",
            Feature::DefaultSpelling => "default_spelling",
            Feature::BaseForm => "base_form",
            Feature::BaseWord => "base_word",
            Feature::Elided => "elided",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value stored under a [`Feature`] key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// A single text value
    Text(String),
    /// An ordered sequence of text values
    Texts(Vec<String>),
    /// A boolean flag
    Flag(bool),
    /// A shared handle to a lexical entry
    Word(Rc<WordElement>),
}

impl FeatureValue {
    /// The text value, if this is a single text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The text sequence, if this is a sequence.
    #[must_use]
    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            FeatureValue::Texts(v) => Some(v),
            _ => None,
        }
    }

    /// The flag value, if this is a flag.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FeatureValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// The word handle, if this is a word.
    #[must_use]
    pub fn as_word(&self) -> Option<&Rc<WordElement>> {
        match self {
            FeatureValue::Word(w) => Some(w),
            _ => None,
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s.to_owned())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Text(s)
    }
}

impl From<Vec<String>> for FeatureValue {
    fn from(v: Vec<String>) -> Self {
        FeatureValue::Texts(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Flag(b)
    }
}

impl From<Rc<WordElement>> for FeatureValue {
    fn from(w: Rc<WordElement>) -> Self {
        FeatureValue::Word(w)
    }
}

/// One value or several, for setters that accept either.
///
/// Setters with a coercing contract (a bare scalar becomes a one-element
/// sequence) take `impl Into<OneOrMany>` so both spellings read naturally:
///
/// ```
/// use lexis::{LexicalCategory, WordElement};
///
/// let mut word = WordElement::with_base_form("fish", LexicalCategory::Noun);
/// word.set_inflection_variants("fish");
/// assert_eq!(word.inflection_variants(), Some(&["fish".to_string()][..]));
///
/// word.set_inflection_variants(vec!["fish".to_string(), "fishes".to_string()]);
/// assert_eq!(word.inflection_variants().map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Clone)]
pub enum OneOrMany {
    /// A single value
    One(String),
    /// An ordered sequence of values
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalise into an ordered sequence; a single value becomes a
    /// one-element sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(s: &str) -> Self {
        OneOrMany::One(s.to_owned())
    }
}

impl From<String> for OneOrMany {
    fn from(s: String) -> Self {
        OneOrMany::One(s)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(v: Vec<String>) -> Self {
        OneOrMany::Many(v)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(v: Vec<&str>) -> Self {
        OneOrMany::Many(v.into_iter().map(str::to_owned).collect())
    }
}

/// Mapping from feature keys to values carried by an element.
pub type FeatureMap = HashMap<Feature, FeatureValue>;
