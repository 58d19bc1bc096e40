//! Behaviour shared by every element of a realisation tree.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::category::LexicalCategory;
use crate::feature::{Feature, FeatureMap, FeatureValue};
use crate::lang::Language;
use crate::lexicon::Lexicon;
use crate::word::WordElement;

/// Capabilities common to all linguistic elements.
///
/// An element owns a [`FeatureMap`], carries a lexical category, and may
/// hold a non-owning handle to the lexicon it was drawn from. Everything
/// else (elision, language resolution, children) is derived from those.
pub trait LinguisticElement {
    /// The element's feature store.
    fn features(&self) -> &FeatureMap;

    /// Mutable access to the element's feature store.
    fn features_mut(&mut self) -> &mut FeatureMap;

    /// The element's lexical category.
    fn category(&self) -> LexicalCategory;

    /// The lexicon this element was drawn from, if any.
    fn lexicon(&self) -> Option<&Rc<Lexicon>>;

    /// The element's language: its lexicon's language, or English when the
    /// element is not attached to a lexicon.
    fn language(&self) -> Language {
        self.lexicon()
            .map_or_else(Language::default, |lexicon| lexicon.language())
    }

    /// Whether this element is marked for omission from realised output.
    fn is_elided(&self) -> bool {
        self.features()
            .get(&Feature::Elided)
            .and_then(FeatureValue::as_flag)
            .unwrap_or(false)
    }

    /// Mark or unmark this element for omission from realised output.
    fn set_elided(&mut self, elided: bool) {
        self.features_mut()
            .insert(Feature::Elided, FeatureValue::Flag(elided));
    }

    /// Child elements in the realisation tree. Words are leaves, so the
    /// default is the empty sequence.
    fn children(&self) -> Vec<Rc<dyn LinguisticElement>> {
        Vec::new()
    }
}

/// A textual leaf of the realisation tree.
///
/// Realisation turns abstract elements into `StringElement`s holding the
/// surface text, with an optional back-reference to the lexical entry the
/// text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringElement {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    word: Option<Rc<WordElement>>,
}

impl StringElement {
    /// Create a leaf from realised text and the word that produced it.
    #[must_use]
    pub fn new(text: impl Into<String>, word: Option<Rc<WordElement>>) -> Self {
        Self {
            text: text.into(),
            word,
        }
    }

    /// The realised surface text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lexical entry this text was realised from, if known.
    #[must_use]
    pub fn word(&self) -> Option<&Rc<WordElement>> {
        self.word.as_ref()
    }
}

impl std::fmt::Display for StringElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
