//! Word-level elements: lexical entries and their inflected instantiations.
//!
//! [`WordElement`] is one entry of a lexicon: an identity (base form, id,
//! category, lexicon handle) fixed at construction, plus a mutable feature
//! store. [`InflectedWordElement`] is one surface instantiation of such an
//! entry: it copies the entry's features at construction time and records a
//! shared handle back to it. Many inflected instances may point at one
//! entry; the entry is unaware of them.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::category::LexicalCategory;
use crate::element::{LinguisticElement, StringElement};
use crate::error::Result;
use crate::feature::{Feature, FeatureMap, FeatureValue, OneOrMany};
use crate::lexicon::Lexicon;
use crate::morphology::{self, MorphologyRules};
use crate::xml::XmlWriter;

// =============================================================================
// WordElement
// =============================================================================

/// A lexical entry.
///
/// The base form, category, id and lexicon handle are fixed once the entry
/// is constructed; the feature store stays mutable for the entry's
/// lifetime. Every identity field may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordElement {
    base_form: Option<String>,
    category: LexicalCategory,
    id: Option<String>,
    #[serde(skip)]
    lexicon: Option<Rc<Lexicon>>,
    features: FeatureMap,
}

impl WordElement {
    /// Create a lexical entry with the given base form, category, lexicon
    /// id and lexicon handle, and an empty feature store.
    #[must_use]
    pub fn new(
        base_form: Option<String>,
        category: LexicalCategory,
        id: Option<String>,
        lexicon: Option<Rc<Lexicon>>,
    ) -> Self {
        Self {
            base_form,
            category,
            id,
            lexicon,
            features: FeatureMap::new(),
        }
    }

    /// Create an entry with a base form and category only.
    #[must_use]
    pub fn with_base_form(base_form: impl Into<String>, category: LexicalCategory) -> Self {
        Self::new(Some(base_form.into()), category, None, None)
    }

    /// Create an entry with a base form, category and lexicon id.
    #[must_use]
    pub fn with_id(
        base_form: impl Into<String>,
        category: LexicalCategory,
        id: impl Into<String>,
    ) -> Self {
        Self::new(Some(base_form.into()), category, Some(id.into()), None)
    }

    /// The canonical, uninflected spelling of this entry.
    #[must_use]
    pub fn base_form(&self) -> Option<&str> {
        self.base_form.as_deref()
    }

    /// Identifier of this entry within its lexicon.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The entry's lexical category.
    #[must_use]
    pub fn category(&self) -> LexicalCategory {
        self.category
    }

    /// The lexicon this entry was drawn from, if any.
    #[must_use]
    pub fn lexicon(&self) -> Option<&Rc<Lexicon>> {
        self.lexicon.as_ref()
    }

    /// The preferred inflected form of this entry.
    #[must_use]
    pub fn default_inflection_variant(&self) -> Option<&str> {
        self.features
            .get(&Feature::DefaultInflection)
            .and_then(FeatureValue::as_text)
    }

    /// Set the preferred inflected form.
    pub fn set_default_inflection_variant(&mut self, variant: impl Into<String>) {
        self.features
            .insert(Feature::DefaultInflection, FeatureValue::Text(variant.into()));
    }

    /// The valid inflected forms of this entry, if recorded.
    #[must_use]
    pub fn inflection_variants(&self) -> Option<&[String]> {
        self.features
            .get(&Feature::Inflections)
            .and_then(FeatureValue::as_texts)
    }

    /// Set the valid inflected forms. A bare scalar is stored as a
    /// one-element sequence.
    pub fn set_inflection_variants(&mut self, variants: impl Into<OneOrMany>) {
        self.features.insert(
            Feature::Inflections,
            FeatureValue::Texts(variants.into().into_vec()),
        );
    }

    /// Alternative spellings of this entry.
    #[must_use]
    pub fn spelling_variants(&self) -> Option<&[String]> {
        self.features
            .get(&Feature::SpellingVariants)
            .and_then(FeatureValue::as_texts)
    }

    /// Set the alternative spellings, stored verbatim.
    pub fn set_spelling_variants(&mut self, variants: Vec<String>) {
        self.features
            .insert(Feature::SpellingVariants, FeatureValue::Texts(variants));
    }

    /// The preferred spelling: the explicitly set default if present,
    /// otherwise the base form.
    #[must_use]
    pub fn default_spelling_variant(&self) -> Option<&str> {
        self.features
            .get(&Feature::DefaultSpelling)
            .and_then(FeatureValue::as_text)
            .or(self.base_form.as_deref())
    }

    /// Set the preferred spelling.
    pub fn set_default_spelling_variant(&mut self, variant: impl Into<String>) {
        self.features
            .insert(Feature::DefaultSpelling, FeatureValue::Text(variant.into()));
    }

    /// Serialise this entry as an XML fragment.
    ///
    /// The root element is `word`; `base`, `category` and `id` children
    /// follow in that order, each omitted when it does not apply (absent
    /// base form or id, wildcard category). Compact output is a single
    /// line; `pretty` indents children by two spaces.
    ///
    /// ```
    /// use lexis::{LexicalCategory, WordElement};
    ///
    /// let word = WordElement::with_id("beau", LexicalCategory::Adjective, "E1");
    /// assert_eq!(
    ///     word.to_xml(false),
    ///     "<word><base>beau</base><category>ADJECTIVE</category><id>E1</id></word>"
    /// );
    /// ```
    #[must_use]
    pub fn to_xml(&self, pretty: bool) -> String {
        let mut xml = XmlWriter::new(pretty);
        xml.open("word");
        if let Some(base) = &self.base_form {
            xml.leaf("base", base);
        }
        if !self.category.is_wildcard() {
            xml.leaf("category", self.category.as_label());
        }
        if let Some(id) = &self.id {
            xml.leaf("id", id);
        }
        xml.close("word");
        xml.finish()
    }

    /// Realise this entry syntactically by building an inflected
    /// instantiation of it. Elided entries realise to nothing.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::UnhandledLanguage`] when the entry's
    /// lexicon is in a language without morphology rules.
    pub fn realise_syntax(self: &Rc<Self>) -> Result<Option<StringElement>> {
        if self.is_elided() {
            return Ok(None);
        }
        InflectedWordElement::from_word(Rc::clone(self)).realise_syntax()
    }

    /// Realise this entry morphologically: its preferred spelling as a
    /// textual leaf.
    #[must_use]
    pub fn realise_morphology(self: &Rc<Self>) -> Option<StringElement> {
        self.default_spelling_variant()
            .map(|form| StringElement::new(form, Some(Rc::clone(self))))
    }
}

/// Entries are equal when their base form, id and full feature store
/// match. Category and lexicon identity are not compared.
impl PartialEq for WordElement {
    fn eq(&self, other: &Self) -> bool {
        self.base_form == other.base_form && self.id == other.id && self.features == other.features
    }
}

impl Eq for WordElement {}

impl LinguisticElement for WordElement {
    fn features(&self) -> &FeatureMap {
        &self.features
    }

    fn features_mut(&mut self) -> &mut FeatureMap {
        &mut self.features
    }

    fn category(&self) -> LexicalCategory {
        self.category
    }

    fn lexicon(&self) -> Option<&Rc<Lexicon>> {
        self.lexicon.as_ref()
    }
}

impl fmt::Display for WordElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<WordElement [{}:{}]>",
            self.base_form.as_deref().unwrap_or(""),
            self.category
        )
    }
}

// =============================================================================
// InflectedWordElement
// =============================================================================

/// One inflected surface instantiation of a lexical entry.
///
/// Built per realisation need and not cached by the entry it came from.
/// Construction copies the entry's feature store, so mutating an inflected
/// word never touches the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectedWordElement {
    category: LexicalCategory,
    features: FeatureMap,
}

impl InflectedWordElement {
    /// Create an inflected word from an optional base entry and an optional
    /// explicit category.
    ///
    /// With a base entry, its features are copied into an independent
    /// store, the entry itself is recorded under the base-word feature, and
    /// the base-form feature is seeded from the entry's preferred spelling.
    /// The category is the explicit one when supplied, the entry's
    /// otherwise. Without a base entry the feature store starts empty and
    /// the category falls back to the wildcard.
    #[must_use]
    pub fn new(word: Option<Rc<WordElement>>, category: Option<LexicalCategory>) -> Self {
        let mut features = FeatureMap::new();
        let mut resolved = category;
        if let Some(word) = word {
            features = word.features().clone();
            if resolved.is_none() {
                resolved = Some(word.category());
            }
            if let Some(form) = word.default_spelling_variant() {
                features.insert(Feature::BaseForm, FeatureValue::Text(form.to_owned()));
            }
            features.insert(Feature::BaseWord, FeatureValue::Word(word));
        }
        Self {
            category: resolved.unwrap_or_default(),
            features,
        }
    }

    /// Create an inflected word inheriting everything from its base entry.
    #[must_use]
    pub fn from_word(word: Rc<WordElement>) -> Self {
        Self::new(Some(word), None)
    }

    /// The lexical entry this word was built from.
    #[must_use]
    pub fn base_word(&self) -> Option<&Rc<WordElement>> {
        self.features
            .get(&Feature::BaseWord)
            .and_then(FeatureValue::as_word)
    }

    /// Replace the lexical entry this word points back to.
    pub fn set_base_word(&mut self, word: Rc<WordElement>) {
        self.features
            .insert(Feature::BaseWord, FeatureValue::Word(word));
    }

    /// The surface base form this word realises.
    #[must_use]
    pub fn base_form(&self) -> Option<&str> {
        self.features
            .get(&Feature::BaseForm)
            .and_then(FeatureValue::as_text)
    }

    /// The lexicon of the base entry, when one is recorded.
    #[must_use]
    pub fn lexicon(&self) -> Option<&Rc<Lexicon>> {
        self.base_word().and_then(|word| word.lexicon())
    }

    /// The morphology rules for this word's language.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::UnhandledLanguage`] when the language has
    /// no registered rules.
    pub fn morphology_rules(&self) -> Result<&'static dyn MorphologyRules> {
        morphology::rules_for(self.language())
    }

    /// Realise this word as a textual leaf via its morphology rules.
    ///
    /// Elided words, and words whose lexicon or base form is unavailable,
    /// realise to nothing.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::UnhandledLanguage`] when the word's
    /// language has no registered rules.
    pub fn realise_syntax(&self) -> Result<Option<StringElement>> {
        if self.is_elided() {
            return Ok(None);
        }
        if self.lexicon().is_none() || self.base_form().is_none() {
            log::debug!("word not realisable: lexicon or base form unavailable");
            return Ok(None);
        }
        let rules = self.morphology_rules()?;
        Ok(rules.realise_word(self))
    }
}

impl LinguisticElement for InflectedWordElement {
    fn features(&self) -> &FeatureMap {
        &self.features
    }

    fn features_mut(&mut self) -> &mut FeatureMap {
        &mut self.features
    }

    fn category(&self) -> LexicalCategory {
        self.category
    }

    fn lexicon(&self) -> Option<&Rc<Lexicon>> {
        InflectedWordElement::lexicon(self)
    }
}

impl fmt::Display for InflectedWordElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<InflectedWordElement [{}:{}]>",
            self.base_form().unwrap_or(""),
            self.category
        )
    }
}
