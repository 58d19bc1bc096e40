//! # lexis
//!
//! Word-level element model for natural language generation surface
//! realisation.
//!
//! An NLG realiser turns abstract linguistic specifications into text.
//! This crate provides the word layer of that pipeline:
//!
//! - [`WordElement`]: a lexical entry — base form, category, lexicon
//!   identity and a typed feature store
//! - [`InflectedWordElement`]: one inflected surface instantiation of an
//!   entry, built per realisation need
//! - [`StringElement`]: the textual leaf the realisation process produces
//! - [`MorphologyRules`](morphology::MorphologyRules): the per-language
//!   inflection seam, with English and French registered
//!
//! ## Quick Start
//!
//! ```rust
//! use lexis::{LexicalCategory, WordElement};
//!
//! let mut word = WordElement::with_id("fish", LexicalCategory::Noun, "E123");
//! word.set_inflection_variants("fish");
//!
//! assert_eq!(word.default_spelling_variant(), Some("fish"));
//! assert_eq!(
//!     word.to_xml(false),
//!     "<word><base>fish</base><category>NOUN</category><id>E123</id></word>"
//! );
//! ```
//!
//! ## Realisation
//!
//! ```rust
//! use std::rc::Rc;
//! use lexis::{Language, LexicalCategory, Lexicon, WordElement};
//!
//! let lexicon = Rc::new(Lexicon::new(Language::English));
//! let word = Rc::new(WordElement::new(
//!     Some("fish".to_string()),
//!     LexicalCategory::Noun,
//!     Some("E123".to_string()),
//!     Some(lexicon),
//! ));
//!
//! let realised = word.realise_syntax()?.expect("word is realisable");
//! assert_eq!(realised.text(), "fish");
//! # Ok::<(), lexis::Error>(())
//! ```
//!
//! ## Design Notes
//!
//! - Feature stores are keyed by a closed [`Feature`] enum rather than an
//!   open string map, so a misspelt key is a compile error.
//! - Inflected words hold shared, non-owning [`Rc`](std::rc::Rc) handles
//!   back to their entries; entries never point forward, so no reference
//!   cycles can form.
//! - Morphology dispatch is a closed match over [`Language`] with an
//!   explicit [`Error::UnhandledLanguage`] variant, not a runtime lookup
//!   table.

#![warn(missing_docs)]

mod category;
mod element;
mod error;
mod feature;
mod lang;
mod lexicon;
pub mod morphology;
mod word;
mod xml;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use lexis::prelude::*;
    //!
    //! let word = WordElement::with_base_form("beau", LexicalCategory::Adjective);
    //! assert!(word.children().is_empty());
    //! ```
    pub use crate::category::LexicalCategory;
    pub use crate::element::{LinguisticElement, StringElement};
    pub use crate::error::{Error, Result};
    pub use crate::feature::{Feature, FeatureMap, FeatureValue, OneOrMany};
    pub use crate::lang::Language;
    pub use crate::lexicon::Lexicon;
    pub use crate::morphology::MorphologyRules;
    pub use crate::word::{InflectedWordElement, WordElement};
}

// Re-exports
pub use category::LexicalCategory;
pub use element::{LinguisticElement, StringElement};
pub use error::{Error, Result};
pub use feature::{Feature, FeatureMap, FeatureValue, OneOrMany};
pub use lang::Language;
pub use lexicon::Lexicon;
pub use morphology::{EnglishMorphologyRules, FrenchMorphologyRules, MorphologyRules, rules_for};
pub use word::{InflectedWordElement, WordElement};
