//! Morphology rule dispatch, keyed by language.
//!
//! The per-language inflection engines are collaborators behind the
//! [`MorphologyRules`] trait; this crate ships baseline English and French
//! implementations that realise the stored base form verbatim. Dispatch is
//! a closed match over [`Language`], so an unsupported language is an
//! explicit [`Error::UnhandledLanguage`] rather than a lookup failure.

use crate::element::StringElement;
use crate::error::{Error, Result};
use crate::lang::Language;
use crate::word::InflectedWordElement;

/// Per-language morphological realisation rules.
pub trait MorphologyRules {
    /// The language these rules apply to.
    fn language(&self) -> Language;

    /// Realise the surface form of an inflected word.
    ///
    /// Returns `None` when the word carries no realisable base form.
    fn realise_word(&self, word: &InflectedWordElement) -> Option<StringElement>;
}

fn realise_base_form(word: &InflectedWordElement) -> Option<StringElement> {
    let form = word.base_form()?;
    Some(StringElement::new(form, word.base_word().cloned()))
}

/// Morphology rules for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMorphologyRules;

impl MorphologyRules for EnglishMorphologyRules {
    fn language(&self) -> Language {
        Language::English
    }

    fn realise_word(&self, word: &InflectedWordElement) -> Option<StringElement> {
        realise_base_form(word)
    }
}

/// Morphology rules for French.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchMorphologyRules;

impl MorphologyRules for FrenchMorphologyRules {
    fn language(&self) -> Language {
        Language::French
    }

    fn realise_word(&self, word: &InflectedWordElement) -> Option<StringElement> {
        realise_base_form(word)
    }
}

/// Look up the morphology rules for a language.
///
/// # Errors
///
/// Returns [`Error::UnhandledLanguage`] for any language without registered
/// rules.
pub fn rules_for(language: Language) -> Result<&'static dyn MorphologyRules> {
    match language {
        Language::English => Ok(&EnglishMorphologyRules),
        Language::French => Ok(&FrenchMorphologyRules),
        other => {
            log::debug!("no morphology rules registered for {other}");
            Err(Error::unhandled_language(other))
        }
    }
}
