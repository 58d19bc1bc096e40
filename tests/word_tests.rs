//! Behavioural tests for the word-level element model.
//!
//! Construction, equality, the feature accessors and their coercion rules,
//! and the inflected-word constructor semantics.

use std::rc::Rc;

use lexis::{
    Error, InflectedWordElement, Language, LexicalCategory, Lexicon, LinguisticElement,
    WordElement,
};

fn fish() -> WordElement {
    WordElement::with_id("fish", LexicalCategory::Noun, "E123")
}

// =============================================================================
// WordElement
// =============================================================================

mod word_element {
    use super::*;

    #[test]
    fn construction_reads_back_exactly() {
        let lexicon = Rc::new(Lexicon::with_id("oald", Language::English));
        let word = WordElement::new(
            Some("fish".to_string()),
            LexicalCategory::Noun,
            Some("E123".to_string()),
            Some(Rc::clone(&lexicon)),
        );

        assert_eq!(word.base_form(), Some("fish"));
        assert_eq!(word.category(), LexicalCategory::Noun);
        assert_eq!(word.id(), Some("E123"));
        assert!(Rc::ptr_eq(word.lexicon().unwrap(), &lexicon));
    }

    #[test]
    fn all_identity_fields_may_be_absent() {
        let word = WordElement::new(None, LexicalCategory::Any, None, None);
        assert!(word.base_form().is_none());
        assert!(word.id().is_none());
        assert!(word.lexicon().is_none());
        assert!(word.category().is_wildcard());
    }

    #[test]
    fn equality_table() {
        let beau = || WordElement::with_id("beau", LexicalCategory::Adjective, "E123");
        assert_eq!(beau(), beau());

        let joli = WordElement::with_id("joli", LexicalCategory::Adjective, "E1");
        assert_ne!(joli, beau());

        // Same identity, diverged features.
        let mut decorated = beau();
        decorated.set_spelling_variants(vec!["bel".to_string()]);
        assert_ne!(decorated, beau());
    }

    #[test]
    fn equality_ignores_the_lexicon_handle() {
        let with_lexicon = WordElement::new(
            Some("beau".to_string()),
            LexicalCategory::Adjective,
            Some("E123".to_string()),
            Some(Rc::new(Lexicon::new(Language::French))),
        );
        let without = WordElement::with_id("beau", LexicalCategory::Adjective, "E123");
        assert_eq!(with_lexicon, without);
    }

    #[test]
    fn scalar_coercion_law() {
        let mut word = fish();
        word.set_inflection_variants("fish");
        assert_eq!(word.inflection_variants(), Some(&["fish".to_string()][..]));
    }

    #[test]
    fn default_inflection_variant_roundtrip() {
        let mut word = fish();
        assert!(word.default_inflection_variant().is_none());
        word.set_default_inflection_variant("fish");
        assert_eq!(word.default_inflection_variant(), Some("fish"));
    }

    #[test]
    fn default_spelling_variant_fallback_and_override() {
        let mut word = fish();
        assert_eq!(word.default_spelling_variant(), Some("fish"));

        word.set_default_spelling_variant("clé");
        assert_eq!(word.default_spelling_variant(), Some("clé"));

        let formless = WordElement::new(None, LexicalCategory::Noun, None, None);
        assert!(formless.default_spelling_variant().is_none());
    }

    #[test]
    fn words_are_leaves() {
        assert!(fish().children().is_empty());
    }

    #[test]
    fn language_defaults_to_english_without_a_lexicon() {
        assert_eq!(fish().language(), Language::English);

        let word = WordElement::new(
            None,
            LexicalCategory::Any,
            None,
            Some(Rc::new(Lexicon::new(Language::French))),
        );
        assert_eq!(word.language(), Language::French);
    }
}

// =============================================================================
// InflectedWordElement
// =============================================================================

mod inflected_word_element {
    use super::*;

    fn lexicalised(language: Language) -> Rc<WordElement> {
        Rc::new(WordElement::new(
            Some("fish".to_string()),
            LexicalCategory::Noun,
            Some("E123".to_string()),
            Some(Rc::new(Lexicon::new(language))),
        ))
    }

    #[test]
    fn feature_copy_is_independent() {
        let mut word = fish();
        word.set_inflection_variants(vec!["fish", "fishes"]);
        let word = Rc::new(word);

        let mut inflected = InflectedWordElement::from_word(Rc::clone(&word));
        inflected.set_elided(true);

        assert!(inflected.is_elided());
        assert!(!word.is_elided());
        assert_eq!(
            word.inflection_variants(),
            Some(&["fish".to_string(), "fishes".to_string()][..])
        );
    }

    #[test]
    fn base_form_is_seeded_from_the_preferred_spelling() {
        // Regression for the constructor: the seed is the default spelling
        // variant, which itself falls back to the base form.
        let plain = InflectedWordElement::from_word(Rc::new(fish()));
        assert_eq!(plain.base_form(), Some("fish"));

        let mut word = fish();
        word.set_default_spelling_variant("clé");
        let overridden = InflectedWordElement::from_word(Rc::new(word));
        assert_eq!(overridden.base_form(), Some("clé"));
    }

    #[test]
    fn lexicon_resolves_through_the_recorded_base_word() {
        let word = lexicalised(Language::English);
        let inflected = InflectedWordElement::from_word(Rc::clone(&word));
        assert!(Rc::ptr_eq(inflected.base_word().unwrap(), &word));
        assert_eq!(inflected.lexicon().unwrap().language(), Language::English);
    }

    #[test]
    fn explicit_category_wins_over_the_inherited_one() {
        let inflected = InflectedWordElement::new(
            Some(lexicalised(Language::English)),
            Some(LexicalCategory::Verb),
        );
        assert_eq!(inflected.category(), LexicalCategory::Verb);
        assert_eq!(inflected.base_form(), Some("fish"));
    }

    #[test]
    fn swapping_the_base_word_redirects_the_lexicon() {
        let mut inflected = InflectedWordElement::from_word(lexicalised(Language::English));
        inflected.set_base_word(lexicalised(Language::French));
        assert_eq!(inflected.lexicon().unwrap().language(), Language::French);
    }

    #[test]
    fn unhandled_language_is_an_explicit_error() {
        let inflected = InflectedWordElement::from_word(lexicalised(Language::Spanish));
        assert!(matches!(
            inflected.morphology_rules(),
            Err(Error::UnhandledLanguage(Language::Spanish))
        ));
        assert!(matches!(
            inflected.realise_syntax(),
            Err(Error::UnhandledLanguage(Language::Spanish))
        ));
    }

    #[test]
    fn realisation_produces_the_surface_form() {
        let realised = InflectedWordElement::from_word(lexicalised(Language::French))
            .realise_syntax()
            .unwrap()
            .expect("lexicalised word realises");
        assert_eq!(realised.text(), "fish");
    }

    #[test]
    fn unrealisable_words_degrade_to_nothing() {
        // No lexicon on the base word.
        let detached = InflectedWordElement::from_word(Rc::new(fish()));
        assert!(detached.realise_syntax().unwrap().is_none());

        // No base word at all.
        let empty = InflectedWordElement::new(None, None);
        assert!(empty.realise_syntax().unwrap().is_none());

        // Elided.
        let mut elided = InflectedWordElement::from_word(lexicalised(Language::English));
        elided.set_elided(true);
        assert!(elided.realise_syntax().unwrap().is_none());
    }
}
