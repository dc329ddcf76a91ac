//! Dictionary-based translation of veterinary text between lv, ru and en.
//!
//! Translation is whole-word, case-insensitive term replacement over fixed
//! dictionaries, merged with an optional context dictionary. It is not a
//! general-purpose translator: words outside the dictionaries pass through.

mod dictionary;

pub use dictionary::*;

use std::cmp::Reverse;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::LanguageDetector;
use crate::cache::{cache_key, TtlCache};
use crate::models::Language;

/// Texts longer than this (in chars) get a confidence penalty.
pub const LONG_TEXT_CHARS: usize = 500;

/// Translation errors.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to build cache key: {0}")]
    CacheKey(#[from] serde_json::Error),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Domain hint selecting an extra dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationContext {
    Medical,
    General,
    Symptoms,
    Treatments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub from: Language,
    pub to: Language,
    pub context: Option<TranslationContext>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, from: Language, to: Language) -> Self {
        Self {
            text: text.into(),
            from,
            to,
            context: None,
        }
    }

    pub fn with_context(mut self, context: TranslationContext) -> Self {
        self.context = Some(context);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub from: Language,
    pub to: Language,
    /// Heuristic quality estimate in [0.1, 1.0]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorStats {
    pub cache_size: usize,
    pub supported_languages: Vec<Language>,
    pub medical_terms_count: usize,
}

/// Terms compiled into one whole-word alternation per source language.
///
/// Alternatives are ordered longest source term first, so a phrase is
/// replaced as a unit before any shorter term inside it can match. Each
/// position is rewritten at most once.
struct RuleSet {
    rules: Vec<(Language, Regex, Vec<Term>)>,
}

impl RuleSet {
    fn compile(dictionaries: &[&'static [Term]]) -> Self {
        let terms: Vec<Term> = dictionaries.iter().flat_map(|d| d.iter().copied()).collect();
        let rules = Language::ALL
            .into_iter()
            .map(|lang| {
                let mut ordered = terms.clone();
                // Stable: equal lengths keep dictionary order
                ordered.sort_by_key(|t| Reverse(t.get(lang).chars().count()));
                let alternation = ordered
                    .iter()
                    .map(|t| format!("({})", regex::escape(t.get(lang))))
                    .collect::<Vec<_>>()
                    .join("|");
                let re = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
                    .expect("dictionary terms must compile");
                (lang, re, ordered)
            })
            .collect();
        Self { rules }
    }

    fn rule(&self, language: Language) -> Option<(&Regex, &[Term])> {
        self.rules
            .iter()
            .find(|(lang, _, _)| *lang == language)
            .map(|(_, re, terms)| (re, terms.as_slice()))
    }

    fn apply(&self, text: &str, from: Language, to: Language) -> String {
        let Some((re, terms)) = self.rule(from) else {
            return text.to_string();
        };
        re.replace_all(text, |caps: &Captures<'_>| {
            match caps.iter().skip(1).position(|m| m.is_some()) {
                Some(idx) => terms[idx].get(to).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
    }

    fn is_match(&self, text: &str, language: Language) -> bool {
        self.rule(language).is_some_and(|(re, _)| re.is_match(text))
    }
}

fn with_context(context: &'static [Term]) -> RuleSet {
    let mut dictionaries = BASE_DICTIONARIES.to_vec();
    dictionaries.push(context);
    RuleSet::compile(&dictionaries)
}

static BASE_RULES: Lazy<RuleSet> = Lazy::new(|| RuleSet::compile(BASE_DICTIONARIES));
static MEDICAL_RULES: Lazy<RuleSet> = Lazy::new(|| with_context(MEDICAL_CONTEXT));
static SYMPTOMS_RULES: Lazy<RuleSet> = Lazy::new(|| with_context(SYMPTOMS_CONTEXT));
static TREATMENTS_RULES: Lazy<RuleSet> = Lazy::new(|| with_context(TREATMENTS_CONTEXT));
static MEDICAL_TERM_RULES: Lazy<RuleSet> = Lazy::new(|| RuleSet::compile(MEDICAL_DICTIONARIES));

/// Base dictionaries merged with the context dictionary, if any.
fn rules_for(context: Option<TranslationContext>) -> &'static RuleSet {
    match context {
        Some(TranslationContext::Medical) => &*MEDICAL_RULES,
        Some(TranslationContext::Symptoms) => &*SYMPTOMS_RULES,
        Some(TranslationContext::Treatments) => &*TREATMENTS_RULES,
        Some(TranslationContext::General) | None => &*BASE_RULES,
    }
}

/// Heuristic confidence for a non-identity translation.
pub fn translation_confidence(
    text: &str,
    from: Language,
    context: Option<TranslationContext>,
) -> f64 {
    let mut confidence: f64 = 0.7;
    if MEDICAL_TERM_RULES.is_match(text, from) {
        confidence += 0.2;
    }
    if context.is_some() {
        confidence += 0.1;
    }
    if text.chars().count() > LONG_TEXT_CHARS {
        confidence -= 0.1;
    }
    confidence.clamp(0.1, 1.0)
}

/// Caching dictionary translator.
pub struct Translator {
    cache: TtlCache<Translation>,
    detector: LanguageDetector,
}

impl Translator {
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            cache: TtlCache::new(cache_ttl),
            detector: LanguageDetector::new(),
        }
    }

    /// Translate one request, serving repeated requests from the cache.
    pub fn translate(&mut self, request: &TranslationRequest) -> TranslationResult<Translation> {
        let key = cache_key(request)?;
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(from = %request.from, to = %request.to, "translation cache hit");
            return Ok(cached);
        }

        let translation = if request.from == request.to {
            Translation {
                original_text: request.text.clone(),
                translated_text: request.text.clone(),
                from: request.from,
                to: request.to,
                confidence: 1.0,
            }
        } else {
            let text = rules_for(request.context).apply(&request.text, request.from, request.to);
            Translation {
                original_text: request.text.clone(),
                translated_text: text,
                from: request.from,
                to: request.to,
                confidence: translation_confidence(&request.text, request.from, request.context),
            }
        };

        self.cache.insert(key, translation.clone());
        Ok(translation)
    }

    /// Translate several requests in order.
    pub fn translate_batch(
        &mut self,
        requests: &[TranslationRequest],
    ) -> TranslationResult<Vec<Translation>> {
        requests.iter().map(|r| self.translate(r)).collect()
    }

    /// Detect the source language, then translate into `to`.
    pub fn auto_translate(
        &mut self,
        text: &str,
        to: Language,
        context: Option<TranslationContext>,
    ) -> TranslationResult<Translation> {
        let from = self.detector.detect(text);
        self.translate(&TranslationRequest {
            text: text.to_string(),
            from,
            to,
            context,
        })
    }

    pub fn stats(&self) -> TranslatorStats {
        TranslatorStats {
            cache_size: self.cache.len(),
            supported_languages: Language::ALL.to_vec(),
            medical_terms_count: medical_terms_count(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_language_is_identity() {
        let mut translator = Translator::default();
        let result = translator
            .translate(&TranslationRequest::new("Suns klepo", Language::Lv, Language::Lv))
            .unwrap();
        assert_eq!(result.translated_text, "Suns klepo");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_dictionary_replacement() {
        let mut translator = Translator::default();
        let result = translator
            .translate(&TranslationRequest::new(
                "My dog has Vomiting and diarrhea",
                Language::En,
                Language::Lv,
            ))
            .unwrap();
        assert_eq!(result.translated_text, "My dog has vemšana and caureja");
        assert!((result.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_whole_word_only() {
        let mut translator = Translator::default();
        // "rest" inside "interesting" and "ear" inside "year" stay untouched
        let result = translator
            .translate(&TranslationRequest::new(
                "an interesting year",
                Language::En,
                Language::Ru,
            ))
            .unwrap();
        assert_eq!(result.translated_text, "an interesting year");
        assert!((result.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_russian_to_english() {
        let mut translator = Translator::default();
        let result = translator
            .translate(&TranslationRequest::new("рвота и диарея", Language::Ru, Language::En))
            .unwrap();
        assert_eq!(result.translated_text, "vomiting и diarrhea");
    }

    #[test]
    fn test_context_dictionary_and_confidence() {
        let mut translator = Translator::default();
        let request = TranslationRequest::new("give twice daily with food", Language::En, Language::Lv)
            .with_context(TranslationContext::Treatments);
        let result = translator.translate(&request).unwrap();

        assert_eq!(result.translated_text, "give 2 reizes dienā ar ēdienu");
        // No medical dictionary terms, but a context
        assert!((result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_phrases_win_over_contained_words() {
        let mut translator = Translator::default();
        let result = translator
            .translate(&TranslationRequest::new(
                "pain management for heart failure",
                Language::En,
                Language::Lv,
            ))
            .unwrap();
        assert_eq!(result.translated_text, "sāpju pārvaldība for sirds mazspēja");

        let request = TranslationRequest::new("give on empty stomach", Language::En, Language::Lv)
            .with_context(TranslationContext::Treatments);
        let result = translator.translate(&request).unwrap();
        assert_eq!(result.translated_text, "give tukšā dūšā");

        // Without the context the anatomy term still applies
        let result = translator
            .translate(&TranslationRequest::new("on empty stomach", Language::En, Language::Ru))
            .unwrap();
        assert_eq!(result.translated_text, "on empty желудок");
    }

    #[test]
    fn test_every_rule_set_compiles_and_matches_its_terms() {
        let sets: [&RuleSet; 5] = [
            &*BASE_RULES,
            &*MEDICAL_RULES,
            &*SYMPTOMS_RULES,
            &*TREATMENTS_RULES,
            &*MEDICAL_TERM_RULES,
        ];
        for set in sets {
            assert_eq!(set.rules.len(), Language::ALL.len());
            for (lang, re, terms) in &set.rules {
                for term in terms {
                    let source = term.get(*lang);
                    assert!(re.is_match(source), "{lang} term {source:?} does not match");
                    assert_eq!(set.apply(source, *lang, *lang), source);
                }
            }
        }
    }

    #[test]
    fn test_long_text_penalty() {
        let text = "a".repeat(LONG_TEXT_CHARS + 1);
        let c = translation_confidence(&text, Language::En, None);
        assert!((c - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_cache_and_clear() {
        let mut translator = Translator::default();
        let request = TranslationRequest::new("fever", Language::En, Language::Ru);
        translator.translate(&request).unwrap();
        translator.translate(&request).unwrap();
        assert_eq!(translator.stats().cache_size, 1);

        translator.clear_cache();
        assert_eq!(translator.stats().cache_size, 0);
    }

    #[test]
    fn test_batch_and_auto() {
        let mut translator = Translator::default();
        let results = translator
            .translate_batch(&[
                TranslationRequest::new("fever", Language::En, Language::Lv),
                TranslationRequest::new("pain", Language::En, Language::Ru),
            ])
            .unwrap();
        assert_eq!(results[0].translated_text, "drudzis");
        assert_eq!(results[1].translated_text, "боль");

        let auto = translator.auto_translate("кашель", Language::En, None).unwrap();
        assert_eq!(auto.from, Language::Ru);
        assert_eq!(auto.translated_text, "coughing");
    }

    #[test]
    fn test_stats() {
        let stats = Translator::default().stats();
        assert_eq!(stats.medical_terms_count, 48);
        assert_eq!(stats.supported_languages.len(), 3);
    }
}
