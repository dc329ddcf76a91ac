//! Locale detection by regex pattern scoring.
//!
//! Each language owns a handful of patterns (script/diacritic tests and
//! keyword lists). Every pattern that matches adds one point; the unique
//! highest score wins. Zero scores and ties fall back to Latvian.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Language;

static DEFAULT_PATTERNS: Lazy<Vec<(Language, Regex)>> = Lazy::new(|| {
    let patterns: [(Language, &str); 5] = [
        // Cyrillic script
        (Language::Ru, r"(?i)[а-яё]"),
        (
            Language::Ru,
            r"(?i)\b(что|как|где|когда|почему|собака|кошка|болит|помощь|лечение|медицина)\b",
        ),
        // Latvian diacritics
        (Language::Lv, r"(?i)[āčēģīķļņšūž]"),
        (
            Language::Lv,
            r"(?i)\b(kas|kā|kur|kad|kāpēc|suns|kaķis|sāp|palīdzība|ārstēšana|medicīna)\b",
        ),
        (
            Language::En,
            r"(?i)\b(what|how|where|when|why|dog|cat|hurts|help|treatment|medicine)\b",
        ),
    ];

    patterns
        .into_iter()
        .map(|(lang, pattern)| {
            (
                lang,
                Regex::new(pattern).expect("built-in language pattern must compile"),
            )
        })
        .collect()
});

/// Per-language match counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageScores {
    pub lv: u32,
    pub ru: u32,
    pub en: u32,
}

impl LanguageScores {
    fn bump(&mut self, language: Language) {
        match language {
            Language::Lv => self.lv += 1,
            Language::Ru => self.ru += 1,
            Language::En => self.en += 1,
        }
    }

    pub fn get(&self, language: Language) -> u32 {
        match language {
            Language::Lv => self.lv,
            Language::Ru => self.ru,
            Language::En => self.en,
        }
    }

    /// Sum over all languages; zero means no evidence at all.
    pub fn total(&self) -> u32 {
        self.lv + self.ru + self.en
    }

    /// The unique top-scoring language, or Latvian on zero/tie.
    pub fn winner(&self) -> Language {
        let max = Language::ALL.iter().map(|l| self.get(*l)).max().unwrap_or(0);
        if max == 0 {
            return Language::Lv;
        }

        let mut leaders = Language::ALL.iter().filter(|l| self.get(**l) == max);
        match (leaders.next(), leaders.next()) {
            (Some(only), None) => *only,
            _ => Language::Lv,
        }
    }
}

/// Detects the locale of free text.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    patterns: Vec<(Language, Regex)>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector with the built-in patterns.
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Detect the language of `text`. Never fails.
    pub fn detect(&self, text: &str) -> Language {
        self.scores(text).winner()
    }

    /// Score every language against `text`.
    pub fn scores(&self, text: &str) -> LanguageScores {
        let mut scores = LanguageScores::default();
        for (language, pattern) in &self.patterns {
            if pattern.is_match(text) {
                scores.bump(*language);
            }
        }
        scores
    }

    /// Register an extra scoring pattern.
    pub fn add_pattern(&mut self, language: Language, pattern: &str) -> Result<(), regex::Error> {
        self.patterns.push((language, Regex::new(pattern)?));
        Ok(())
    }
}
