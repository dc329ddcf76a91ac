//! Keyword-based symptom extraction, urgency and category rules.
//!
//! Matching is lowercase substring containment only: no stemming, no
//! tokenisation. Keywords are therefore written as stems ("klep" catches
//! "klepus" and "klepo") and a few carry a leading space where a bare
//! stem would fire inside unrelated words (" ear" vs "years").

use std::collections::HashMap;

use crate::models::{Language, SymptomCategory, SymptomTag, Urgency};

/// Symptoms that always make a case an emergency.
pub const EMERGENCY_SYMPTOMS: &[SymptomTag] = &[
    SymptomTag::Breathing,
    SymptomTag::Fever,
    SymptomTag::Pain,
    SymptomTag::Vomiting,
];

/// Symptoms that warrant a same-day visit.
pub const HIGH_URGENCY_SYMPTOMS: &[SymptomTag] = &[
    SymptomTag::Diarrhea,
    SymptomTag::Lethargy,
    SymptomTag::Urination,
];

/// Symptoms that warrant a visit within a couple of days.
pub const MEDIUM_URGENCY_SYMPTOMS: &[SymptomTag] = &[
    SymptomTag::AppetiteLoss,
    SymptomTag::Coughing,
    SymptomTag::Eyes,
    SymptomTag::Ears,
];

/// Severity from raw tags; the most severe matching tier wins.
pub fn assess_urgency(symptoms: &[SymptomTag]) -> Urgency {
    let any_in = |tier: &[SymptomTag]| symptoms.iter().any(|s| tier.contains(s));

    if any_in(EMERGENCY_SYMPTOMS) {
        Urgency::Emergency
    } else if any_in(HIGH_URGENCY_SYMPTOMS) {
        Urgency::High
    } else if any_in(MEDIUM_URGENCY_SYMPTOMS) {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// First category in `SymptomCategory::PRECEDENCE` triggered by the symptoms.
pub fn categorize(symptoms: &[SymptomTag]) -> SymptomCategory {
    SymptomCategory::PRECEDENCE
        .into_iter()
        .find(|c| c.matches(symptoms))
        .unwrap_or(SymptomCategory::General)
}

/// Maps free text to symptom tags using per-language keyword tables.
pub struct SymptomExtractor {
    /// Per language: ordered (tag, keywords) table
    keywords: HashMap<Language, Vec<(SymptomTag, Vec<String>)>>,
}

impl Default for SymptomExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomExtractor {
    /// Create an extractor with the default keyword tables.
    pub fn new() -> Self {
        let mut keywords = HashMap::new();
        keywords.insert(Language::Lv, build_table(LATVIAN_KEYWORDS));
        keywords.insert(Language::Ru, build_table(RUSSIAN_KEYWORDS));
        keywords.insert(Language::En, build_table(ENGLISH_KEYWORDS));
        Self { keywords }
    }

    /// Extract symptom tags from `text` using the table for `language`.
    ///
    /// Tags come out in table order, each at most once.
    pub fn extract(&self, text: &str, language: Language) -> Vec<SymptomTag> {
        let lower = text.to_lowercase();
        self.keywords
            .get(&language)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, words)| words.iter().any(|w| lower.contains(w.as_str())))
                    .map(|(tag, _)| *tag)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Add a keyword for a tag in one language.
    pub fn add_keyword(&mut self, language: Language, tag: SymptomTag, keyword: &str) {
        let table = self.keywords.entry(language).or_default();
        let keyword = keyword.to_lowercase();
        match table.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, words)) => words.push(keyword),
            None => table.push((tag, vec![keyword])),
        }
    }

    /// Keywords registered for a tag in one language.
    pub fn keywords_for(&self, language: Language, tag: SymptomTag) -> &[String] {
        self.keywords
            .get(&language)
            .and_then(|table| table.iter().find(|(t, _)| *t == tag))
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }
}

type KeywordTable = &'static [(SymptomTag, &'static [&'static str])];

fn build_table(table: KeywordTable) -> Vec<(SymptomTag, Vec<String>)> {
    table
        .iter()
        .map(|(tag, words)| (*tag, words.iter().map(|w| w.to_string()).collect()))
        .collect()
}

const LATVIAN_KEYWORDS: KeywordTable = &[
    (SymptomTag::HairLoss, &["mati", "spalva", "izkrišana", "izkrīt", "plikum"]),
    (SymptomTag::AppetiteLoss, &["neēd", "apetīt"]),
    (SymptomTag::Vomiting, &["vemšana", "vem"]),
    (SymptomTag::Diarrhea, &["caurej"]),
    (SymptomTag::Lethargy, &["kluss", "guļ", "letarģ", "nogur"]),
    (SymptomTag::Coughing, &["klep"]),
    (SymptomTag::Pain, &["sāp"]),
    (SymptomTag::Fever, &["karstum", "drudz", "temperatūr"]),
    (SymptomTag::Itching, &["niez", "kasās"]),
    (SymptomTag::Breathing, &["elpo", "elsoj"]),
    (SymptomTag::Urination, &["urīn", "čurā"]),
    (SymptomTag::Eyes, &["acis", "acīs"]),
    (SymptomTag::Ears, &["ausis", "ausīs"]),
    (SymptomTag::Teeth, &["zobi", "zobs", "zobu"]),
    (SymptomTag::Limping, &["pincis", "klibo"]),
];

const RUSSIAN_KEYWORDS: KeywordTable = &[
    (SymptomTag::HairLoss, &["шерсть", "выпада", "облыс"]),
    (SymptomTag::AppetiteLoss, &["не ест", "аппетит"]),
    (SymptomTag::Vomiting, &["рвот", "рвет", "рвёт", "тошн"]),
    (SymptomTag::Diarrhea, &["понос", "диаре"]),
    (SymptomTag::Lethargy, &["тихий", "спит", "вял"]),
    (SymptomTag::Coughing, &["кашл", "кашель"]),
    (SymptomTag::Pain, &["боль", "болит"]),
    (SymptomTag::Fever, &["температур", "жар", "лихорад"]),
    (SymptomTag::Itching, &["зуд", "чеш"]),
    (SymptomTag::Breathing, &["дыхан", "дышит"]),
    (SymptomTag::Urination, &["моч"]),
    (SymptomTag::Eyes, &["глаз"]),
    (SymptomTag::Ears, &["уши", "ухо"]),
    (SymptomTag::Teeth, &["зуб"]),
    (SymptomTag::Limping, &["хрома"]),
];

const ENGLISH_KEYWORDS: KeywordTable = &[
    (SymptomTag::HairLoss, &["hair loss", "losing hair", "shedding", "bald", "fur loss"]),
    (SymptomTag::AppetiteLoss, &["not eating", "won't eat", "appetite", "refuses food"]),
    (SymptomTag::Vomiting, &["vomit", "throwing up", "threw up", "puking"]),
    (SymptomTag::Diarrhea, &["diarrh", "loose stool", "soft stool"]),
    (SymptomTag::Lethargy, &["letharg", "sleeping a lot", "tired", "weak"]),
    (SymptomTag::Coughing, &["cough"]),
    (SymptomTag::Pain, &["pain", "hurt"]),
    (SymptomTag::Fever, &["fever", "temperature"]),
    (SymptomTag::Itching, &["itch", "scratching"]),
    (SymptomTag::Breathing, &["breath", "wheez", "panting"]),
    (SymptomTag::Urination, &["urin", "peeing"]),
    (SymptomTag::Eyes, &["eye"]),
    (SymptomTag::Ears, &[" ear"]),
    (SymptomTag::Teeth, &["teeth", "tooth", "gums"]),
    (SymptomTag::Limping, &["limp"]),
];
