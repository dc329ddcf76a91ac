//! Locale, species and severity enums shared across the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported chat locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Latvian - the default locale
    #[default]
    Lv,
    /// Russian
    Ru,
    /// English
    En,
}

impl Language {
    /// All supported languages, in detector scoring order.
    pub const ALL: [Language; 3] = [Language::Lv, Language::Ru, Language::En];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Lv => "lv",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Parse an ISO code (case-insensitive).
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "lv" => Some(Language::Lv),
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pet species known to the knowledge base and medicine catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetSpecies {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    GuineaPig,
    Fish,
    Reptile,
}

impl PetSpecies {
    pub const ALL: [PetSpecies; 8] = [
        PetSpecies::Dog,
        PetSpecies::Cat,
        PetSpecies::Bird,
        PetSpecies::Rabbit,
        PetSpecies::Hamster,
        PetSpecies::GuineaPig,
        PetSpecies::Fish,
        PetSpecies::Reptile,
    ];

    /// Wire name (e.g. "guinea_pig").
    pub fn as_str(&self) -> &'static str {
        match self {
            PetSpecies::Dog => "dog",
            PetSpecies::Cat => "cat",
            PetSpecies::Bird => "bird",
            PetSpecies::Rabbit => "rabbit",
            PetSpecies::Hamster => "hamster",
            PetSpecies::GuineaPig => "guinea_pig",
            PetSpecies::Fish => "fish",
            PetSpecies::Reptile => "reptile",
        }
    }

    /// Parse a wire name (case-insensitive, accepts "guinea pig").
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
        PetSpecies::ALL
            .into_iter()
            .find(|s| s.as_str() == normalized)
    }
}

impl fmt::Display for PetSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly the owner should seek veterinary care.
///
/// Variants are declared from least to most severe, so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Emergency => "emergency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Urgency::Low),
            "medium" => Some(Urgency::Medium),
            "high" => Some(Urgency::High),
            "emergency" => Some(Urgency::Emergency),
            _ => None,
        }
    }
}

/// Owner feedback on a piece of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Helpful => "helpful",
            Feedback::NotHelpful => "not_helpful",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "helpful" => Some(Feedback::Helpful),
            "not_helpful" | "not helpful" => Some(Feedback::NotHelpful),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("LV"), Some(Language::Lv));
        assert_eq!(Language::parse(" ru "), Some(Language::Ru));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::default(), Language::Lv);
    }

    #[test]
    fn test_species_wire_names() {
        assert_eq!(PetSpecies::parse("guinea pig"), Some(PetSpecies::GuineaPig));
        assert_eq!(PetSpecies::parse("Guinea_Pig"), Some(PetSpecies::GuineaPig));
        assert_eq!(PetSpecies::parse("horse"), None);

        let json = serde_json::to_string(&PetSpecies::GuineaPig).unwrap();
        assert_eq!(json, "\"guinea_pig\"");
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(Urgency::Emergency > Urgency::High);
        assert!(Urgency::High > Urgency::Medium);
        assert!(Urgency::Medium > Urgency::Low);
    }

    #[test]
    fn test_feedback_parse() {
        assert_eq!(Feedback::parse("helpful"), Some(Feedback::Helpful));
        assert_eq!(Feedback::parse("not_helpful"), Some(Feedback::NotHelpful));
        assert_eq!(Feedback::parse("meh"), None);
    }
}
