//! Symptom vocabulary and analysis results.

use serde::{Deserialize, Serialize};

use super::Urgency;

/// Fixed symptom vocabulary shared by all languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomTag {
    HairLoss,
    AppetiteLoss,
    Vomiting,
    Diarrhea,
    Lethargy,
    Coughing,
    Pain,
    Fever,
    Itching,
    Breathing,
    Urination,
    Eyes,
    Ears,
    Teeth,
    Limping,
}

impl SymptomTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomTag::HairLoss => "hair_loss",
            SymptomTag::AppetiteLoss => "appetite_loss",
            SymptomTag::Vomiting => "vomiting",
            SymptomTag::Diarrhea => "diarrhea",
            SymptomTag::Lethargy => "lethargy",
            SymptomTag::Coughing => "coughing",
            SymptomTag::Pain => "pain",
            SymptomTag::Fever => "fever",
            SymptomTag::Itching => "itching",
            SymptomTag::Breathing => "breathing",
            SymptomTag::Urination => "urination",
            SymptomTag::Eyes => "eyes",
            SymptomTag::Ears => "ears",
            SymptomTag::Teeth => "teeth",
            SymptomTag::Limping => "limping",
        }
    }
}

/// Coarse body-system category used to pick a treatment playbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Skin,
    Digestive,
    Respiratory,
    Urinary,
    Behavioral,
    General,
}

impl SymptomCategory {
    /// Resolution order when symptoms span several categories: the first
    /// category whose trigger set intersects the symptoms wins. `General`
    /// has no triggers and is the fallback.
    pub const PRECEDENCE: [SymptomCategory; 6] = [
        SymptomCategory::Skin,
        SymptomCategory::Digestive,
        SymptomCategory::Respiratory,
        SymptomCategory::Urinary,
        SymptomCategory::Behavioral,
        SymptomCategory::General,
    ];

    /// Symptoms that select this category.
    pub fn triggers(&self) -> &'static [SymptomTag] {
        match self {
            SymptomCategory::Skin => &[SymptomTag::HairLoss, SymptomTag::Itching],
            SymptomCategory::Digestive => &[
                SymptomTag::Vomiting,
                SymptomTag::Diarrhea,
                SymptomTag::AppetiteLoss,
            ],
            SymptomCategory::Respiratory => &[SymptomTag::Coughing, SymptomTag::Breathing],
            SymptomCategory::Urinary => &[SymptomTag::Urination],
            SymptomCategory::Behavioral => &[SymptomTag::Lethargy],
            SymptomCategory::General => &[],
        }
    }

    /// Whether any of the given symptoms triggers this category.
    pub fn matches(&self, symptoms: &[SymptomTag]) -> bool {
        symptoms.iter().any(|s| self.triggers().contains(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::Skin => "skin",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Urinary => "urinary",
            SymptomCategory::Behavioral => "behavioral",
            SymptomCategory::General => "general",
        }
    }
}

/// Result of analyzing a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomAnalysis {
    /// Extracted symptom tags, in vocabulary order
    pub symptoms: Vec<SymptomTag>,
    /// Severity derived from the raw tags
    pub urgency: Urgency,
    /// Treatment category resolved through `SymptomCategory::PRECEDENCE`
    pub category: SymptomCategory,
}

impl SymptomAnalysis {
    /// True when no symptom keyword was recognised.
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}
