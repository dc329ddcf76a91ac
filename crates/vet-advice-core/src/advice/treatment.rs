//! Category-driven treatment recommendations.

use std::collections::HashMap;

use super::templates::{category_texts, digestive_diet, when_to_see_vet};
use crate::models::{
    Language, PetSpecies, SymptomAnalysis, SymptomCategory, TreatmentRecommendation,
};

/// Per-category suggestion strategy.
pub trait CategoryHandler: Send + Sync {
    /// Catalog ids to suggest for a species.
    fn medicines(&self, species: PetSpecies) -> Vec<String>;

    /// Feeding advice in the given language.
    fn dietary_advice(&self, _language: Language) -> Vec<String> {
        Vec::new()
    }
}

/// Suggests a fixed list of medicines when the species is one of `species`.
#[derive(Debug, Clone)]
pub struct SpeciesMedicines {
    pub species: &'static [PetSpecies],
    pub medicine_ids: &'static [&'static str],
}

impl CategoryHandler for SpeciesMedicines {
    fn medicines(&self, species: PetSpecies) -> Vec<String> {
        if self.species.contains(&species) {
            self.medicine_ids.iter().map(|id| id.to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

struct Skin;

impl CategoryHandler for Skin {
    fn medicines(&self, species: PetSpecies) -> Vec<String> {
        SpeciesMedicines {
            species: &[PetSpecies::Dog, PetSpecies::Cat],
            medicine_ids: &["chlorhexidine-shampoo", "hydrocortisone-cream"],
        }
        .medicines(species)
    }
}

struct Digestive;

impl CategoryHandler for Digestive {
    fn medicines(&self, species: PetSpecies) -> Vec<String> {
        SpeciesMedicines {
            species: &[PetSpecies::Dog, PetSpecies::Cat],
            medicine_ids: &["omeprazole", "probiotics-paste"],
        }
        .medicines(species)
    }

    fn dietary_advice(&self, language: Language) -> Vec<String> {
        digestive_diet(language).iter().map(|s| s.to_string()).collect()
    }
}

struct Respiratory;

impl CategoryHandler for Respiratory {
    fn medicines(&self, species: PetSpecies) -> Vec<String> {
        SpeciesMedicines {
            species: &[PetSpecies::Bird],
            medicine_ids: &["vitamin-a"],
        }
        .medicines(species)
    }
}

/// Builds a [`TreatmentRecommendation`] from an analysis.
///
/// Localized texts come from the category templates; medicine and diet
/// suggestions come from the handler registered for the category.
/// Categories without a handler suggest nothing.
pub struct TreatmentBuilder {
    handlers: HashMap<SymptomCategory, Box<dyn CategoryHandler>>,
}

impl Default for TreatmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreatmentBuilder {
    /// Builder with the default handlers (skin, digestive, respiratory).
    pub fn new() -> Self {
        let mut handlers: HashMap<SymptomCategory, Box<dyn CategoryHandler>> = HashMap::new();
        handlers.insert(SymptomCategory::Skin, Box::new(Skin));
        handlers.insert(SymptomCategory::Digestive, Box::new(Digestive));
        handlers.insert(SymptomCategory::Respiratory, Box::new(Respiratory));
        Self { handlers }
    }

    /// Builder with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register or replace the handler for a category.
    pub fn set_handler(&mut self, category: SymptomCategory, handler: Box<dyn CategoryHandler>) {
        self.handlers.insert(category, handler);
    }

    pub fn build(
        &self,
        _query: &str,
        species: PetSpecies,
        analysis: &SymptomAnalysis,
        language: Language,
    ) -> TreatmentRecommendation {
        let category = analysis.category;
        let texts = category_texts(language, category);
        let handler = self.handlers.get(&category);

        TreatmentRecommendation {
            category,
            assessment: texts.assessment.to_string(),
            possible_causes: texts.causes.iter().map(|s| s.to_string()).collect(),
            recommendations: texts.recommendations.iter().map(|s| s.to_string()).collect(),
            suggested_medicine_ids: handler.map(|h| h.medicines(species)).unwrap_or_default(),
            dietary_advice: handler
                .map(|h| h.dietary_advice(language))
                .unwrap_or_default(),
            when_to_see_vet: when_to_see_vet(language, analysis.urgency).to_string(),
            urgency: analysis.urgency,
        }
    }
}
