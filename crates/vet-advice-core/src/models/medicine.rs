//! Medicine catalog models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PetSpecies;

/// Catalog grouping used by the lookup tool filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicineCategory {
    Antibiotics,
    Painkillers,
    Antiparasitic,
    Vitamins,
    Supplements,
    Digestive,
    SkinCare,
    Food,
}

impl MedicineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicineCategory::Antibiotics => "antibiotics",
            MedicineCategory::Painkillers => "painkillers",
            MedicineCategory::Antiparasitic => "antiparasitic",
            MedicineCategory::Vitamins => "vitamins",
            MedicineCategory::Supplements => "supplements",
            MedicineCategory::Digestive => "digestive",
            MedicineCategory::SkinCare => "skin_care",
            MedicineCategory::Food => "food",
        }
    }

    /// Parse a wire name; `"all"` and unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "antibiotics" => Some(MedicineCategory::Antibiotics),
            "painkillers" => Some(MedicineCategory::Painkillers),
            "antiparasitic" => Some(MedicineCategory::Antiparasitic),
            "vitamins" => Some(MedicineCategory::Vitamins),
            "supplements" => Some(MedicineCategory::Supplements),
            "digestive" => Some(MedicineCategory::Digestive),
            "skin_care" => Some(MedicineCategory::SkinCare),
            "food" => Some(MedicineCategory::Food),
            _ => None,
        }
    }
}

/// A read-only medicine or pet food entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub category: MedicineCategory,
    pub description: String,
    pub usage: String,
    /// Dosage instructions per species
    pub dosage: BTreeMap<PetSpecies, String>,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub ingredients: Vec<String>,
    pub for_species: Vec<PetSpecies>,
    pub prescription_required: bool,
}

impl Medicine {
    /// Check if this medicine is labelled for a species.
    pub fn is_for(&self, species: PetSpecies) -> bool {
        self.for_species.contains(&species)
    }

    /// Dosage text for a species, if the catalog has one.
    pub fn dosage_for(&self, species: PetSpecies) -> Option<&str> {
        self.dosage.get(&species).map(String::as_str)
    }

    /// Case-insensitive substring match over name, description, usage and ingredients.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn mentions(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.usage.to_lowercase().contains(needle_lower)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(needle_lower))
    }
}

/// Optional filters for catalog search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineFilter {
    pub species: Option<PetSpecies>,
    pub category: Option<MedicineCategory>,
}

/// Catalog summary counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub prescription: usize,
    pub over_the_counter: usize,
    pub per_category: BTreeMap<MedicineCategory, usize>,
    pub per_species: BTreeMap<PetSpecies, usize>,
}

/// A fuzzy name-lookup hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineMatch {
    pub id: String,
    pub name: String,
    /// Similarity score (0.0 - 1.0)
    pub score: f64,
}
