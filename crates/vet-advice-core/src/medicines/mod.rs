//! Read-only medicine and pet food catalog.
//!
//! The catalog ships inside the library as `data/medicines.json` and is
//! parsed once at construction.

mod lookup;

pub use lookup::*;

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::models::{CatalogStats, Medicine, MedicineCategory, MedicineFilter, PetSpecies};

/// Catalog document bundled with the library.
const BUNDLED_CATALOG: &str = include_str!("../../data/medicines.json");

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate medicine id: {0}")]
    DuplicateId(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// In-memory medicine catalog with an id index.
#[derive(Debug, Clone)]
pub struct MedicineCatalog {
    medicines: Vec<Medicine>,
    by_id: HashMap<String, usize>,
}

impl MedicineCatalog {
    /// Load the catalog bundled with the library.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from a JSON array of medicines.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let medicines: Vec<Medicine> = serde_json::from_str(json)?;
        Self::from_medicines(medicines)
    }

    /// Build a catalog from medicines; ids must be unique.
    pub fn from_medicines(medicines: Vec<Medicine>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(medicines.len());
        for (idx, medicine) in medicines.iter().enumerate() {
            if by_id.insert(medicine.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(medicine.id.clone()));
            }
        }
        Ok(Self { medicines, by_id })
    }

    /// All medicines in catalog order.
    pub fn all(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Get a medicine by id.
    pub fn get(&self, id: &str) -> Option<&Medicine> {
        self.by_id.get(id).map(|&idx| &self.medicines[idx])
    }

    /// Filter by species and category, then by a substring of name,
    /// description, usage or ingredients. A blank query skips the text filter.
    pub fn search(&self, query: &str, filter: &MedicineFilter) -> Vec<&Medicine> {
        let query_lower = query.trim().to_lowercase();
        self.medicines
            .iter()
            .filter(|m| filter.species.map_or(true, |s| m.is_for(s)))
            .filter(|m| filter.category.map_or(true, |c| m.category == c))
            .filter(|m| query_lower.is_empty() || m.mentions(&query_lower))
            .collect()
    }

    pub fn by_category(&self, category: MedicineCategory) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    pub fn for_species(&self, species: PetSpecies) -> Vec<&Medicine> {
        self.medicines.iter().filter(|m| m.is_for(species)).collect()
    }

    /// Prescription-only (`true`) or over-the-counter (`false`) medicines.
    pub fn by_prescription(&self, prescription_required: bool) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.prescription_required == prescription_required)
            .collect()
    }

    /// Summary counts over the whole catalog.
    pub fn stats(&self) -> CatalogStats {
        let mut per_category = BTreeMap::new();
        let mut per_species = BTreeMap::new();
        for medicine in &self.medicines {
            *per_category.entry(medicine.category).or_insert(0) += 1;
            for species in &medicine.for_species {
                *per_species.entry(*species).or_insert(0) += 1;
            }
        }

        let prescription = self
            .medicines
            .iter()
            .filter(|m| m.prescription_required)
            .count();

        CatalogStats {
            total: self.medicines.len(),
            prescription,
            over_the_counter: self.medicines.len() - prescription,
            per_category,
            per_species,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MedicineCatalog {
        MedicineCatalog::bundled().unwrap()
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = catalog();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("omeprazole").unwrap().name, "Omeprazole");
        assert!(catalog.get("vitamin-a").is_none());
    }

    #[test]
    fn test_bundled_entries_have_species() {
        for medicine in catalog().all() {
            assert!(!medicine.for_species.is_empty(), "{}", medicine.id);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = catalog();
        let mut medicines = catalog.all().to_vec();
        medicines.push(medicines[0].clone());
        assert!(matches!(
            MedicineCatalog::from_medicines(medicines),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_search_with_filters() {
        let catalog = catalog();

        let results = catalog.search(
            "šampūn",
            &MedicineFilter {
                species: Some(PetSpecies::Cat),
                category: Some(MedicineCategory::SkinCare),
            },
        );
        let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
        assert!(ids.contains(&"chlorhexidine-shampoo"));
        assert!(results.iter().all(|m| m.category == MedicineCategory::SkinCare));

        // Blank query returns the filtered set
        let birds = catalog.search(
            "  ",
            &MedicineFilter {
                species: Some(PetSpecies::Bird),
                category: None,
            },
        );
        assert_eq!(birds.len(), catalog.for_species(PetSpecies::Bird).len());
    }

    #[test]
    fn test_search_matches_ingredients_case_insensitively() {
        let catalog = catalog();
        let results = catalog.search("OMEPRAZOLE", &MedicineFilter::default());
        assert!(results.iter().any(|m| m.id == "omeprazole"));
    }

    #[test]
    fn test_stats_add_up() {
        let catalog = catalog();
        let stats = catalog.stats();

        assert_eq!(stats.total, catalog.len());
        assert_eq!(stats.prescription + stats.over_the_counter, stats.total);
        assert_eq!(stats.per_category.values().sum::<usize>(), stats.total);
        assert_eq!(
            stats.prescription,
            catalog.by_prescription(true).len()
        );
        assert_eq!(
            stats.per_category[&MedicineCategory::Food],
            catalog.by_category(MedicineCategory::Food).len()
        );
        assert_eq!(stats.per_species[&PetSpecies::Fish], 1);
    }
}
