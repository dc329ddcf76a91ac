//! Knowledge base: symptom/condition lookup with feedback-driven confidence.
//!
//! The base is generic over a [`KnowledgeStore`] so the same logic runs on
//! process memory or on SQLite. An empty store is seeded with the curated
//! records from [`seed_records`] when the base is opened.

mod seed;
mod store;

pub use seed::*;
pub use store::*;

use chrono::Utc;
use thiserror::Error;

use crate::medicines::MedicineCatalog;
use crate::models::{
    Feedback, KnowledgeRecord, LearningInsights, Medicine, NewKnowledge, PetSpecies, UserQuery,
};

/// Number of common queries reported by [`KnowledgeBase::insights`].
pub const TOP_QUERIES_LIMIT: usize = 10;

/// Knowledge base errors.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),

    #[error("Invalid knowledge record: {0}")]
    InvalidRecord(String),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Knowledge base over a storage backend.
pub struct KnowledgeBase<S: KnowledgeStore> {
    store: S,
}

impl<S: KnowledgeStore> KnowledgeBase<S> {
    /// Open the knowledge base, seeding the store if it has no records.
    pub fn open(mut store: S) -> KnowledgeResult<Self> {
        if store.record_count()? == 0 {
            let seeds = seed_records();
            tracing::debug!(count = seeds.len(), "seeding knowledge store");
            for record in &seeds {
                store.put_record(record)?;
            }
        }
        Ok(Self { store })
    }

    /// Records matching the query (and species, when given), highest confidence first.
    ///
    /// A record matches when any symptom or condition contains the query or is
    /// contained in it, case-insensitively. Equal confidences keep insertion order.
    pub fn search(
        &self,
        query: &str,
        species: Option<PetSpecies>,
    ) -> KnowledgeResult<Vec<KnowledgeRecord>> {
        let query_lower = query.to_lowercase();
        let mut matches: Vec<KnowledgeRecord> = self
            .store
            .records()?
            .into_iter()
            .filter(|r| species.map_or(true, |s| r.applies_to(s)))
            .filter(|r| r.matches_query(&query_lower))
            .collect();

        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Ok(matches)
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> KnowledgeResult<Option<KnowledgeRecord>> {
        self.store.get_record(id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> KnowledgeResult<Vec<KnowledgeRecord>> {
        self.store.records()
    }

    /// Nudge a record's confidence by one feedback step.
    ///
    /// Returns the new confidence, or `None` if no record has this id.
    pub fn update_confidence(
        &mut self,
        id: &str,
        feedback: Feedback,
    ) -> KnowledgeResult<Option<f64>> {
        let Some(record) = self.store.get_record(id)? else {
            return Ok(None);
        };

        let next = record.nudged_confidence(feedback == Feedback::Helpful);
        tracing::debug!(
            id,
            feedback = feedback.as_str(),
            from = record.confidence,
            to = next,
            "updating knowledge confidence"
        );
        if !self.store.set_confidence(id, next, Utc::now())? {
            return Ok(None);
        }
        Ok(Some(next))
    }

    /// Add a learned record. It gets a fresh `learned-` id and the current time.
    pub fn add_knowledge(&mut self, knowledge: NewKnowledge) -> KnowledgeResult<KnowledgeRecord> {
        if knowledge.species.is_empty() {
            return Err(KnowledgeError::InvalidRecord(
                "record must apply to at least one species".into(),
            ));
        }
        if knowledge.symptoms.is_empty() && knowledge.conditions.is_empty() {
            return Err(KnowledgeError::InvalidRecord(
                "record needs at least one symptom or condition".into(),
            ));
        }
        if !knowledge.confidence.is_finite() {
            return Err(KnowledgeError::InvalidRecord(format!(
                "confidence must be a finite number, got {}",
                knowledge.confidence
            )));
        }

        let record = knowledge.into_record();
        self.store.put_record(&record)?;
        tracing::debug!(id = %record.id, "added learned knowledge");
        Ok(record)
    }

    /// Append a query to the history and count its normalized text.
    pub fn learn_from_query(&mut self, query: &UserQuery) -> KnowledgeResult<()> {
        self.store.insert_query(query)?;
        let count = self.store.bump_common_query(&query.normalized_text())?;
        tracing::debug!(query_id = %query.id, count, "learned from query");
        Ok(())
    }

    /// Attach feedback to a recorded query. Returns the updated query, or `None` if unknown.
    pub fn set_query_feedback(
        &mut self,
        query_id: &str,
        feedback: Feedback,
    ) -> KnowledgeResult<Option<UserQuery>> {
        if !self.store.set_query_feedback(query_id, feedback)? {
            return Ok(None);
        }
        self.store.get_query(query_id)
    }

    /// Get a recorded query by id.
    pub fn query(&self, query_id: &str) -> KnowledgeResult<Option<UserQuery>> {
        self.store.get_query(query_id)
    }

    /// Aggregate statistics over the knowledge base and query history.
    pub fn insights(&self) -> KnowledgeResult<LearningInsights> {
        let records = self.store.records()?;
        let average_confidence = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.confidence).sum::<f64>() / records.len() as f64
        };

        Ok(LearningInsights {
            total_queries: self.store.query_count()?,
            most_common_queries: self.store.top_common_queries(TOP_QUERIES_LIMIT)?,
            knowledge_base_size: records.len(),
            average_confidence,
        })
    }

    /// Catalog medicines referenced by records whose conditions mention `condition`
    /// and that are labelled for `species`.
    ///
    /// A referenced id resolves to the catalog entry with the same id, or to
    /// entries whose id extends it (`probiotics` → `probiotics-paste`).
    /// References with no catalog entry are skipped.
    pub fn effective_medicines(
        &self,
        condition: &str,
        species: PetSpecies,
        catalog: &MedicineCatalog,
    ) -> KnowledgeResult<Vec<Medicine>> {
        let condition_lower = condition.to_lowercase();
        let referenced: Vec<String> = self
            .store
            .records()?
            .into_iter()
            .filter(|r| r.applies_to(species))
            .filter(|r| {
                r.conditions
                    .iter()
                    .any(|c| c.to_lowercase().contains(&condition_lower))
            })
            .flat_map(|r| r.medicine_ids)
            .collect();

        Ok(catalog
            .all()
            .iter()
            .filter(|m| m.is_for(species))
            .filter(|m| referenced.iter().any(|id| references_medicine(id, &m.id)))
            .cloned()
            .collect())
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the base and return the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn references_medicine(reference: &str, medicine_id: &str) -> bool {
    medicine_id == reference
        || medicine_id
            .strip_prefix(reference)
            .is_some_and(|rest| rest.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, Urgency};

    fn open_memory() -> KnowledgeBase<MemoryStore> {
        KnowledgeBase::open(MemoryStore::new()).unwrap()
    }

    fn new_knowledge(confidence: f64) -> NewKnowledge {
        NewKnowledge {
            symptoms: vec!["sneezing".into()],
            conditions: vec!["feline herpesvirus".into()],
            treatments: vec!["supportive care".into()],
            medicine_ids: vec!["lysine".into()],
            species: vec![PetSpecies::Cat],
            urgency: Urgency::Low,
            confidence,
            sources: vec!["owner-report".into()],
        }
    }

    #[test]
    fn test_open_seeds_once() {
        let kb = open_memory();
        assert_eq!(kb.records().unwrap().len(), 5);

        // Re-opening a populated store does not duplicate seeds
        let kb = KnowledgeBase::open(kb.into_store()).unwrap();
        assert_eq!(kb.records().unwrap().len(), 5);
    }

    #[test]
    fn test_search_by_symptom_and_species() {
        let kb = open_memory();

        let results = kb.search("my dog is vomiting", Some(PetSpecies::Dog)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "digestive-issues");

        // Digestive record does not apply to birds
        assert!(kb.search("vomiting", Some(PetSpecies::Bird)).unwrap().is_empty());
    }

    #[test]
    fn test_search_sorted_by_confidence() {
        let kb = open_memory();
        // "infection" is contained in conditions of three records
        let results = kb.search("infection", None).unwrap();
        assert!(results.len() >= 3);
        for pair in results.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        assert_eq!(results[0].id, "skin-issues-dogs");
    }

    #[test]
    fn test_search_is_case_insensitive_and_multilingual() {
        let kb = open_memory();
        let results = kb.search("RASH", Some(PetSpecies::Cat)).unwrap();
        assert_eq!(results[0].id, "skin-issues-dogs");

        let results = kb.search("Зуд", Some(PetSpecies::Cat)).unwrap();
        assert_eq!(results[0].id, "skin-issues-dogs");
    }

    #[test]
    fn test_update_confidence_clamps_and_reorders() {
        let mut kb = open_memory();

        assert_eq!(
            kb.update_confidence("respiratory-emergency", Feedback::Helpful).unwrap(),
            Some(1.0)
        );

        let mut last = 0.0;
        for _ in 0..20 {
            last = kb
                .update_confidence("bird-respiratory", Feedback::NotHelpful)
                .unwrap()
                .unwrap();
        }
        assert!((last - 0.1).abs() < 1e-9);

        assert_eq!(kb.update_confidence("missing", Feedback::Helpful).unwrap(), None);
    }

    #[test]
    fn test_add_knowledge_is_searchable() {
        let mut kb = open_memory();
        let record = kb.add_knowledge(new_knowledge(0.6)).unwrap();
        assert!(record.id.starts_with("learned-"));

        let results = kb.search("sneezing", Some(PetSpecies::Cat)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, record.id);
    }

    #[test]
    fn test_add_knowledge_rejects_invalid() {
        let mut kb = open_memory();

        let mut no_species = new_knowledge(0.5);
        no_species.species.clear();
        assert!(matches!(
            kb.add_knowledge(no_species),
            Err(KnowledgeError::InvalidRecord(_))
        ));

        let mut no_terms = new_knowledge(0.5);
        no_terms.symptoms.clear();
        no_terms.conditions.clear();
        assert!(kb.add_knowledge(no_terms).is_err());
    }

    #[test]
    fn test_add_knowledge_rejects_non_finite_confidence() {
        let mut memory = open_memory();
        let mut sqlite = KnowledgeBase::open(crate::db::Database::open_in_memory().unwrap()).unwrap();

        for confidence in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                memory.add_knowledge(new_knowledge(confidence)),
                Err(KnowledgeError::InvalidRecord(_))
            ));
            assert!(matches!(
                sqlite.add_knowledge(new_knowledge(confidence)),
                Err(KnowledgeError::InvalidRecord(_))
            ));
        }

        // Nothing was stored, so searches and insights stay well-formed
        for kb_records in [memory.records().unwrap(), sqlite.records().unwrap()] {
            assert_eq!(kb_records.len(), 5);
        }
        assert!(memory.search("sneezing", None).unwrap().is_empty());
        assert!(memory.insights().unwrap().average_confidence.is_finite());
        assert!(sqlite.insights().unwrap().average_confidence.is_finite());
    }

    #[test]
    fn test_update_confidence_on_database() {
        let mut kb = KnowledgeBase::open(crate::db::Database::open_in_memory().unwrap()).unwrap();

        let next = kb
            .update_confidence("digestive-issues", Feedback::NotHelpful)
            .unwrap()
            .unwrap();
        assert!((next - 0.75).abs() < 1e-9);

        let stored = kb.get("digestive-issues").unwrap().unwrap();
        assert!((stored.confidence - 0.75).abs() < 1e-9);
        assert_eq!(kb.update_confidence("missing", Feedback::Helpful).unwrap(), None);
    }

    #[test]
    fn test_learning_insights() {
        let mut kb = open_memory();
        for text in ["Dog vomiting", "dog vomiting ", "cat itching"] {
            let query = UserQuery::new(text.into(), Language::En, PetSpecies::Dog, "r".into());
            kb.learn_from_query(&query).unwrap();
        }

        let insights = kb.insights().unwrap();
        assert_eq!(insights.total_queries, 3);
        assert_eq!(insights.knowledge_base_size, 5);
        assert_eq!(insights.most_common_queries[0], ("dog vomiting".to_string(), 2));
        let expected = (0.9 + 0.85 + 1.0 + 0.9 + 0.8) / 5.0;
        assert!((insights.average_confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_query_feedback() {
        let mut kb = open_memory();
        let query = UserQuery::new("q".into(), Language::Lv, PetSpecies::Cat, "r".into());
        kb.learn_from_query(&query).unwrap();

        let updated = kb.set_query_feedback(&query.id, Feedback::Helpful).unwrap().unwrap();
        assert_eq!(updated.feedback, Some(Feedback::Helpful));
        assert!(kb.set_query_feedback("missing", Feedback::Helpful).unwrap().is_none());
    }

    #[test]
    fn test_effective_medicines() {
        let kb = open_memory();
        let catalog = MedicineCatalog::bundled().unwrap();

        let medicines = kb
            .effective_medicines("gastro", PetSpecies::Dog, &catalog)
            .unwrap();
        let ids: Vec<&str> = medicines.iter().map(|m| m.id.as_str()).collect();
        assert!(ids.contains(&"omeprazole"));
        assert!(ids.contains(&"probiotics-paste"));

        // Omeprazole is not labelled for rabbits
        let medicines = kb
            .effective_medicines("gastroenteritis", PetSpecies::Rabbit, &catalog)
            .unwrap();
        assert!(medicines.iter().all(|m| m.is_for(PetSpecies::Rabbit)));
        assert!(!medicines.iter().any(|m| m.id == "omeprazole"));
    }

    #[test]
    fn test_effective_medicines_resolves_prefix_ids() {
        let kb = open_memory();
        let catalog = MedicineCatalog::bundled().unwrap();

        // bird-respiratory references "probiotics" and "vitamin-a"; neither is a
        // catalog id and no bird-labelled entry extends them
        let medicines = kb
            .effective_medicines("aspergillosis", PetSpecies::Bird, &catalog)
            .unwrap();
        assert!(medicines.is_empty());

        assert!(references_medicine("probiotics", "probiotics-paste"));
        assert!(!references_medicine("probiotics", "probioticsx"));
        assert!(references_medicine("omeprazole", "omeprazole"));
    }

    #[test]
    fn test_database_store_persists_confidence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.db");

        {
            let db = crate::db::Database::open(&path).unwrap();
            let mut kb = KnowledgeBase::open(db).unwrap();
            kb.update_confidence("bird-respiratory", Feedback::Helpful).unwrap();
        }

        let db = crate::db::Database::open(&path).unwrap();
        let kb = KnowledgeBase::open(db).unwrap();
        assert_eq!(kb.records().unwrap().len(), 5);
        let record = kb.get("bird-respiratory").unwrap().unwrap();
        assert!((record.confidence - 0.9).abs() < 1e-9);
    }
}
