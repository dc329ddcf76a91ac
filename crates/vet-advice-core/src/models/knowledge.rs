//! Knowledge base records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PetSpecies, Urgency};

/// Lowest confidence a record can be nudged down to.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Highest confidence a record can be nudged up to.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Confidence change applied per feedback event.
pub const FEEDBACK_STEP: f64 = 0.1;

/// A knowledge base entry linking symptoms to conditions and treatments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeRecord {
    /// Stable identifier (seed ids are human readable, learned ones are `learned-<uuid>`)
    pub id: String,
    /// Symptom phrases in any supported language
    pub symptoms: Vec<String>,
    /// Condition names
    pub conditions: Vec<String>,
    /// Treatment descriptions
    pub treatments: Vec<String>,
    /// Medicine catalog ids
    pub medicine_ids: Vec<String>,
    /// Species this record applies to
    pub species: Vec<PetSpecies>,
    pub urgency: Urgency,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Provenance labels
    pub sources: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl KnowledgeRecord {
    /// Whether this record applies to the given species.
    pub fn applies_to(&self, species: PetSpecies) -> bool {
        self.species.contains(&species)
    }

    /// Bidirectional, case-insensitive substring test against symptoms and conditions.
    ///
    /// `query_lower` must already be lowercase.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        let hit = |term: &String| {
            let term_lower = term.to_lowercase();
            query_lower.contains(&term_lower) || term_lower.contains(query_lower)
        };
        self.symptoms.iter().any(hit) || self.conditions.iter().any(hit)
    }

    /// Confidence after applying one feedback step, clamped to the allowed range.
    pub fn nudged_confidence(&self, helpful: bool) -> f64 {
        let next = if helpful {
            self.confidence + FEEDBACK_STEP
        } else {
            self.confidence - FEEDBACK_STEP
        };
        next.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}

/// Input for adding learned knowledge; id and timestamp are assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewKnowledge {
    pub symptoms: Vec<String>,
    pub conditions: Vec<String>,
    pub treatments: Vec<String>,
    pub medicine_ids: Vec<String>,
    pub species: Vec<PetSpecies>,
    pub urgency: Urgency,
    pub confidence: f64,
    pub sources: Vec<String>,
}

impl NewKnowledge {
    /// Materialize into a record with a fresh `learned-` id.
    pub fn into_record(self) -> KnowledgeRecord {
        KnowledgeRecord {
            id: format!("learned-{}", uuid::Uuid::new_v4()),
            symptoms: self.symptoms,
            conditions: self.conditions,
            treatments: self.treatments,
            medicine_ids: self.medicine_ids,
            species: self.species,
            urgency: self.urgency,
            confidence: self.confidence.clamp(0.0, MAX_CONFIDENCE),
            sources: self.sources,
            last_updated: Utc::now(),
        }
    }
}

/// Aggregate statistics over the knowledge base and query history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningInsights {
    pub total_queries: usize,
    /// Most frequent normalized queries with their counts, highest first (max 10)
    pub most_common_queries: Vec<(String, u32)>,
    pub knowledge_base_size: usize,
    /// Mean confidence; 0.0 for an empty knowledge base
    pub average_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(confidence: f64) -> KnowledgeRecord {
        KnowledgeRecord {
            id: "test".into(),
            symptoms: vec!["Vomiting".into(), "caureja".into()],
            conditions: vec!["gastroenteritis".into()],
            treatments: vec![],
            medicine_ids: vec![],
            species: vec![PetSpecies::Dog],
            urgency: Urgency::Medium,
            confidence,
            sources: vec![],
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_matches_query_both_directions() {
        let r = record(0.5);
        // query contains symptom
        assert!(r.matches_query("my dog is vomiting a lot"));
        // symptom contains query
        assert!(r.matches_query("gastro"));
        assert!(!r.matches_query("limping"));
    }

    #[test]
    fn test_nudged_confidence_clamps() {
        assert!((record(0.95).nudged_confidence(true) - 1.0).abs() < 1e-12);
        assert!((record(0.15).nudged_confidence(false) - 0.1).abs() < 1e-12);
        assert!((record(0.5).nudged_confidence(true) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_new_knowledge_gets_learned_id() {
        let new = NewKnowledge {
            symptoms: vec!["sneezing".into()],
            conditions: vec!["cold".into()],
            treatments: vec![],
            medicine_ids: vec![],
            species: vec![PetSpecies::Cat],
            urgency: Urgency::Low,
            confidence: 0.6,
            sources: vec!["user".into()],
        };
        let rec = new.into_record();
        assert!(rec.id.starts_with("learned-"));
        assert!(rec.applies_to(PetSpecies::Cat));
        assert!(!rec.applies_to(PetSpecies::Dog));
    }
}
