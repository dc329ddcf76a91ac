//! Advice pipeline.
//!
//! Pipeline: Language Detection → Symptom Analysis → Knowledge Search →
//! Treatment Recommendation → Response Assembly → Query History

mod response;
mod templates;
mod treatment;

pub use response::*;
pub use templates::*;
pub use treatment::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::SymptomAnalyzer;
use crate::config::AdvisorConfig;
use crate::db::{Database, DbError};
use crate::knowledge::{DynStore, KnowledgeBase, KnowledgeError, KnowledgeStore, MemoryStore};
use crate::medicines::{CatalogError, MedicineCatalog};
use crate::models::{
    Feedback, KnowledgeRecord, Language, Medicine, PetSpecies, SymptomAnalysis,
    TreatmentRecommendation, UserQuery,
};
use crate::translate::{TranslationError, Translator};

/// Advisor errors.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Medicine catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Query text is empty")]
    EmptyQuery,

    #[error("Query not found: {0}")]
    QueryNotFound(String),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// One question from a pet owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
    pub species: PetSpecies,
    /// Response language; detected from the query when absent
    pub language: Option<Language>,
}

impl AdviceRequest {
    pub fn new(query: impl Into<String>, species: PetSpecies) -> Self {
        Self {
            query: query.into(),
            species,
            language: None,
        }
    }

    pub fn in_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Everything produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Id of the recorded query, used for feedback
    pub query_id: String,
    pub language: Language,
    pub analysis: SymptomAnalysis,
    pub recommendation: TreatmentRecommendation,
    /// Matching knowledge records, highest confidence first
    pub matched_knowledge: Vec<KnowledgeRecord>,
    /// Suggested medicines found in the catalog
    pub medicines: Vec<Medicine>,
    /// Rendered response text
    pub text: String,
}

/// Confidence change applied to one knowledge record by feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceUpdate {
    pub knowledge_id: String,
    pub confidence: f64,
}

/// The veterinary advice engine.
pub struct VetAdvisor<S: KnowledgeStore> {
    analyzer: SymptomAnalyzer,
    knowledge: KnowledgeBase<S>,
    catalog: MedicineCatalog,
    builder: TreatmentBuilder,
    composer: ResponseComposer,
    translator: Translator,
    config: AdvisorConfig,
}

impl VetAdvisor<DynStore> {
    /// Open an advisor on the store named by the config: SQLite when a
    /// database path is set, process memory otherwise.
    pub fn from_config(config: AdvisorConfig) -> AdvisorResult<Self> {
        let store: DynStore = match &config.db_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "opening advice database");
                Box::new(Database::open(path)?)
            }
            None => Box::new(MemoryStore::new()),
        };
        Self::new(store, config)
    }
}

impl<S: KnowledgeStore> VetAdvisor<S> {
    /// Create an advisor over a store, seeding it if empty.
    pub fn new(store: S, config: AdvisorConfig) -> AdvisorResult<Self> {
        Ok(Self {
            analyzer: SymptomAnalyzer::new(),
            knowledge: KnowledgeBase::open(store)?,
            catalog: MedicineCatalog::bundled()?,
            builder: TreatmentBuilder::new(),
            composer: ResponseComposer::new(),
            translator: Translator::new(config.cache_ttl),
            config,
        })
    }

    /// Language of `text`, falling back to the configured default when
    /// no pattern matches at all.
    pub fn detect_language(&self, text: &str) -> Language {
        let scores = self.analyzer.detector().scores(text);
        if scores.total() == 0 {
            self.config.default_language
        } else {
            scores.winner()
        }
    }

    /// Answer one request and record it in the query history.
    pub fn advise(&mut self, request: &AdviceRequest) -> AdvisorResult<AdviceResponse> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(AdvisorError::EmptyQuery);
        }

        let language = request
            .language
            .unwrap_or_else(|| self.detect_language(query));
        let analysis = self.analyzer.analyze(query, language);
        let matched_knowledge = self.knowledge.search(query, Some(request.species))?;
        let recommendation = self
            .builder
            .build(query, request.species, &analysis, language);

        let medicines: Vec<Medicine> = recommendation
            .suggested_medicine_ids
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect();

        let text = self.composer.compose(
            language,
            request.species,
            &recommendation,
            &matched_knowledge,
            &medicines,
        );

        let mut user_query = UserQuery::new(
            request.query.clone(),
            language,
            request.species,
            text.clone(),
        );
        user_query.matched_knowledge = matched_knowledge.iter().map(|r| r.id.clone()).collect();
        self.knowledge.learn_from_query(&user_query)?;

        tracing::debug!(
            query_id = %user_query.id,
            language = %language,
            species = %request.species,
            matches = matched_knowledge.len(),
            urgency = recommendation.urgency.as_str(),
            "advice generated"
        );

        Ok(AdviceResponse {
            query_id: user_query.id,
            language,
            analysis,
            recommendation,
            matched_knowledge,
            medicines,
            text,
        })
    }

    /// Record feedback on an answered query and nudge the confidence of
    /// every knowledge record that contributed to it.
    pub fn submit_feedback(
        &mut self,
        query_id: &str,
        feedback: Feedback,
    ) -> AdvisorResult<Vec<ConfidenceUpdate>> {
        let query = self
            .knowledge
            .set_query_feedback(query_id, feedback)?
            .ok_or_else(|| AdvisorError::QueryNotFound(query_id.to_string()))?;

        let mut updates = Vec::with_capacity(query.matched_knowledge.len());
        for knowledge_id in &query.matched_knowledge {
            // Records are never deleted, but skip quietly if one is missing
            if let Some(confidence) = self.knowledge.update_confidence(knowledge_id, feedback)? {
                updates.push(ConfidenceUpdate {
                    knowledge_id: knowledge_id.clone(),
                    confidence,
                });
            }
        }
        Ok(updates)
    }

    pub fn analyzer(&self) -> &SymptomAnalyzer {
        &self.analyzer
    }

    pub fn knowledge(&self) -> &KnowledgeBase<S> {
        &self.knowledge
    }

    pub fn knowledge_mut(&mut self) -> &mut KnowledgeBase<S> {
        &mut self.knowledge
    }

    pub fn catalog(&self) -> &MedicineCatalog {
        &self.catalog
    }

    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    /// Replace the treatment builder (e.g. with custom category handlers).
    pub fn set_builder(&mut self, builder: TreatmentBuilder) {
        self.builder = builder;
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SymptomCategory, SymptomTag, Urgency};

    fn advisor() -> VetAdvisor<MemoryStore> {
        VetAdvisor::new(MemoryStore::new(), AdvisorConfig::default()).unwrap()
    }

    #[test]
    fn test_advise_detects_language_and_analyzes() {
        let mut advisor = advisor();
        let response = advisor
            .advise(&AdviceRequest::new("My dog is vomiting", PetSpecies::Dog))
            .unwrap();

        assert_eq!(response.language, Language::En);
        assert_eq!(response.analysis.symptoms, vec![SymptomTag::Vomiting]);
        assert_eq!(response.analysis.category, SymptomCategory::Digestive);
        assert_eq!(response.recommendation.urgency, Urgency::Emergency);
        assert_eq!(response.matched_knowledge[0].id, "digestive-issues");

        let ids: Vec<&str> = response.medicines.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["omeprazole", "probiotics-paste"]);
        assert!(response.text.contains("KNOWLEDGE BASE MATCHES"));
    }

    #[test]
    fn test_advise_records_query() {
        let mut advisor = advisor();
        let response = advisor
            .advise(&AdviceRequest::new("Mans kaķis klepo", PetSpecies::Cat))
            .unwrap();

        let stored = advisor.knowledge().query(&response.query_id).unwrap().unwrap();
        assert_eq!(stored.language, Language::Lv);
        assert_eq!(stored.response, response.text);
        assert_eq!(advisor.knowledge().insights().unwrap().total_queries, 1);
    }

    #[test]
    fn test_missing_catalog_ids_are_skipped() {
        let mut advisor = advisor();
        let response = advisor
            .advise(
                &AdviceRequest::new("my parrot is coughing", PetSpecies::Bird)
                    .in_language(Language::En),
            )
            .unwrap();

        assert_eq!(response.recommendation.suggested_medicine_ids, vec!["vitamin-a"]);
        assert!(response.medicines.is_empty());
    }

    #[test]
    fn test_explicit_language_wins() {
        let mut advisor = advisor();
        let response = advisor
            .advise(&AdviceRequest::new("vomiting", PetSpecies::Dog).in_language(Language::Ru))
            .unwrap();
        assert_eq!(response.language, Language::Ru);
        assert!(response.text.contains("**ОЦЕНКА**"));
    }

    #[test]
    fn test_default_language_when_no_evidence() {
        let config = AdvisorConfig {
            default_language: Language::En,
            ..AdvisorConfig::default()
        };
        let advisor = VetAdvisor::new(MemoryStore::new(), config).unwrap();
        assert_eq!(advisor.detect_language("12345"), Language::En);
        assert_eq!(advisor.detect_language("Моя кошка"), Language::Ru);
    }

    #[test]
    fn test_empty_query_rejected() {
        let mut advisor = advisor();
        assert!(matches!(
            advisor.advise(&AdviceRequest::new("   ", PetSpecies::Dog)),
            Err(AdvisorError::EmptyQuery)
        ));
    }

    #[test]
    fn test_feedback_nudges_matched_records() {
        let mut advisor = advisor();
        let response = advisor
            .advise(&AdviceRequest::new("cat has diarrhea", PetSpecies::Cat))
            .unwrap();
        assert_eq!(response.matched_knowledge.len(), 1);

        let updates = advisor
            .submit_feedback(&response.query_id, Feedback::NotHelpful)
            .unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].knowledge_id, "digestive-issues");
        assert!((updates[0].confidence - 0.75).abs() < 1e-9);

        assert!(matches!(
            advisor.submit_feedback("missing", Feedback::Helpful),
            Err(AdvisorError::QueryNotFound(_))
        ));
    }

    #[test]
    fn test_from_config_with_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = AdvisorConfig {
            db_path: Some(dir.path().join("advice.db")),
            ..AdvisorConfig::default()
        };

        let query_id = {
            let mut advisor = VetAdvisor::from_config(config.clone()).unwrap();
            advisor
                .advise(&AdviceRequest::new("dog is vomiting", PetSpecies::Dog))
                .unwrap()
                .query_id
        };

        // History and feedback survive a restart
        let mut advisor = VetAdvisor::from_config(config).unwrap();
        let updates = advisor.submit_feedback(&query_id, Feedback::Helpful).unwrap();
        assert!((updates[0].confidence - 0.95).abs() < 1e-9);
    }
}
