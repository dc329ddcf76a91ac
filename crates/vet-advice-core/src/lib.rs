//! Vet-Advice Core Library
//!
//! Multilingual (Latvian / Russian / English) rule-based veterinary advice
//! engine with a persistent, feedback-driven knowledge base.
//!
//! # Architecture
//!
//! ```text
//! Query → Language Detection → Symptom Extraction → Urgency + Category
//!                                                        │
//!                             ┌──────────────────────────┼──────────────────────┐
//!                             │                          │                      │
//!                             ▼                          ▼                      ▼
//!                      Knowledge Search        Treatment Builder        Medicine Catalog
//!                   (confidence-ranked)      (category handlers)       (suggested ids)
//!                             │                          │                      │
//!                             └──────────────────────────┼──────────────────────┘
//!                                                        ▼
//!                                               Response Assembly
//!                                                        │
//!                                                        ▼
//!                                          Query History ← Feedback
//! ```
//!
//! # Core Principle
//!
//! **Advice never replaces a vet.** Every response carries a disclaimer and
//! an urgency-driven "when to see a vet" line.
//!
//! # Modules
//!
//! - [`analyzer`]: Language detector and symptom extractor
//! - [`knowledge`]: Knowledge base over a pluggable store
//! - [`db`]: SQLite store for knowledge and query history
//! - [`medicines`]: Bundled medicine catalog with fuzzy lookup
//! - [`advice`]: Treatment builder, response composer, advisor pipeline
//! - [`translate`]: Dictionary translator with TTL cache
//! - [`config`]: Environment configuration

pub mod advice;
pub mod analyzer;
pub mod cache;
pub mod config;
pub mod db;
pub mod knowledge;
pub mod medicines;
pub mod models;
pub mod translate;

// Re-export commonly used types
pub use advice::{AdviceRequest, AdviceResponse, AdvisorError, VetAdvisor};
pub use analyzer::{LanguageDetector, SymptomAnalyzer, SymptomExtractor};
pub use config::AdvisorConfig;
pub use db::Database;
pub use knowledge::{KnowledgeBase, KnowledgeStore, MemoryStore};
pub use medicines::MedicineCatalog;
pub use models::{
    Feedback, KnowledgeRecord, Language, Medicine, MedicineCategory, PetSpecies, SymptomTag,
    Urgency,
};
pub use translate::Translator;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use knowledge::DynStore;
use models::{LearningInsights, MedicineFilter, SymptomAnalysis};
use translate::{Translation, TranslationRequest};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetAdviceError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<AdvisorError> for VetAdviceError {
    fn from(e: AdvisorError) -> Self {
        match e {
            AdvisorError::QueryNotFound(id) => VetAdviceError::NotFound(id),
            AdvisorError::EmptyQuery => VetAdviceError::InvalidInput(e.to_string()),
            AdvisorError::Translation(e) => VetAdviceError::TranslationError(e.to_string()),
            other => VetAdviceError::DatabaseError(other.to_string()),
        }
    }
}

impl From<knowledge::KnowledgeError> for VetAdviceError {
    fn from(e: knowledge::KnowledgeError) -> Self {
        match e {
            knowledge::KnowledgeError::InvalidRecord(msg) => VetAdviceError::InvalidInput(msg),
            other => VetAdviceError::DatabaseError(other.to_string()),
        }
    }
}

impl From<db::DbError> for VetAdviceError {
    fn from(e: db::DbError) -> Self {
        VetAdviceError::DatabaseError(e.to_string())
    }
}

impl From<translate::TranslationError> for VetAdviceError {
    fn from(e: translate::TranslationError) -> Self {
        VetAdviceError::TranslationError(e.to_string())
    }
}

impl From<config::ConfigError> for VetAdviceError {
    fn from(e: config::ConfigError) -> Self {
        VetAdviceError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetAdviceError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetAdviceError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

fn parse_language(code: &str) -> Result<Language, VetAdviceError> {
    Language::parse(code)
        .ok_or_else(|| VetAdviceError::InvalidInput(format!("Unknown language: {}", code)))
}

fn parse_species(name: &str) -> Result<PetSpecies, VetAdviceError> {
    PetSpecies::parse(name)
        .ok_or_else(|| VetAdviceError::InvalidInput(format!("Unknown species: {}", name)))
}

fn parse_feedback(value: &str) -> Result<Feedback, VetAdviceError> {
    Feedback::parse(value)
        .ok_or_else(|| VetAdviceError::InvalidInput(format!("Unknown feedback: {}", value)))
}

/// `None`, blank and `"all"` mean no category filter.
fn parse_category(value: Option<String>) -> Result<Option<MedicineCategory>, VetAdviceError> {
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(v) => MedicineCategory::parse(v)
            .map(Some)
            .ok_or_else(|| VetAdviceError::InvalidInput(format!("Unknown category: {}", v))),
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

fn wrap(config: AdvisorConfig) -> Result<Arc<VetAdviceCore>, VetAdviceError> {
    let advisor = VetAdvisor::from_config(config)?;
    Ok(Arc::new(VetAdviceCore {
        advisor: Arc::new(Mutex::new(advisor)),
    }))
}

/// Open or create an advisor backed by a database at the given path.
#[uniffi::export]
pub fn open_advisor(path: String) -> Result<Arc<VetAdviceCore>, VetAdviceError> {
    wrap(AdvisorConfig {
        db_path: Some(path.into()),
        ..AdvisorConfig::default()
    })
}

/// Create an advisor that keeps everything in memory.
#[uniffi::export]
pub fn open_advisor_in_memory() -> Result<Arc<VetAdviceCore>, VetAdviceError> {
    wrap(AdvisorConfig::default())
}

/// Create an advisor configured from `VET_ADVICE_*` environment variables.
#[uniffi::export]
pub fn open_advisor_from_env() -> Result<Arc<VetAdviceCore>, VetAdviceError> {
    wrap(AdvisorConfig::from_env()?)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe advisor wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetAdviceCore {
    advisor: Arc<Mutex<VetAdvisor<DynStore>>>,
}

#[uniffi::export]
impl VetAdviceCore {
    // =========================================================================
    // Analysis
    // =========================================================================

    /// Detect the language of a text ("lv", "ru" or "en").
    pub fn detect_language(&self, text: String) -> Result<String, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        Ok(advisor.detect_language(&text).code().to_string())
    }

    /// Extract symptoms, urgency and category from a text.
    pub fn analyze(
        &self,
        text: String,
        language: Option<String>,
    ) -> Result<FfiSymptomAnalysis, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        let language = match language {
            Some(code) => parse_language(&code)?,
            None => advisor.detect_language(&text),
        };
        Ok(advisor.analyzer().analyze(&text, language).into())
    }

    // =========================================================================
    // Advice
    // =========================================================================

    /// Answer a pet owner's question.
    pub fn advise(
        &self,
        query: String,
        species: String,
        language: Option<String>,
    ) -> Result<FfiAdvice, VetAdviceError> {
        let mut advisor = self.advisor.lock()?;
        let request = AdviceRequest {
            query,
            species: parse_species(&species)?,
            language: language.as_deref().map(parse_language).transpose()?,
        };
        Ok(advisor.advise(&request)?.into())
    }

    /// Record "helpful" / "not_helpful" feedback on an answered query.
    pub fn submit_feedback(
        &self,
        query_id: String,
        feedback: String,
    ) -> Result<Vec<FfiConfidenceUpdate>, VetAdviceError> {
        let mut advisor = self.advisor.lock()?;
        let updates = advisor.submit_feedback(&query_id, parse_feedback(&feedback)?)?;
        Ok(updates
            .into_iter()
            .map(|u| FfiConfidenceUpdate {
                knowledge_id: u.knowledge_id,
                confidence: u.confidence,
            })
            .collect())
    }

    // =========================================================================
    // Knowledge Base
    // =========================================================================

    /// Search the knowledge base, highest confidence first.
    pub fn search_knowledge(
        &self,
        query: String,
        species: Option<String>,
    ) -> Result<Vec<FfiKnowledgeRecord>, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        let species = species.as_deref().map(parse_species).transpose()?;
        let records = advisor.knowledge().search(&query, species)?;
        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// Aggregate query and knowledge statistics.
    pub fn learning_insights(&self) -> Result<FfiLearningInsights, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        Ok(advisor.knowledge().insights()?.into())
    }

    // =========================================================================
    // Medicines
    // =========================================================================

    /// Search the medicine catalog.
    pub fn search_medicines(
        &self,
        query: String,
        species: Option<String>,
        category: Option<String>,
    ) -> Result<Vec<FfiMedicine>, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        let filter = MedicineFilter {
            species: species.as_deref().map(parse_species).transpose()?,
            category: parse_category(category)?,
        };
        Ok(advisor
            .catalog()
            .search(&query, &filter)
            .into_iter()
            .map(|m| m.clone().into())
            .collect())
    }

    /// Get a medicine by id.
    pub fn get_medicine(&self, id: String) -> Result<Option<FfiMedicine>, VetAdviceError> {
        let advisor = self.advisor.lock()?;
        Ok(advisor.catalog().get(&id).map(|m| m.clone().into()))
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate veterinary text between "lv", "ru" and "en".
    pub fn translate(
        &self,
        text: String,
        from: String,
        to: String,
    ) -> Result<FfiTranslation, VetAdviceError> {
        let mut advisor = self.advisor.lock()?;
        let request = TranslationRequest::new(text, parse_language(&from)?, parse_language(&to)?);
        Ok(advisor.translator_mut().translate(&request)?.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe symptom analysis.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSymptomAnalysis {
    pub symptoms: Vec<String>,
    pub urgency: String,
    pub category: String,
}

impl From<SymptomAnalysis> for FfiSymptomAnalysis {
    fn from(analysis: SymptomAnalysis) -> Self {
        Self {
            symptoms: analysis
                .symptoms
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            urgency: analysis.urgency.as_str().to_string(),
            category: analysis.category.as_str().to_string(),
        }
    }
}

/// FFI-safe knowledge record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiKnowledgeRecord {
    pub id: String,
    pub symptoms: Vec<String>,
    pub conditions: Vec<String>,
    pub treatments: Vec<String>,
    pub medicine_ids: Vec<String>,
    pub species: Vec<String>,
    pub urgency: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub last_updated: String,
}

impl From<KnowledgeRecord> for FfiKnowledgeRecord {
    fn from(record: KnowledgeRecord) -> Self {
        Self {
            id: record.id,
            symptoms: record.symptoms,
            conditions: record.conditions,
            treatments: record.treatments,
            medicine_ids: record.medicine_ids,
            species: record.species.iter().map(|s| s.as_str().to_string()).collect(),
            urgency: record.urgency.as_str().to_string(),
            confidence: record.confidence,
            sources: record.sources,
            last_updated: record.last_updated.to_rfc3339(),
        }
    }
}

/// FFI-safe medicine. Dosage is flattened to "species: instructions" lines.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub usage: String,
    pub dosage: Vec<String>,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub ingredients: Vec<String>,
    pub for_species: Vec<String>,
    pub prescription_required: bool,
}

impl From<Medicine> for FfiMedicine {
    fn from(medicine: Medicine) -> Self {
        Self {
            id: medicine.id,
            name: medicine.name,
            category: medicine.category.as_str().to_string(),
            description: medicine.description,
            usage: medicine.usage,
            dosage: medicine
                .dosage
                .iter()
                .map(|(species, text)| format!("{}: {}", species, text))
                .collect(),
            side_effects: medicine.side_effects,
            contraindications: medicine.contraindications,
            ingredients: medicine.ingredients,
            for_species: medicine
                .for_species
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            prescription_required: medicine.prescription_required,
        }
    }
}

/// FFI-safe advice response.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdvice {
    pub query_id: String,
    pub language: String,
    pub analysis: FfiSymptomAnalysis,
    pub assessment: String,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub dietary_advice: Vec<String>,
    pub when_to_see_vet: String,
    pub urgency: String,
    pub matched_knowledge: Vec<FfiKnowledgeRecord>,
    pub medicines: Vec<FfiMedicine>,
    pub text: String,
}

impl From<AdviceResponse> for FfiAdvice {
    fn from(response: AdviceResponse) -> Self {
        let rec = response.recommendation;
        Self {
            query_id: response.query_id,
            language: response.language.code().to_string(),
            analysis: response.analysis.into(),
            assessment: rec.assessment,
            possible_causes: rec.possible_causes,
            recommendations: rec.recommendations,
            dietary_advice: rec.dietary_advice,
            when_to_see_vet: rec.when_to_see_vet,
            urgency: rec.urgency.as_str().to_string(),
            matched_knowledge: response
                .matched_knowledge
                .into_iter()
                .map(|r| r.into())
                .collect(),
            medicines: response.medicines.into_iter().map(|m| m.into()).collect(),
            text: response.text,
        }
    }
}

/// FFI-safe confidence change.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfidenceUpdate {
    pub knowledge_id: String,
    pub confidence: f64,
}

/// FFI-safe common query entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQueryCount {
    pub query: String,
    pub count: u32,
}

/// FFI-safe learning insights.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLearningInsights {
    pub total_queries: u64,
    pub most_common_queries: Vec<FfiQueryCount>,
    pub knowledge_base_size: u64,
    pub average_confidence: f64,
}

impl From<LearningInsights> for FfiLearningInsights {
    fn from(insights: LearningInsights) -> Self {
        Self {
            total_queries: insights.total_queries as u64,
            most_common_queries: insights
                .most_common_queries
                .into_iter()
                .map(|(query, count)| FfiQueryCount { query, count })
                .collect(),
            knowledge_base_size: insights.knowledge_base_size as u64,
            average_confidence: insights.average_confidence,
        }
    }
}

/// FFI-safe translation result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTranslation {
    pub original_text: String,
    pub translated_text: String,
    pub from_language: String,
    pub to_language: String,
    pub confidence: f64,
}

impl From<Translation> for FfiTranslation {
    fn from(t: Translation) -> Self {
        Self {
            original_text: t.original_text,
            translated_text: t.translated_text,
            from_language: t.from.code().to_string(),
            to_language: t.to.code().to_string(),
            confidence: t.confidence,
        }
    }
}
