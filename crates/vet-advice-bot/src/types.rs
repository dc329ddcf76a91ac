//! Wire types of the bot service API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use vet_advice_core::models::{Language, PetSpecies, Urgency};

/// Optional context sent along with a chat question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_queries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_breed: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotChatRequest {
    pub query: String,
    pub species: PetSpecies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ChatContext>,
}

impl BotChatRequest {
    pub fn new(query: impl Into<String>, species: PetSpecies) -> Self {
        Self {
            query: query.into(),
            species,
            language: None,
            session_id: None,
            context: None,
        }
    }

    pub fn in_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotMetadata {
    /// Milliseconds spent answering
    pub processing_time: u64,
    pub ai_provider: String,
    pub reasoning: String,
    pub total_sources: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotChatResponse {
    pub conversation_id: String,
    pub session_id: String,
    pub answer: String,
    pub confidence: f64,
    pub language: Language,
    pub urgency: Urgency,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub follow_up: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    pub metadata: BotMetadata,
}

/// Translation context understood by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotTranslationContext {
    Medical,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotTranslationRequest {
    pub text: String,
    /// Omitted to let the service detect the source language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Language>,
    pub to: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BotTranslationContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotTranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub from_language: Language,
    pub to_language: Language,
    pub confidence: f64,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotFeedback {
    pub conversation_id: String,
    /// 1-5 stars
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub helpful: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotStats {
    pub total_conversations: u64,
    pub average_response_time: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotHealthStatus {
    pub status: ServiceStatus,
    pub version: String,
    /// Seconds since the service started
    pub uptime: u64,
    #[serde(default)]
    pub stats: BotStats,
}

impl BotHealthStatus {
    /// Status reported when the service cannot be reached.
    pub fn down() -> Self {
        Self {
            status: ServiceStatus::Down,
            version: "unknown".into(),
            uptime: 0,
            stats: BotStats::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct SuggestionsData {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct HistoryData {
    pub conversations: Vec<serde_json::Value>,
}
