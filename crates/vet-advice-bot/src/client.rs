//! High-level bot client with session handling and offline fallbacks.

use chrono::Utc;
use vet_advice_core::models::{Language, PetSpecies, Urgency};

use crate::envelope::{parse_ack, parse_envelope, parse_json};
use crate::error::{BotError, BotResult};
use crate::transport::BotTransport;
use crate::types::{
    BotChatRequest, BotChatResponse, BotFeedback, BotHealthStatus, BotMetadata,
    BotTranslationRequest, BotTranslationResponse, HistoryData, SuggestionsData,
};

/// Default page size for [`BotClient::history`].
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Provider name reported in fallback answers.
pub const FALLBACK_PROVIDER: &str = "Fallback System";

/// Client for the remote bot API.
///
/// Remembers the session id the service hands back so follow-up questions
/// land in the same conversation.
pub struct BotClient<T: BotTransport> {
    transport: T,
    session_id: Option<String>,
}

#[cfg(feature = "http")]
impl BotClient<crate::transport::HttpTransport> {
    /// Client over HTTP for the given configuration.
    pub fn http(config: &crate::config::BotConfig) -> Self {
        Self::new(crate::transport::HttpTransport::new(config))
    }
}

impl<T: BotTransport> BotClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            session_id: None,
        }
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Ask the bot a question. Never fails: any error yields a fallback answer.
    pub fn chat(&mut self, request: &BotChatRequest) -> BotChatResponse {
        match self.try_chat(request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, species = %request.species, "bot chat failed, using fallback");
                self.fallback_response(request)
            }
        }
    }

    /// Ask the bot a question and surface any failure.
    pub fn try_chat(&mut self, request: &BotChatRequest) -> BotResult<BotChatResponse> {
        let mut payload = request.clone();
        payload.session_id = Some(
            request
                .session_id
                .clone()
                .or_else(|| self.session_id.clone())
                .unwrap_or_else(generate_session_id),
        );

        let body = self.transport.post("/chat/ask", &serde_json::to_value(&payload)?)?;
        let response: BotChatResponse = parse_envelope(&body)?;

        self.session_id = Some(response.session_id.clone());
        Ok(response)
    }

    fn fallback_response(&self, request: &BotChatRequest) -> BotChatResponse {
        BotChatResponse {
            conversation_id: format!("fallback-{}", Utc::now().timestamp_millis()),
            session_id: self
                .session_id
                .clone()
                .unwrap_or_else(generate_session_id),
            answer: format!(
                "I apologize, but the AI bot service is currently unavailable. For your {}'s \
                 health concern, please consult with a qualified veterinarian who can provide \
                 proper diagnosis and treatment. Your pet's health is important, and \
                 professional veterinary care is always the best option.",
                request.species.as_str().replace('_', " ")
            ),
            confidence: 0.0,
            language: request.language.unwrap_or(Language::En),
            urgency: Urgency::Medium,
            recommendations: vec![
                "Consult a veterinarian if this is urgent".into(),
                "Monitor your pet closely".into(),
                "Ensure your pet is comfortable".into(),
            ],
            follow_up: vec![
                "Is this an emergency?".into(),
                "How long have you noticed these symptoms?".into(),
            ],
            sources: Vec::new(),
            metadata: BotMetadata {
                processing_time: 0,
                ai_provider: FALLBACK_PROVIDER.into(),
                reasoning: "Bot service unavailable".into(),
                total_sources: 0,
            },
        }
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate through the service. Failures are reported, not hidden.
    pub fn translate(&self, request: &BotTranslationRequest) -> BotResult<BotTranslationResponse> {
        let result = serde_json::to_value(request)
            .map_err(BotError::from)
            .and_then(|payload| self.transport.post("/chat/translate", &payload))
            .and_then(|body| parse_envelope::<BotTranslationResponse>(&body));

        result.map_err(|e| {
            tracing::warn!(error = %e, "bot translation failed");
            BotError::TranslationUnavailable(e.to_string())
        })
    }

    // =========================================================================
    // Suggestions, feedback, history
    // =========================================================================

    /// Suggested starter questions for a species.
    pub fn suggestions(&self, species: PetSpecies, language: Language) -> Vec<String> {
        let result = self
            .transport
            .get(
                &format!("/chat/suggestions/{}", species.as_str()),
                &[("language", language.code().to_string())],
            )
            .and_then(|body| parse_envelope::<SuggestionsData>(&body));

        match result {
            Ok(data) => data.suggestions,
            Err(e) => {
                tracing::warn!(error = %e, species = %species, "suggestions unavailable, using fallback");
                fallback_suggestions(species)
            }
        }
    }

    /// Send feedback on a conversation. Returns whether the service accepted it.
    pub fn submit_feedback(&self, feedback: &BotFeedback) -> bool {
        let result = serde_json::to_value(feedback)
            .map_err(BotError::from)
            .and_then(|payload| self.transport.post("/chat/feedback", &payload))
            .and_then(|body| parse_ack(&body));

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, conversation = %feedback.conversation_id, "feedback not delivered");
                false
            }
        }
    }

    /// Recent conversations of the current session, newest as the service orders them.
    pub fn history(&self, limit: u32) -> Vec<serde_json::Value> {
        let Some(session_id) = &self.session_id else {
            return Vec::new();
        };

        let result = self
            .transport
            .get(
                &format!("/chat/history/{}", session_id),
                &[("limit", limit.to_string())],
            )
            .and_then(|body| parse_envelope::<HistoryData>(&body));

        match result {
            Ok(data) => data.conversations,
            Err(e) => {
                tracing::warn!(error = %e, "history unavailable");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Service info
    // =========================================================================

    /// Service health; a `down` status when the service cannot be reached.
    pub fn check_health(&self) -> BotHealthStatus {
        let result = self
            .transport
            .get("/health", &[])
            .and_then(|body| parse_json::<BotHealthStatus>(&body));

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bot health check failed");
            BotHealthStatus::down()
        })
    }

    /// Medicines known to the service, as returned on the wire.
    pub fn medicines(
        &self,
        query: Option<&str>,
        species: Option<PetSpecies>,
    ) -> Vec<serde_json::Value> {
        let mut params = Vec::new();
        if let Some(query) = query {
            params.push(("query", query.to_string()));
        }
        if let Some(species) = species {
            params.push(("species", species.as_str().to_string()));
        }

        let result = self
            .transport
            .get("/medicines", &params)
            .and_then(|body| parse_envelope::<Vec<serde_json::Value>>(&body));

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "medicine list unavailable");
            Vec::new()
        })
    }

    /// Service analytics, if available.
    pub fn analytics(&self) -> Option<serde_json::Value> {
        let result = self
            .transport
            .get("/analytics/stats", &[])
            .and_then(|body| parse_envelope::<serde_json::Value>(&body));

        match result {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!(error = %e, "analytics unavailable");
                None
            }
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.session_id = Some(session_id.into());
    }

    pub fn clear_session(&mut self) {
        self.session_id = None;
    }

    /// Point the client at another service root.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.transport.set_base_url(base_url);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// A fresh session id (`session-<uuid>`).
pub fn generate_session_id() -> String {
    format!("session-{}", uuid::Uuid::new_v4())
}

/// Canned starter questions per species.
pub fn fallback_suggestions(species: PetSpecies) -> Vec<String> {
    let suggestions: [&str; 3] = match species {
        PetSpecies::Dog => [
            "My dog is not eating",
            "My dog is vomiting",
            "My dog has diarrhea",
        ],
        PetSpecies::Cat => [
            "My cat is hiding",
            "My cat is not using litter box",
            "My cat is coughing",
        ],
        PetSpecies::Bird => [
            "My bird is not singing",
            "My bird is plucking feathers",
            "My bird looks sick",
        ],
        PetSpecies::Rabbit => [
            "My rabbit is not eating",
            "My rabbit has soft stool",
            "My rabbit is lethargic",
        ],
        PetSpecies::Hamster => [
            "My hamster is not active",
            "My hamster has wet tail",
            "My hamster is losing weight",
        ],
        PetSpecies::GuineaPig => [
            "My guinea pig is wheezing",
            "My guinea pig has scurvy",
            "My guinea pig is not eating",
        ],
        PetSpecies::Fish => [
            "My fish is floating",
            "My fish has white spots",
            "My fish is not swimming",
        ],
        PetSpecies::Reptile => [
            "My reptile is not eating",
            "My reptile has shed problems",
            "My reptile is lethargic",
        ],
    };
    suggestions.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format() {
        let id = generate_session_id();
        assert!(id.starts_with("session-"));
        assert_ne!(id, generate_session_id());
    }

    #[test]
    fn test_fallback_suggestions_cover_all_species() {
        for species in PetSpecies::ALL {
            assert_eq!(fallback_suggestions(species).len(), 3, "{}", species);
        }
        assert_eq!(
            fallback_suggestions(PetSpecies::GuineaPig)[0],
            "My guinea pig is wheezing"
        );
    }
}
