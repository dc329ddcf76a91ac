//! Query history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Feedback, Language, PetSpecies};

/// One question asked by a pet owner together with the answer given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserQuery {
    pub id: String,
    pub query: String,
    pub language: Language,
    pub species: PetSpecies,
    pub timestamp: DateTime<Utc>,
    /// Rendered response text
    pub response: String,
    /// Knowledge records that contributed to the response
    pub matched_knowledge: Vec<String>,
    pub feedback: Option<Feedback>,
}

impl UserQuery {
    /// Create a new query record with a fresh id.
    pub fn new(query: String, language: Language, species: PetSpecies, response: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query,
            language,
            species,
            timestamp: Utc::now(),
            response,
            matched_knowledge: Vec::new(),
            feedback: None,
        }
    }

    /// Key used for the common-query counter.
    pub fn normalized_text(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query() {
        let q = UserQuery::new("  My Dog  ".into(), Language::En, PetSpecies::Dog, "ok".into());
        assert_eq!(q.id.len(), 36);
        assert_eq!(q.normalized_text(), "my dog");
        assert!(q.feedback.is_none());
    }
}
