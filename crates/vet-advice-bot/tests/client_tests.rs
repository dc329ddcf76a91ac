//! Bot client tests against an in-process fake transport.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};
use vet_advice_bot::{
    BotChatRequest, BotClient, BotError, BotFeedback, BotResult, BotTransport,
    BotTranslationRequest, ServiceStatus, FALLBACK_PROVIDER,
};
use vet_advice_core::models::{Language, PetSpecies, Urgency};

#[derive(Clone)]
enum Reply {
    Body(String),
    Status(u16),
    Down,
}

#[derive(Debug, Clone)]
struct Call {
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

struct FakeTransport {
    routes: HashMap<String, Reply>,
    calls: RefCell<Vec<Call>>,
    base_url: String,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            routes: HashMap::new(),
            calls: RefCell::new(Vec::new()),
            base_url: "http://localhost:3001".into(),
        }
    }

    fn route(mut self, path: &str, reply: Reply) -> Self {
        self.routes.insert(path.to_string(), reply);
        self
    }

    fn json(self, path: &str, body: Value) -> Self {
        self.route(path, Reply::Body(body.to_string()))
    }

    fn respond(&self, path: &str) -> BotResult<String> {
        match self.routes.get(path) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(code)) => Err(BotError::from_status(*code, String::new())),
            Some(Reply::Down) | None => Err(BotError::Unavailable("connection refused".into())),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl BotTransport for FakeTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> BotResult<String> {
        self.calls.borrow_mut().push(Call {
            method: "GET",
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: None,
        });
        self.respond(path)
    }

    fn post(&self, path: &str, body: &Value) -> BotResult<String> {
        self.calls.borrow_mut().push(Call {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        });
        self.respond(path)
    }

    fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
    }
}

fn chat_data(session_id: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "conversationId": "conv-1",
            "sessionId": session_id,
            "answer": "Keep your dog hydrated and see a vet.",
            "confidence": 0.82,
            "language": "en",
            "urgency": "high",
            "recommendations": ["Offer water"],
            "followUp": ["Is there blood?"],
            "sources": ["merck"],
            "metadata": {
                "processingTime": 340,
                "aiProvider": "remote",
                "reasoning": "symptom match",
                "totalSources": 1
            }
        }
    })
}

#[test]
fn test_chat_generates_then_reuses_session() {
    let transport = FakeTransport::new().json("/chat/ask", chat_data("server-session"));
    let mut client = BotClient::new(transport);

    let request = BotChatRequest::new("My dog is vomiting", PetSpecies::Dog);
    let response = client.chat(&request);
    assert_eq!(response.conversation_id, "conv-1");
    assert_eq!(response.urgency, Urgency::High);
    assert_eq!(client.session_id(), Some("server-session"));

    client.chat(&request);

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/chat/ask");

    let first = calls[0].body.as_ref().unwrap();
    assert!(first["sessionId"].as_str().unwrap().starts_with("session-"));
    assert_eq!(first["species"], "dog");

    let second = calls[1].body.as_ref().unwrap();
    assert_eq!(second["sessionId"], "server-session");
}

#[test]
fn test_request_session_overrides_stored_session() {
    let transport = FakeTransport::new().json("/chat/ask", chat_data("s2"));
    let mut client = BotClient::new(transport);
    client.set_session_id("stored");

    let mut request = BotChatRequest::new("cough", PetSpecies::Cat);
    request.session_id = Some("explicit".into());
    client.chat(&request);

    let calls = client.transport().calls();
    assert_eq!(calls[0].body.as_ref().unwrap()["sessionId"], "explicit");
    assert_eq!(client.session_id(), Some("s2"));
}

#[test]
fn test_chat_fallback_when_down() {
    let mut client = BotClient::new(FakeTransport::new().route("/chat/ask", Reply::Down));
    client.set_session_id("kept");

    let request = BotChatRequest::new("wheezing", PetSpecies::GuineaPig);
    let response = client.chat(&request);

    assert!(response.conversation_id.starts_with("fallback-"));
    assert_eq!(response.session_id, "kept");
    assert!(response.answer.contains("guinea pig"));
    assert_eq!(response.confidence, 0.0);
    assert_eq!(response.language, Language::En);
    assert_eq!(response.urgency, Urgency::Medium);
    assert_eq!(response.recommendations.len(), 3);
    assert_eq!(response.follow_up.len(), 2);
    assert_eq!(response.metadata.ai_provider, FALLBACK_PROVIDER);

    // A failed chat does not replace the session
    assert_eq!(client.session_id(), Some("kept"));
}

#[test]
fn test_chat_fallback_keeps_requested_language() {
    let cases = vec![
        ("rate-limited", Reply::Status(429)),
        ("server-error", Reply::Status(503)),
        ("rejected", Reply::Body(r#"{"success":false}"#.into())),
        ("garbage", Reply::Body("<html>oops</html>".into())),
    ];

    for (id, reply) in cases {
        let mut client = BotClient::new(FakeTransport::new().route("/chat/ask", reply));
        let request = BotChatRequest::new("vemj", PetSpecies::Cat).in_language(Language::Lv);

        let response = client.chat(&request);
        assert_eq!(response.metadata.ai_provider, FALLBACK_PROVIDER, "Case {}", id);
        assert_eq!(response.language, Language::Lv, "Case {}", id);
        assert!(
            client.try_chat(&request).is_err(),
            "Case {}: try_chat should surface the error",
            id
        );
    }
}

#[test]
fn test_translate() {
    let transport = FakeTransport::new().json(
        "/chat/translate",
        json!({
            "success": true,
            "data": {
                "originalText": "fever",
                "translatedText": "drudzis",
                "fromLanguage": "en",
                "toLanguage": "lv",
                "confidence": 0.9,
                "service": "remote"
            }
        }),
    );
    let client = BotClient::new(transport);

    let request = BotTranslationRequest {
        text: "fever".into(),
        from: None,
        to: Language::Lv,
        context: None,
    };
    let response = client.translate(&request).unwrap();
    assert_eq!(response.translated_text, "drudzis");

    let sent = client.transport().calls()[0].body.clone().unwrap();
    assert_eq!(sent, json!({"text": "fever", "to": "lv"}));
}

#[test]
fn test_translate_failure_is_reported() {
    let client = BotClient::new(FakeTransport::new().route("/chat/translate", Reply::Status(500)));
    let request = BotTranslationRequest {
        text: "fever".into(),
        from: Some(Language::En),
        to: Language::Ru,
        context: None,
    };
    assert!(matches!(
        client.translate(&request),
        Err(BotError::TranslationUnavailable(_))
    ));
}

#[test]
fn test_suggestions() {
    let transport = FakeTransport::new().json(
        "/chat/suggestions/cat",
        json!({"success": true, "data": {"suggestions": ["Vai kaķis ēd?"]}}),
    );
    let client = BotClient::new(transport);

    assert_eq!(
        client.suggestions(PetSpecies::Cat, Language::Lv),
        vec!["Vai kaķis ēd?"]
    );
    let call = &client.transport().calls()[0];
    assert_eq!(call.query, vec![("language".to_string(), "lv".to_string())]);

    // Unrouted species falls back to the canned list
    let fallback = client.suggestions(PetSpecies::Hamster, Language::En);
    assert_eq!(fallback[1], "My hamster has wet tail");
}

#[test]
fn test_submit_feedback() {
    let feedback = BotFeedback {
        conversation_id: "conv-1".into(),
        rating: 5,
        feedback: None,
        helpful: true,
    };

    let ok = BotClient::new(FakeTransport::new().json("/chat/feedback", json!({"success": true})));
    assert!(ok.submit_feedback(&feedback));
    let sent = ok.transport().calls()[0].body.clone().unwrap();
    assert_eq!(sent["conversationId"], "conv-1");

    let down = BotClient::new(FakeTransport::new());
    assert!(!down.submit_feedback(&feedback));
}

#[test]
fn test_history_requires_session() {
    let transport = FakeTransport::new().json(
        "/chat/history/s1",
        json!({"success": true, "data": {"conversations": [{"id": 1}, {"id": 2}]}}),
    );
    let mut client = BotClient::new(transport);

    assert!(client.history(10).is_empty());
    assert!(client.transport().calls().is_empty());

    client.set_session_id("s1");
    assert_eq!(client.history(5).len(), 2);
    let call = &client.transport().calls()[0];
    assert_eq!(call.query, vec![("limit".to_string(), "5".to_string())]);

    client.clear_session();
    assert!(client.session_id().is_none());
    assert!(client.history(5).is_empty());
}

#[test]
fn test_check_health() {
    let healthy = BotClient::new(FakeTransport::new().json(
        "/health",
        json!({
            "status": "healthy",
            "version": "2.1.0",
            "uptime": 3600,
            "stats": {"totalConversations": 12, "averageResponseTime": 410.5, "successRate": 0.97}
        }),
    ));
    let status = healthy.check_health();
    assert_eq!(status.status, ServiceStatus::Healthy);
    assert_eq!(status.stats.total_conversations, 12);

    let down = BotClient::new(FakeTransport::new()).check_health();
    assert_eq!(down.status, ServiceStatus::Down);
    assert_eq!(down.version, "unknown");
    assert_eq!(down.uptime, 0);
}

#[test]
fn test_medicines() {
    let client = BotClient::new(FakeTransport::new().json(
        "/medicines",
        json!({"success": true, "data": [{"id": "omeprazole"}]}),
    ));

    let medicines = client.medicines(Some("omep"), Some(PetSpecies::GuineaPig));
    assert_eq!(medicines.len(), 1);
    assert_eq!(
        client.transport().calls()[0].query,
        vec![
            ("query".to_string(), "omep".to_string()),
            ("species".to_string(), "guinea_pig".to_string()),
        ]
    );

    let failing = BotClient::new(FakeTransport::new().route("/medicines", Reply::Status(404)));
    assert!(failing.medicines(None, None).is_empty());
}

#[test]
fn test_analytics_and_base_url() {
    let mut client = BotClient::new(FakeTransport::new().json(
        "/analytics/stats",
        json!({"success": true, "data": {"queries": 3}}),
    ));
    assert_eq!(client.analytics(), Some(json!({"queries": 3})));

    client.set_base_url("https://bot.example.lv");
    assert_eq!(client.transport().base_url, "https://bot.example.lv");
}
