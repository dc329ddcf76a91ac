//! `{success, data}` response envelope parsing.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{BotError, BotResult};

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// Slice the outermost JSON object out of a body that may carry extra text.
pub fn extract_json(body: &str) -> BotResult<&str> {
    let start = body
        .find('{')
        .ok_or_else(|| BotError::InvalidFormat("No JSON object found in response".into()))?;
    let end = body
        .rfind('}')
        .ok_or_else(|| BotError::InvalidFormat("No closing brace found in response".into()))?;
    if end < start {
        return Err(BotError::InvalidFormat("Unbalanced JSON object in response".into()));
    }
    Ok(&body[start..=end])
}

/// Parse a bare JSON object (no envelope), tolerating surrounding noise.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> BotResult<T> {
    Ok(serde_json::from_str(extract_json(body)?)?)
}

/// Parse a `{success, data}` envelope and return `data`.
///
/// `success: false` is [`BotError::Rejected`]; a successful envelope without
/// `data` is [`BotError::InvalidFormat`].
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> BotResult<T> {
    let envelope: Envelope<T> = parse_json(body)?;

    if !envelope.success {
        return Err(BotError::Rejected(
            envelope.error.unwrap_or_else(|| "request failed".into()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| BotError::InvalidFormat("Envelope has no data".into()))
}

/// Check a `{success}` envelope that carries no payload.
pub fn parse_ack(body: &str) -> BotResult<()> {
    let envelope: Envelope<serde_json::Value> = parse_json(body)?;
    if envelope.success {
        Ok(())
    } else {
        Err(BotError::Rejected(
            envelope.error.unwrap_or_else(|| "request failed".into()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        suggestions: Vec<String>,
    }

    #[test]
    fn test_parse_envelope() {
        let body = r#"{"success":true,"data":{"suggestions":["a","b"]}}"#;
        let payload: Payload = parse_envelope(body).unwrap();
        assert_eq!(payload.suggestions, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_envelope_with_noise() {
        let body = "garbage before\n{\"success\":true,\"data\":{\"suggestions\":[]}}\ntrailing";
        let payload: Payload = parse_envelope(body).unwrap();
        assert!(payload.suggestions.is_empty());
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let body = r#"{"success":false,"error":"quota"}"#;
        let err = parse_envelope::<Payload>(body).unwrap_err();
        assert!(matches!(err, BotError::Rejected(ref msg) if msg == "quota"));
    }

    #[test]
    fn test_missing_data() {
        let err = parse_envelope::<Payload>(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, BotError::InvalidFormat(_)));
    }

    #[test]
    fn test_no_json() {
        assert!(matches!(
            parse_envelope::<Payload>("<html>502 Bad Gateway</html>"),
            Err(BotError::InvalidFormat(_))
        ));
        assert!(matches!(extract_json("} oops {"), Err(BotError::InvalidFormat(_))));
    }

    #[test]
    fn test_ack() {
        assert!(parse_ack(r#"{"success":true}"#).is_ok());
        assert!(parse_ack(r#"{"success":false}"#).is_err());
    }
}
