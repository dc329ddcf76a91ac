//! Request transport for the bot API.

use crate::error::BotResult;

/// Path prefix of every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Moves one request to the service and returns the raw response body.
///
/// Paths are relative to the API root (e.g. `/chat/ask`). Non-success
/// statuses and connection failures come back as errors.
pub trait BotTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> BotResult<String>;

    fn post(&self, path: &str, body: &serde_json::Value) -> BotResult<String>;

    /// Point the transport at a different service root.
    fn set_base_url(&mut self, base_url: &str);
}

/// `{base_url}/api/v1` with any trailing slash removed from `base_url`.
pub fn api_root(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX)
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::{api_root, BotTransport};
    use crate::config::BotConfig;
    use crate::error::{BotError, BotResult};

    /// Blocking HTTP transport. One attempt per call, no retry.
    pub struct HttpTransport {
        agent: ureq::Agent,
        root: String,
    }

    impl HttpTransport {
        pub fn new(config: &BotConfig) -> Self {
            let agent = ureq::AgentBuilder::new()
                .timeout_connect(config.timeout)
                .timeout_read(config.timeout)
                .timeout_write(config.timeout)
                .build();
            Self {
                agent,
                root: api_root(&config.base_url),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.root, path)
        }
    }

    fn read(method: &str, url: &str, result: Result<ureq::Response, ureq::Error>) -> BotResult<String> {
        match result {
            Ok(response) => {
                tracing::debug!(method, url, status = response.status(), "bot response");
                response
                    .into_string()
                    .map_err(|e| BotError::Unavailable(e.to_string()))
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!(method, url, status = code, "bot request failed");
                Err(BotError::from_status(code, body))
            }
            Err(ureq::Error::Transport(err)) => {
                tracing::warn!(method, url, error = %err, "bot service unreachable");
                Err(BotError::Unavailable(err.to_string()))
            }
        }
    }

    impl BotTransport for HttpTransport {
        fn get(&self, path: &str, query: &[(&str, String)]) -> BotResult<String> {
            let url = self.url(path);
            tracing::debug!(method = "GET", url = %url, "bot request");

            let mut request = self.agent.get(&url);
            for (name, value) in query {
                request = request.query(name, value);
            }
            read("GET", &url, request.call())
        }

        fn post(&self, path: &str, body: &serde_json::Value) -> BotResult<String> {
            let url = self.url(path);
            tracing::debug!(method = "POST", url = %url, "bot request");

            let result = self
                .agent
                .post(&url)
                .set("Content-Type", "application/json")
                .send_json(body);
            read("POST", &url, result)
        }

        fn set_base_url(&mut self, base_url: &str) {
            self.root = api_root(base_url);
        }
    }
}
