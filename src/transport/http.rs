use crate::config::ClientConfig;
use crate::types::ErrorResponse;
use crate::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Longest slice of a non-JSON error body carried into a status error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// JSON-over-HTTP transport rooted at the API base URL.
///
/// Holds no per-call state; `reqwest::Client` pools connections internally,
/// so one transport serves any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        // Without an explicit timeout reqwest waits indefinitely, which is the
        // transport default the API contract assumes.
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Use a caller-supplied `reqwest::Client` (shared pools, custom TLS, proxies).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: config.parsed_base_url()?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Append path segments to the base URL. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(method = "GET", url = %url, "dispatching request");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportError::Http)?;
        read_json(&url, response).await
    }

    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(method = "POST", url = %url, "dispatching request");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(TransportError::Http)?;
        read_json(&url, response).await
    }

    /// Issue a GET and report only the status; the body is discarded.
    pub async fn get_status(&self, segments: &[&str]) -> Result<StatusCode> {
        let url = self.endpoint(segments)?;
        tracing::debug!(method = "GET", url = %url, "dispatching request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::Http)?;
        Ok(response.status())
    }
}

async fn read_json<T: DeserializeOwned>(url: &Url, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(TransportError::Http)?;

    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            url: url.to_string(),
            message: error_message(status, &body),
        });
    }

    serde_json::from_str(&body).map_err(|source| Error::Parse {
        url: url.to_string(),
        source,
    })
}

/// Prefer the server's `{"error": ...}` message, then the raw body, then the
/// canonical reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
        }
    }

    pub fn is_connect(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_connect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig::new().with_api_base_url(base)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments_under_base_path() {
        let t = transport("http://localhost:8080/api");
        assert_eq!(
            t.endpoint(&["projects", "generate"]).unwrap().as_str(),
            "http://localhost:8080/api/projects/generate"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_and_bare_host() {
        let t = transport("http://localhost:8080/api/");
        assert_eq!(
            t.endpoint(&["health"]).unwrap().as_str(),
            "http://localhost:8080/api/health"
        );
        assert_eq!(t.base_url(), "http://localhost:8080/api");

        let t = transport("http://127.0.0.1:9000");
        assert_eq!(
            t.endpoint(&["projects"]).unwrap().as_str(),
            "http://127.0.0.1:9000/projects"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let t = transport("http://localhost:8080/api");
        assert_eq!(
            t.endpoint(&["projects", "a b/c", "stars"]).unwrap().as_str(),
            "http://localhost:8080/api/projects/a%20b%2Fc/stars"
        );
    }

    #[test]
    fn test_error_message_sources() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error":"Project name cannot be empty"}"#),
            "Project name cannot be empty"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, ""),
            "Not Found"
        );
        let long = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, &long).len(),
            MAX_ERROR_BODY_CHARS
        );
    }
}
