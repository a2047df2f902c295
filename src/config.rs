//! Client configuration.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`STELLARFORGE_API_BASE_URL`, `STELLARFORGE_TIMEOUT_SECS`)
//! 2. An optional YAML file
//! 3. Built-in defaults (`http://localhost:8080/api`, transport-default timeout)

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const ENV_API_BASE_URL: &str = "STELLARFORGE_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "STELLARFORGE_TIMEOUT_SECS";

fn default_user_agent() -> String {
    concat!("stellarforge-client/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings resolved once at startup and handed to the client builder.
///
/// ```
/// use stellarforge_client::config::ClientConfig;
///
/// let config = ClientConfig::from_yaml_str("apiBaseUrl: http://stars.local/api\ntimeoutSecs: 5\n").unwrap();
/// assert_eq!(config.api_base_url, "http://stars.local/api");
/// assert_eq!(config.timeout_secs, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Root of the API; endpoint paths are appended to it.
    pub api_base_url: String,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "Invalid configuration YAML",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config"),
            )
        })?;
        Ok(config.normalized())
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot read configuration file: {}", e),
                ErrorContext::new()
                    .with_field_path(path.display().to_string())
                    .with_source("config"),
            )
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply every layer: defaults, then `path` (if given), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        let config = base.with_env_overrides();
        config.parsed_base_url()?;
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Blank values are ignored,
    /// as are timeouts that do not parse.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(_) => {
                    tracing::warn!(
                        key = ENV_TIMEOUT_SECS,
                        value = %raw,
                        "ignoring unparseable timeout override"
                    );
                }
            }
        }
        self.normalized()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    /// Validate `api_base_url` as an absolute http(s) URL.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid API base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("apiBaseUrl")
                    .with_details(self.api_base_url.clone())
                    .with_source("config"),
            )
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::configuration_with_context(
                format!("Unsupported API base URL scheme '{}'", other),
                ErrorContext::new()
                    .with_field_path("apiBaseUrl")
                    .with_details(self.api_base_url.clone())
                    .with_source("config"),
            )),
        }
    }

    // A blank base URL falls back to the default; trailing slashes are dropped.
    pub(crate) fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert!(config.timeout_secs.is_none());
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("stellarforge-client/"));
    }

    #[test]
    fn test_yaml_partial_keeps_defaults() {
        let config = ClientConfig::from_yaml_str("timeoutSecs: 12\n").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_yaml_blank_url_and_trailing_slash() {
        let config = ClientConfig::from_yaml_str("apiBaseUrl: \"  \"\n").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = ClientConfig::from_yaml_str("apiBaseUrl: http://stars.local/api/\n").unwrap();
        assert_eq!(config.api_base_url, "http://stars.local/api");
    }

    #[test]
    fn test_programmatic_blank_url_falls_back_to_default() {
        let config = ClientConfig::new().with_api_base_url("   ");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = ClientConfig::new().with_api_base_url("http://forge.local/api//");
        assert_eq!(config.api_base_url, "http://forge.local/api");
    }

    #[test]
    fn test_yaml_type_error() {
        let err = ClientConfig::from_yaml_str("timeoutSecs: soon\n").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Configuration);
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_API_BASE_URL, "https://forge.example.com/api/"),
            (ENV_TIMEOUT_SECS, "7"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_yaml_str("apiBaseUrl: http://file.local/api\n")
            .unwrap()
            .with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_base_url, "https://forge.example.com/api");
        assert_eq!(config.timeout_secs, Some(7));
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let config = ClientConfig::default()
            .with_timeout_secs(3)
            .with_overrides(|k| (k == ENV_TIMEOUT_SECS).then(|| "abc".to_string()));
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn test_zero_timeout_means_transport_default() {
        let config = ClientConfig::default().with_timeout_secs(0);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ClientConfig::default().parsed_base_url().is_ok());

        let err = ClientConfig::default()
            .with_api_base_url("not a url")
            .parsed_base_url()
            .unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("apiBaseUrl")
        );

        assert!(ClientConfig::default()
            .with_api_base_url("ftp://stars.local/api")
            .parsed_base_url()
            .is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apiBaseUrl: http://10.0.0.5:8080/api").unwrap();
        writeln!(file, "userAgent: forge-cli/1.0").unwrap();

        let config = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8080/api");
        assert_eq!(config.user_agent, "forge-cli/1.0");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Configuration);
    }
}
