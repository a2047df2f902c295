use crate::client::core::StellarForgeClient;
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct StellarForgeClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    preflight_validation: bool,
}

impl StellarForgeClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            http_client: None,
            preflight_validation: false,
        }
    }

    /// Start from a resolved configuration (see [`ClientConfig::load`]).
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Inject an existing `reqwest::Client`. Timeout and user agent from the
    /// config are then ignored; the client's own settings apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Check generate requests locally before sending them.
    ///
    /// Off by default: the server is authoritative, and an invalid request is
    /// simply reported back as a 400.
    pub fn preflight_validation(mut self, enable: bool) -> Self {
        self.preflight_validation = enable;
        self
    }

    /// Build the client.
    ///
    /// A blank base URL falls back to the default, as it does in config files.
    pub fn build(self) -> Result<StellarForgeClient> {
        let config = self.config.normalized();
        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client, &config)?,
            None => HttpTransport::new(&config)?,
        };

        Ok(StellarForgeClient {
            transport: Arc::new(transport),
            preflight_validation: self.preflight_validation,
        })
    }
}

impl Default for StellarForgeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
