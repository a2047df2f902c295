//! Application wiring: one client per process, passed explicitly.

use crate::client::{StellarForgeApi, StellarForgeClientBuilder};
use crate::config::ClientConfig;
use crate::Result;
use std::sync::Arc;

/// Services shared by the rest of the application.
///
/// Built once at startup and handed to whatever needs the API; there is no
/// global instance.
#[derive(Clone)]
pub struct AppServices {
    config: ClientConfig,
    api: Arc<dyn StellarForgeApi>,
}

impl AppServices {
    /// Construct the HTTP client from `config`.
    pub fn bootstrap(config: ClientConfig) -> Result<Self> {
        let client = StellarForgeClientBuilder::from_config(config.clone()).build()?;
        tracing::info!(api_base_url = %client.base_url(), "StellarForge client ready");
        Ok(Self {
            config,
            api: Arc::new(client),
        })
    }

    /// Wire an existing implementation, e.g. a test double.
    pub fn with_api(config: ClientConfig, api: Arc<dyn StellarForgeApi>) -> Self {
        Self { config, api }
    }

    pub fn api(&self) -> Arc<dyn StellarForgeApi> {
        Arc::clone(&self.api)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
