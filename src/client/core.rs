use crate::client::builder::StellarForgeClientBuilder;
use crate::client::preflight::PreflightExt;
use crate::transport::HttpTransport;
use crate::types::{
    GenerateRequest, GenerateResponse, ProjectDetail, ProjectListResponse, ProjectStarsResponse,
};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the StellarForge API.
///
/// Cheap to clone; clones share the connection pool. No state is kept between
/// calls, so concurrent calls complete independently and in any order.
#[derive(Clone)]
pub struct StellarForgeClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) preflight_validation: bool,
}

impl std::fmt::Debug for StellarForgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StellarForgeClient")
            .field("base_url", &self.base_url())
            .field("preflight_validation", &self.preflight_validation)
            .finish()
    }
}

impl StellarForgeClient {
    pub fn builder() -> StellarForgeClientBuilder {
        StellarForgeClientBuilder::new()
    }

    /// Client with default settings against `api_base_url`.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        Self::builder().api_base_url(api_base_url).build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn preflight_validation(&self) -> bool {
        self.preflight_validation
    }

    /// `POST /projects/generate`.
    pub async fn try_generate_project(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.preflight_generate(request)?;
        self.transport
            .post_json(&["projects", "generate"], request)
            .await
    }

    /// `GET /projects`.
    pub async fn try_get_projects(&self) -> Result<ProjectListResponse> {
        self.transport.get_json(&["projects"]).await
    }

    /// `GET /projects/{id}`.
    pub async fn try_get_project(&self, project_id: &str) -> Result<ProjectDetail> {
        self.transport.get_json(&["projects", project_id]).await
    }

    /// `GET /projects/{id}/stars`.
    pub async fn try_get_project_stars(&self, project_id: &str) -> Result<ProjectStarsResponse> {
        self.transport
            .get_json(&["projects", project_id, "stars"])
            .await
    }

    /// Generate a project; `None` on any failure (logged).
    pub async fn generate_project(&self, request: &GenerateRequest) -> Option<GenerateResponse> {
        soften(
            "generate_project",
            "Error generating project",
            self.try_generate_project(request).await,
        )
    }

    /// List projects in server order; `None` on any failure (logged).
    ///
    /// An empty list is `Some`, so "no projects" stays distinct from "call failed".
    pub async fn get_projects(&self) -> Option<ProjectListResponse> {
        soften("get_projects", "Error getting projects", self.try_get_projects().await)
    }

    pub async fn get_project(&self, project_id: &str) -> Option<ProjectDetail> {
        soften(
            "get_project",
            "Error getting project",
            self.try_get_project(project_id).await,
        )
    }

    pub async fn get_project_stars(&self, project_id: &str) -> Option<ProjectStarsResponse> {
        soften(
            "get_project_stars",
            "Error getting project stars",
            self.try_get_project_stars(project_id).await,
        )
    }

    /// `GET /health`; true iff the server answered 2xx.
    pub async fn check_health(&self) -> bool {
        match self.transport.get_status(&["health"]).await {
            Ok(status) => {
                if !status.is_success() {
                    debug!(status = status.as_u16(), "health check returned non-success status");
                }
                status.is_success()
            }
            Err(e) => {
                debug!(kind = %e.kind(), error = %e, "health check failed");
                false
            }
        }
    }
}

fn soften<T>(operation: &'static str, what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                operation,
                kind = %e.kind(),
                status = ?e.status(),
                error = %e,
                "{}: {}",
                what,
                e
            );
            None
        }
    }
}
