//! Soft-failure API surface as an injectable trait.

use crate::client::core::StellarForgeClient;
use crate::types::{
    GenerateRequest, GenerateResponse, ProjectDetail, ProjectListResponse, ProjectStarsResponse,
};
use async_trait::async_trait;

/// What consumer code needs from the StellarForge API.
///
/// Every method collapses failures: `None` / `false` means the call did not
/// produce a result, whatever the cause. Implemented by [`StellarForgeClient`];
/// tests can supply their own implementation.
#[async_trait]
pub trait StellarForgeApi: Send + Sync {
    async fn generate_project(&self, request: &GenerateRequest) -> Option<GenerateResponse>;

    async fn get_projects(&self) -> Option<ProjectListResponse>;

    async fn check_health(&self) -> bool;

    async fn get_project(&self, project_id: &str) -> Option<ProjectDetail>;

    async fn get_project_stars(&self, project_id: &str) -> Option<ProjectStarsResponse>;
}

#[async_trait]
impl StellarForgeApi for StellarForgeClient {
    async fn generate_project(&self, request: &GenerateRequest) -> Option<GenerateResponse> {
        StellarForgeClient::generate_project(self, request).await
    }

    async fn get_projects(&self) -> Option<ProjectListResponse> {
        StellarForgeClient::get_projects(self).await
    }

    async fn check_health(&self) -> bool {
        StellarForgeClient::check_health(self).await
    }

    async fn get_project(&self, project_id: &str) -> Option<ProjectDetail> {
        StellarForgeClient::get_project(self, project_id).await
    }

    async fn get_project_stars(&self, project_id: &str) -> Option<ProjectStarsResponse> {
        StellarForgeClient::get_project_stars(self, project_id).await
    }
}
