//! Data contracts exchanged with the StellarForge API.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`GenerateRequest`] / [`GenerateResponse`] | `POST /projects/generate` |
//! | [`ProjectListResponse`] of [`ProjectSummary`] | `GET /projects` |
//! | [`ProjectDetail`] | `GET /projects/{id}` |
//! | [`ProjectStarsResponse`] | `GET /projects/{id}/stars` |
//! | [`ErrorResponse`] | body of any 4xx/5xx |
//!
//! ## Example
//!
//! ```rust
//! use stellarforge_client::types::GenerateRequest;
//!
//! let req = GenerateRequest::sphere("Alpha", 50, 20.0);
//! let body = serde_json::to_value(&req).unwrap();
//! assert_eq!(body["numStars"], 50);
//! assert!(body.get("sizeXLy").is_none());
//! ```

pub mod request;
pub mod response;

pub use request::{GenerateRequest, DISTRIBUTION_CUBE, DISTRIBUTION_SPHERE, MAX_STARS};
pub use response::{
    ErrorResponse, GenerateResponse, Position, ProjectDetail, ProjectListResponse,
    ProjectStarsResponse, ProjectSummary, StarDetail, SystemWithStars,
};
