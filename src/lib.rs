//! # stellarforge-client
//!
//! Typed async client for the StellarForge star-generation API.
//!
//! ## Overview
//!
//! The generation engine runs on a remote server. This crate sends generation
//! requests, lists and inspects generated projects, and checks service health.
//! Every operation comes in two flavours:
//!
//! - **Soft-failure** (`generate_project`, `get_projects`, `check_health`, ...):
//!   never returns an error. Failures are logged through `tracing` and become
//!   `None` / `false`.
//! - **Tagged** (`try_generate_project`, `try_get_projects`, ...): returns
//!   [`Result`] whose [`Error`] tells transport, status and parse failures apart.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stellarforge_client::{GenerateRequest, StellarForgeClient};
//!
//! #[tokio::main]
//! async fn main() -> stellarforge_client::Result<()> {
//!     let client = StellarForgeClient::new("http://localhost:8080/api")?;
//!
//!     if client.check_health().await {
//!         let request = GenerateRequest::sphere("Alpha", 50, 20.0);
//!         if let Some(result) = client.generate_project(&request).await {
//!             println!("{} systems in {}ms", result.num_star_systems, result.generation_time_ms);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request and response records |
//! | [`client`] | Client, builder and the [`StellarForgeApi`] trait |
//! | [`transport`] | JSON-over-HTTP transport |
//! | [`config`] | Layered configuration (defaults, YAML, environment) |
//! | [`bootstrap`] | One-time wiring of the client for an application |

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use bootstrap::AppServices;
pub use client::{StellarForgeApi, StellarForgeClient, StellarForgeClientBuilder};
pub use config::ClientConfig;
pub use types::{
    GenerateRequest, GenerateResponse, ProjectDetail, ProjectListResponse, ProjectStarsResponse,
    ProjectSummary,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
