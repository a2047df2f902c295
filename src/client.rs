//! StellarForge API client.
//!
//! Two surfaces over the same calls:
//! - `try_*` methods return [`crate::Result`] with a tagged [`crate::Error`];
//! - the plain methods (and [`StellarForgeApi`]) log the failure and collapse
//!   it to `None` / `false`.

pub mod api;
pub mod builder;
pub mod core;
mod preflight;

pub use api::StellarForgeApi;
pub use builder::StellarForgeClientBuilder;
pub use self::core::StellarForgeClient;
