//! HTTP transport for the StellarForge API.

mod http;

pub use http::{HttpTransport, TransportError};
