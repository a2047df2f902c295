//! Local request checks run before dispatch

use crate::types::GenerateRequest;
use crate::Result;

use super::core::StellarForgeClient;

pub(crate) trait PreflightExt {
    fn preflight_generate(&self, request: &GenerateRequest) -> Result<()>;
}

impl PreflightExt for StellarForgeClient {
    /// No-op unless preflight validation was enabled on the builder.
    fn preflight_generate(&self, request: &GenerateRequest) -> Result<()> {
        if !self.preflight_validation {
            return Ok(());
        }
        request.validate().map_err(|e| {
            tracing::debug!(error = %e, "generate request rejected before dispatch");
            e
        })
    }
}
