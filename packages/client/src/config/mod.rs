//! Deployment-scoped diagnostics configuration.
//!
//! Resolution is injected: the application loads the configuration from
//! wherever it lives and threads the value into
//! [`SessionBuilder::diagnostics`](crate::client::SessionBuilder::diagnostics).
//! A missing or malformed source is a logged, non-fatal condition that
//! leaves tracing disabled.

use serde::{Deserialize, Serialize};

/// Identifies the deployment to the diagnostics pipeline and gates the
/// default tracer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Client identifier the deployment registered with the remote API.
    pub client_id: String,
    /// Domain the deployment is served from.
    pub domain: String,
    /// Opt-in toggle for request/response tracing. Off when omitted.
    #[serde(default)]
    pub verbose_logging: bool,
}

impl DiagnosticsConfig {
    /// Tolerant JSON loader.
    ///
    /// Returns `None` on malformed input after logging a warning; callers
    /// treat that as "tracing disabled" and continue.
    #[must_use]
    pub fn from_json_slice(bytes: &[u8]) -> Option<Self> {
        match serde_json::from_slice(bytes) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "malformed diagnostics configuration, tracing stays disabled"
                );
                None
            }
        }
    }

    /// Whether sessions carrying this configuration trace by default.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose_logging
    }
}
