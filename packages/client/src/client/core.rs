//! Session and dispatch statistics.
//!
//! A [`Session`] bundles the collaborators every descriptor needs: the
//! transport performing I/O, the metadata provider stamping identification
//! headers, the diagnostics configuration and dispatch statistics. Cloning a
//! session copies `Arc` handles, never the collaborators themselves; the
//! application creates them before any descriptor exists and tears them down
//! after the last one is gone.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::DiagnosticsConfig;
use crate::http::headers::{ClientMetadata, LibraryMetadata};
use crate::transport::{HyperTransport, Transport};

/// Dispatch statistics for monitoring.
#[derive(Debug, Default)]
pub struct SessionStats {
    /// Dispatches started.
    pub total_dispatches: AtomicU64,
    /// Dispatches whose classifier produced a success.
    pub succeeded: AtomicU64,
    /// Dispatches whose classifier produced a failure.
    pub failed: AtomicU64,
}

impl SessionStats {
    /// Create a snapshot of current statistics.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_dispatches: self.total_dispatches.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record(&self, success: bool) {
        self.total_dispatches.fetch_add(1, Ordering::Relaxed);
        if success {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`SessionStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Dispatches started.
    pub total_dispatches: u64,
    /// Dispatches that classified as success.
    pub succeeded: u64,
    /// Dispatches that classified as failure.
    pub failed: u64,
}

/// Shared context for building and dispatching requests.
#[derive(Clone)]
pub struct Session {
    transport: Arc<dyn Transport>,
    metadata: Arc<dyn ClientMetadata>,
    diagnostics: Option<DiagnosticsConfig>,
    stats: Arc<SessionStats>,
}

impl Session {
    /// Session over the default plain-HTTP transport and metadata provider.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// The transport descriptors built on this session submit to.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub(crate) fn metadata(&self) -> &dyn ClientMetadata {
        self.metadata.as_ref()
    }

    /// The injected diagnostics configuration, if any.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&DiagnosticsConfig> {
        self.diagnostics.as_ref()
    }

    /// Whether descriptors built on this session adopt the default tracer.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.diagnostics.as_ref().is_some_and(DiagnosticsConfig::verbose)
    }

    /// Get dispatch statistics for monitoring.
    #[must_use]
    pub fn stats(&self) -> Arc<SessionStats> {
        self.stats.clone()
    }

    pub(crate) fn record_dispatch(&self, success: bool) {
        self.stats.record(success);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("diagnostics", &self.diagnostics)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Arc<dyn Transport>>,
    metadata: Option<Arc<dyn ClientMetadata>>,
    diagnostics: Option<DiagnosticsConfig>,
}

impl SessionBuilder {
    /// Use `transport` instead of the default plain-HTTP one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `metadata` instead of [`LibraryMetadata`].
    #[must_use]
    pub fn metadata(mut self, metadata: Arc<dyn ClientMetadata>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Inject the deployment's diagnostics configuration.
    ///
    /// `None` means the configuration source was missing or malformed;
    /// tracing stays disabled and construction proceeds. See
    /// [`DiagnosticsConfig::from_json_slice`] for the tolerant loader.
    #[must_use]
    pub fn diagnostics(mut self, config: Option<DiagnosticsConfig>) -> Self {
        self.diagnostics = config;
        self
    }

    /// Finish the session.
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(HyperTransport::new())),
            metadata: self.metadata.unwrap_or_else(|| Arc::new(LibraryMetadata)),
            diagnostics: self.diagnostics,
            stats: Arc::new(SessionStats::default()),
        }
    }
}
