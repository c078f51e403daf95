//! Core `RequestBuilder` structure and base methods.

use std::fmt;
use std::sync::Arc;

use http::header::{HeaderName, HeaderValue};
use http::Method;
use serde_json::{Map, Value};
use url::Url;

// Re-export types from the client package
pub use tandem_client::{ApiRequest, BuildError, Classify, Session, Tracer};

/// Fluent builder assembling an [`ApiRequest`] step by step.
///
/// By-value: every method consumes and returns the builder. URL and header
/// problems are deferred — intermediate steps stay chainable and the first
/// recorded error surfaces from the terminal
/// [`classify`](RequestBuilder::classify) call.
#[derive(Clone)]
pub struct RequestBuilder {
    pub(crate) session: Session,
    pub(crate) method: Method,
    pub(crate) endpoint: Option<Url>,
    pub(crate) parameters: Map<String, Value>,
    pub(crate) headers: Vec<(HeaderName, HeaderValue)>,
    pub(crate) tracer: Option<Arc<dyn Tracer>>,
    pub(crate) deferred: Option<BuildError>,
    pub(crate) debug_enabled: bool,
}

impl RequestBuilder {
    /// Start building a new request on a shared session.
    #[must_use]
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            method: Method::GET,
            endpoint: None,
            parameters: Map::new(),
            headers: Vec::new(),
            tracer: None,
            deferred: None,
            debug_enabled: false,
        }
    }

    /// Enable debug logging for this builder.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Set the target URL.
    ///
    /// A malformed URL is remembered and reported by the terminal call; the
    /// builder keeps any previously set endpoint.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        match url.parse::<Url>() {
            Ok(parsed) => self.endpoint = Some(parsed),
            Err(err) => {
                log::warn!("invalid URL '{url}': {err}");
                self.deferred.get_or_insert(BuildError::InvalidUrl {
                    input: url.to_string(),
                    message: err.to_string(),
                });
            }
        }
        self
    }

    /// Attach a tracer to the resulting descriptor.
    ///
    /// Ignored when the session's diagnostics configuration already opted
    /// into the default tracer.
    #[must_use]
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("endpoint", &self.endpoint.as_ref().map(Url::as_str))
            .field("parameters", &self.parameters.len())
            .field("headers", &self.headers.len())
            .field("deferred", &self.deferred)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
