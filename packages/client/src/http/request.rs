//! Request descriptors.
//!
//! An [`ApiRequest`] is an immutable description of one HTTP call plus the
//! classifier that interprets its raw result. Deriving via the `with_*`
//! methods copies the value and leaves the source untouched, so a base
//! descriptor can be shared across call sites without aliasing surprises.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use serde_json::{Map, Value};
use url::Url;

use crate::classify::Classify;
use crate::client::Session;
use crate::error::BuildError;
use crate::http::response::RawExchange;
use crate::http::wire::WireRequest;
use crate::telemetry::{LogTracer, Tracer};

fn is_recognized(method: &Method) -> bool {
    matches!(
        method.as_str(),
        "GET" | "POST" | "PUT" | "PATCH" | "DELETE" | "HEAD"
    )
}

/// Immutable description of one HTTP call and how to interpret its result.
///
/// `T` is the success payload, `E` the typed error the classifier produces.
/// Construction performs no network activity; [`dispatch`](Self::dispatch)
/// performs exactly one submission.
pub struct ApiRequest<T, E> {
    session: Session,
    endpoint: Url,
    method: Method,
    parameters: Map<String, Value>,
    headers: HeaderMap,
    classifier: Arc<dyn Classify<T, E>>,
    tracer: Option<Arc<dyn Tracer>>,
}

impl<T, E> Clone for ApiRequest<T, E> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            endpoint: self.endpoint.clone(),
            method: self.method.clone(),
            parameters: self.parameters.clone(),
            headers: self.headers.clone(),
            classifier: Arc::clone(&self.classifier),
            tracer: self.tracer.clone(),
        }
    }
}

impl<T, E> ApiRequest<T, E> {
    /// Describe one call against `session`.
    ///
    /// The verb must be one of GET, POST, PUT, PATCH, DELETE or HEAD;
    /// anything else fails construction. When the session's diagnostics
    /// configuration opts into verbose logging, the descriptor adopts the
    /// default [`LogTracer`] here, once, and [`with_tracer`](Self::with_tracer)
    /// becomes inert.
    pub fn new(
        session: &Session,
        method: Method,
        endpoint: Url,
        classifier: impl Classify<T, E> + 'static,
    ) -> Result<Self, BuildError> {
        if !is_recognized(&method) {
            return Err(BuildError::UnsupportedMethod(method.to_string()));
        }
        let tracer = session
            .verbose()
            .then(|| Arc::new(LogTracer) as Arc<dyn Tracer>);
        Ok(Self {
            session: session.clone(),
            endpoint,
            method,
            parameters: Map::new(),
            headers: HeaderMap::new(),
            classifier: Arc::new(classifier),
            tracer,
        })
    }

    /// The absolute target of this call.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The verb this call is sent with.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Body parameters accumulated so far.
    #[must_use]
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Caller headers accumulated so far.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether a tracer will observe this call.
    #[must_use]
    pub fn is_traced(&self) -> bool {
        self.tracer.is_some()
    }

    /// Derive a new descriptor with `additional` merged into the body
    /// parameters.
    ///
    /// Supplied entries win on key collision; `self` is left untouched and
    /// every other field, the resolved tracer included, is copied as-is.
    #[must_use = "with_parameters returns a new descriptor and leaves self unchanged"]
    pub fn with_parameters(&self, additional: Map<String, Value>) -> Self {
        let mut derived = self.clone();
        derived.parameters.extend(additional);
        derived
    }

    /// Derive a new descriptor with one header set.
    ///
    /// Last write on the same name wins at materialization.
    #[must_use = "with_header returns a new descriptor and leaves self unchanged"]
    pub fn with_header(&self, name: HeaderName, value: HeaderValue) -> Self {
        let mut derived = self.clone();
        derived.headers.insert(name, value);
        derived
    }

    /// Derive a new descriptor carrying `tracer`.
    ///
    /// Inert when the session already adopted the default tracer at
    /// construction; that resolution is never revisited.
    #[must_use = "with_tracer returns a new descriptor and leaves self unchanged"]
    pub fn with_tracer(&self, tracer: Arc<dyn Tracer>) -> Self {
        let mut derived = self.clone();
        if !self.session.verbose() {
            derived.tracer = Some(tracer);
        }
        derived
    }

    /// Build the outgoing wire message.
    ///
    /// Pure and deterministic given an unchanged descriptor. Body parameters
    /// serialize to JSON when non-empty, with `Content-Type:
    /// application/json` set alongside; caller headers apply afterward, so
    /// an explicit content-type wins. Client metadata headers land last.
    ///
    /// A parameter map that fails to serialize is logged and the message
    /// goes out without a body rather than failing the call. Callers feeding
    /// the map values that cannot serialize will silently lose the body.
    #[must_use]
    pub fn materialize(&self) -> WireRequest {
        let mut headers = HeaderMap::new();
        let body = if self.parameters.is_empty() {
            None
        } else {
            match serde_json::to_vec(&self.parameters) {
                Ok(bytes) => {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                    Some(Bytes::from(bytes))
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "body parameters failed to serialize, sending no body"
                    );
                    None
                }
            }
        };
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        self.session.metadata().apply(&mut headers);

        WireRequest {
            method: self.method.clone(),
            url: self.endpoint.clone(),
            headers,
            body,
        }
    }

    /// Perform the call: materialize, trace, submit once, classify once.
    ///
    /// The transport is submitted exactly one wire message; the tracer, when
    /// present, sees the outgoing message and the raw result; the classifier
    /// is applied to the raw exchange exactly once and its outcome is
    /// returned unchanged. Nothing is retried.
    pub async fn dispatch(&self) -> Result<T, E> {
        let wire = self.materialize();
        if let Some(tracer) = &self.tracer {
            tracer.outgoing(&wire);
        }
        let raw = self.session.transport().execute(wire).await;
        if let Some(tracer) = &self.tracer {
            tracer.incoming(&raw);
        }
        let exchange = match raw {
            Ok((head, body)) => RawExchange::completed(head, body),
            Err(error) => RawExchange::failed(error),
        };
        let outcome = self.classifier.classify(exchange);
        self.session.record_dispatch(outcome.is_ok());
        outcome
    }
}

#[async_trait::async_trait]
impl<T, E> crate::chain::Dispatch for ApiRequest<T, E>
where
    T: Send + Sync,
    E: crate::error::DomainError,
{
    type Output = T;
    type Error = E;

    async fn dispatch(&self) -> Result<T, E> {
        ApiRequest::dispatch(self).await
    }
}

impl<T, E> fmt::Debug for ApiRequest<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("endpoint", &self.endpoint.as_str())
            .field("parameters", &self.parameters.len())
            .field("headers", &self.headers.len())
            .field("traced", &self.tracer.is_some())
            .finish_non_exhaustive()
    }
}
