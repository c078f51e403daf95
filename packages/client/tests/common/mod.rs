//! Shared test doubles.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode, Version};
use serde::Deserialize;

use tandem_client::{
    decode_json, RawExchange, RawResult, ResponseHead, Session, Tracer, Transport, TransportError,
    WireRequest,
};

/// Scripted transport responses.
pub enum Canned {
    Success {
        status: StatusCode,
        body: &'static str,
    },
    ConnectionRefused,
}

/// Transport double replaying a script and recording every submission.
pub struct MockTransport {
    calls: AtomicUsize,
    script: Mutex<Vec<Canned>>,
    seen: Mutex<Vec<WireRequest>>,
}

impl MockTransport {
    pub fn replying(script: Vec<Canned>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(status: StatusCode, body: &'static str) -> Arc<Self> {
        Self::replying(vec![Canned::Success { status, body }])
    }

    pub fn refusing() -> Arc<Self> {
        Self::replying(vec![Canned::ConnectionRefused])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_seen(&self) -> Option<WireRequest> {
        self.seen.lock().expect("seen lock").last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: WireRequest) -> RawResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(request);
        let next = self.script.lock().expect("script lock").remove(0);
        match next {
            Canned::Success { status, body } => Ok((
                ResponseHead {
                    status,
                    headers: HeaderMap::new(),
                    version: Version::HTTP_11,
                },
                Bytes::from_static(body.as_bytes()),
            )),
            Canned::ConnectionRefused => Err(TransportError::connect(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

/// Session whose descriptors submit to `transport`.
pub fn session_over(transport: Arc<MockTransport>) -> Session {
    Session::builder().transport(transport).build()
}

/// Tracer double counting both hooks.
#[derive(Default)]
pub struct CountingTracer {
    pub outgoing: AtomicUsize,
    pub incoming: AtomicUsize,
}

impl Tracer for CountingTracer {
    fn outgoing(&self, _wire: &WireRequest) {
        self.outgoing.fetch_add(1, Ordering::SeqCst);
    }

    fn incoming(&self, _result: &RawResult) {
        self.incoming.fetch_add(1, Ordering::SeqCst);
    }
}

/// Domain error used by the test classifiers.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Success payload used by the test classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub access_token: String,
}

/// Classifier for the token endpoint shape used across scenarios.
pub fn token_classifier(exchange: RawExchange) -> Result<Token, ApiError> {
    if let Some(err) = exchange.transport_error() {
        return Err(ApiError::Transport(err.to_string()));
    }
    let head = exchange.head().expect("completed exchange carries a head");
    if !head.status.is_success() {
        return Err(ApiError::Status(head.status.as_u16()));
    }
    decode_json(&exchange).map_err(|err| ApiError::Malformed(err.to_string()))
}
