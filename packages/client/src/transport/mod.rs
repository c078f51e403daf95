//! The transport boundary.
//!
//! A transport accepts a fully materialized message and resolves exactly
//! once with either response head plus body bytes or a transport-level
//! error. The core never inspects status codes or bytes on the way through;
//! the raw result goes to the tracer and then to the classifier.

mod hyper;

pub use self::hyper::HyperTransport;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::TransportError;
use crate::http::response::ResponseHead;
use crate::http::wire::WireRequest;

/// Raw outcome of one transport submission.
pub type RawResult = Result<(ResponseHead, Bytes), TransportError>;

/// Performs one HTTP exchange per call.
///
/// Completion is asynchronous by construction: no work happens before the
/// returned future is polled, so a transport can never preempt the
/// dispatching caller. Retries, pooling and timeouts live behind this
/// boundary, never in front of it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit `request` and resolve with the raw result.
    async fn execute(&self, request: WireRequest) -> RawResult;
}
