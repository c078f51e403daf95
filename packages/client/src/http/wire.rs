//! Materialized outgoing messages.

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// A fully materialized HTTP message, ready for a transport.
///
/// Produced by [`ApiRequest::materialize`](crate::http::request::ApiRequest::materialize);
/// building one performs no I/O.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// Verb to send.
    pub method: Method,
    /// Absolute target.
    pub url: Url,
    /// Final header set, caller headers and client metadata included.
    pub headers: HeaderMap,
    /// JSON body bytes, absent when there are no body parameters.
    pub body: Option<Bytes>,
}

impl WireRequest {
    /// Length of the body in bytes, zero when absent.
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.as_ref().map_or(0, Bytes::len)
    }
}
