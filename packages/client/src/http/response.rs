//! Raw transport results as seen by response classifiers.

use bytes::Bytes;
use http::{HeaderMap, StatusCode, Version};

use crate::error::TransportError;

/// Response metadata, minus the body.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Protocol version the exchange completed on.
    pub version: Version,
}

/// Everything a classifier gets to look at after one dispatch.
///
/// Exactly one channel is meaningful: `head` plus `body` from a completed
/// HTTP exchange, or `error` from a transport-level failure. Classifiers
/// must honor the error channel first and not parse `body` as a success
/// payload when it is set.
#[derive(Debug)]
pub struct RawExchange {
    head: Option<ResponseHead>,
    body: Option<Bytes>,
    error: Option<TransportError>,
}

impl RawExchange {
    /// An exchange that completed at the HTTP level, whatever the status.
    #[must_use]
    pub fn completed(head: ResponseHead, body: Bytes) -> Self {
        Self {
            head: Some(head),
            body: Some(body),
            error: None,
        }
    }

    /// An exchange that failed below the HTTP level.
    #[must_use]
    pub fn failed(error: TransportError) -> Self {
        Self {
            head: None,
            body: None,
            error: Some(error),
        }
    }

    /// Response metadata, when the exchange completed.
    #[must_use]
    pub fn head(&self) -> Option<&ResponseHead> {
        self.head.as_ref()
    }

    /// Body bytes, when the exchange completed.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The transport failure, when the exchange never completed.
    #[must_use]
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    /// Consume the exchange, yielding the failure channel if populated.
    #[must_use]
    pub fn into_transport_error(self) -> Option<TransportError> {
        self.error
    }
}
