//! Default transport over the hyper legacy client.
//!
//! Plain HTTP/1.1 with connection reuse. Deployments needing TLS or another
//! protocol inject their own [`Transport`] into the session.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use super::{RawResult, Transport};
use crate::error::TransportError;
use crate::http::response::ResponseHead;
use crate::http::wire::WireRequest;

/// Plain-HTTP transport backed by a pooled hyper client.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    /// Build a transport with hyper's default pool settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyperTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn execute(&self, request: WireRequest) -> RawResult {
        let WireRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut message = http::Request::builder()
            .method(method)
            .uri(url.as_str())
            .body(Full::new(body.unwrap_or_default()))
            .map_err(TransportError::request)?;
        *message.headers_mut() = headers;

        let response = self.client.request(message).await.map_err(|err| {
            if err.is_connect() {
                TransportError::connect(err)
            } else {
                TransportError::request(err)
            }
        })?;

        let (parts, incoming) = response.into_parts();
        let head = ResponseHead {
            status: parts.status,
            headers: parts.headers,
            version: parts.version,
        };
        let collected = incoming.collect().await.map_err(TransportError::body)?;

        Ok((head, collected.to_bytes()))
    }
}
