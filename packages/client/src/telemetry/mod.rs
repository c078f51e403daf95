//! Diagnostic tracing hooks.

use crate::http::wire::WireRequest;
use crate::transport::RawResult;

/// Observes a request leaving and its raw result coming back.
///
/// Side-effect only: implementations must not panic and must not block the
/// request path. No tracer configured is a valid, silent state.
pub trait Tracer: Send + Sync {
    /// Called once per dispatch, before the transport receives the message.
    fn outgoing(&self, wire: &WireRequest);

    /// Called once per dispatch with the raw transport result.
    fn incoming(&self, result: &RawResult);
}

/// Default tracer adopted by verbose sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn outgoing(&self, wire: &WireRequest) {
        tracing::info!(
            method = %wire.method,
            url = %wire.url,
            body_bytes = wire.body_len(),
            "dispatching request"
        );
    }

    fn incoming(&self, result: &RawResult) {
        match result {
            Ok((head, body)) => tracing::info!(
                status = %head.status,
                body_bytes = body.len(),
                "received response"
            ),
            Err(err) => tracing::warn!(error = %err, "transport failure"),
        }
    }
}
