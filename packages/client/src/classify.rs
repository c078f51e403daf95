//! The response classification contract.
//!
//! Classification is per-endpoint logic owned by the caller, not by this
//! core: the core never inspects status codes or bytes itself. A classifier
//! is handed the raw exchange exactly once per dispatch and must produce
//! exactly one typed outcome.

use serde::de::DeserializeOwned;

use crate::http::response::RawExchange;

/// Turns one raw exchange into the typed outcome of a call.
///
/// A populated transport error takes precedence: when
/// [`RawExchange::transport_error`] is set, the classifier must map it into
/// its failure type and must not parse the body as the success payload.
///
/// Blanket-implemented for plain closures, so a function reference is a
/// valid classifier.
pub trait Classify<T, E>: Send + Sync {
    /// Produce the outcome for `exchange`.
    fn classify(&self, exchange: RawExchange) -> Result<T, E>;
}

impl<T, E, F> Classify<T, E> for F
where
    F: Fn(RawExchange) -> Result<T, E> + Send + Sync,
{
    fn classify(&self, exchange: RawExchange) -> Result<T, E> {
        self(exchange)
    }
}

/// Parse the body of a completed exchange as JSON.
///
/// A convenience for the common middle step of a classifier; the caller maps
/// the [`serde_json::Error`] into its own failure variant. An absent body
/// parses like an empty document and errors accordingly.
pub fn decode_json<T: DeserializeOwned>(exchange: &RawExchange) -> Result<T, serde_json::Error> {
    let bytes: &[u8] = exchange.body().map_or(&[], |body| body.as_ref());
    serde_json::from_slice(bytes)
}
