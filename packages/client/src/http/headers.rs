//! Client identification headers.

use http::header::HeaderValue;
use http::HeaderMap;

/// Appends headers identifying the client library and host platform to an
/// outgoing message.
///
/// Applied once per materialization, after caller headers. Implementations
/// must never abort materialization: a value that fails header validation is
/// skipped, not surfaced.
pub trait ClientMetadata: Send + Sync {
    /// Stamp identification headers onto `headers`.
    fn apply(&self, headers: &mut HeaderMap);
}

/// Default metadata provider stamping library name, version and platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryMetadata;

impl ClientMetadata for LibraryMetadata {
    fn apply(&self, headers: &mut HeaderMap) {
        insert(headers, "x-client-name", env!("CARGO_PKG_NAME"));
        insert(headers, "x-client-version", env!("CARGO_PKG_VERSION"));
        let platform = format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH);
        insert(headers, "x-client-platform", &platform);
    }
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => tracing::warn!(header = name, "skipping invalid metadata header value"),
    }
}
