//! Canonical types, one import away.

pub use crate::chain::{ChainedRequest, Dispatch};
pub use crate::classify::{decode_json, Classify};
pub use crate::client::{Session, SessionBuilder, SessionStats, StatsSnapshot};
pub use crate::config::DiagnosticsConfig;
pub use crate::error::{BuildError, DomainError, TransportError};
pub use crate::http::headers::{ClientMetadata, LibraryMetadata};
pub use crate::http::request::ApiRequest;
pub use crate::http::response::{RawExchange, ResponseHead};
pub use crate::http::wire::WireRequest;
pub use crate::telemetry::{LogTracer, Tracer};
pub use crate::transport::{HyperTransport, RawResult, Transport};
