//! # tandem
//!
//! Fluent surface for describing, dispatching and chaining single HTTP
//! calls with strongly-typed outcomes. A built request is an immutable
//! value; dispatching it submits exactly one wire message and hands the raw
//! result to the per-endpoint classifier. Chains run two dispatchable units
//! back to back, short-circuiting on the first failure.
//!
//! ```no_run
//! use std::io;
//!
//! use tandem::{Api, ChainedRequest, Dispatch, RawExchange, Session};
//!
//! # async fn run() -> Result<(), io::Error> {
//! let session = Session::new();
//!
//! let refresh = Api::with_session(&session)
//!     .param("grant_type", "refresh_token")
//!     .post("https://auth.example.com/token")
//!     .classify(|exchange: RawExchange| {
//!         if exchange.transport_error().is_some() {
//!             return Err(io::Error::other("network"));
//!         }
//!         Ok(())
//!     })
//!     .expect("well-formed request");
//!
//! let profile = Api::with_session(&session)
//!     .accept_json()
//!     .get("https://api.example.com/me")
//!     .classify(|_: RawExchange| Ok::<_, io::Error>(()))
//!     .expect("well-formed request");
//!
//! ChainedRequest::new(refresh, profile).dispatch().await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::RequestBuilder;

// Re-export canonical types from the client package
pub use tandem_client::{
    decode_json, ApiRequest, BuildError, ChainedRequest, Classify, ClientMetadata,
    DiagnosticsConfig, Dispatch, DomainError, HyperTransport, LibraryMetadata, LogTracer,
    RawExchange, RawResult, ResponseHead, Session, SessionBuilder, SessionStats, StatsSnapshot,
    Tracer, Transport, TransportError, WireRequest,
};

/// Main entry point providing static builder constructors.
pub struct Api;

impl Api {
    /// Start building a request on a shared session.
    #[must_use]
    pub fn with_session(session: &Session) -> RequestBuilder {
        RequestBuilder::new(session)
    }
}
