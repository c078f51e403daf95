//! Error types shared across the call core.
//!
//! Transport failures are values handed to the response classifier, never
//! panics crossing the core's boundary. Construction-time precondition
//! violations abort descriptor construction instead of surfacing later as
//! runtime outcomes.

use std::error::Error as StdError;

use thiserror::Error;

/// Capability bound satisfied by every classifier error type.
///
/// Anything that can describe itself through [`std::error::Error`] and cross
/// task boundaries qualifies; the blanket impl means callers never implement
/// this by hand.
pub trait DomainError: StdError + Send + Sync + 'static {}

impl<E> DomainError for E where E: StdError + Send + Sync + 'static {}

/// Failures raised by the transport collaborator while performing I/O.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent.
    #[error("error sending request")]
    Request {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Connection or connector establishment failed.
    #[error("connection error")]
    Connect {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The transport gave up waiting.
    #[error("request timeout")]
    Timeout,

    /// The response body could not be read.
    #[error("error reading response body")]
    Body {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl TransportError {
    /// A send failure wrapping `source`.
    pub fn request<E: Into<Box<dyn StdError + Send + Sync>>>(source: E) -> Self {
        Self::Request {
            source: source.into(),
        }
    }

    /// A connection failure wrapping `source`.
    pub fn connect<E: Into<Box<dyn StdError + Send + Sync>>>(source: E) -> Self {
        Self::Connect {
            source: source.into(),
        }
    }

    /// A body-read failure wrapping `source`.
    pub fn body<E: Into<Box<dyn StdError + Send + Sync>>>(source: E) -> Self {
        Self::Body {
            source: source.into(),
        }
    }
}

/// Construction-time precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The endpoint string did not parse as an absolute URL.
    #[error("invalid endpoint '{input}': {message}")]
    InvalidUrl {
        /// The offending input.
        input: String,
        /// Parser diagnostic.
        message: String,
    },

    /// No endpoint was supplied before the terminal build step.
    #[error("no endpoint was set")]
    MissingEndpoint,

    /// The verb is outside the recognized set.
    #[error("unsupported HTTP method '{0}'")]
    UnsupportedMethod(String),
}
