//! # tandem client core
//!
//! Immutable descriptions of single HTTP calls with strongly-typed
//! outcomes. A descriptor captures method, URL, headers, body parameters
//! and the per-endpoint classifier that turns the raw transport result into
//! `Result<T, E>`; dispatching submits exactly one wire message and applies
//! the classifier exactly once. Two dispatchable units sharing an error
//! type compose into a [`ChainedRequest`] that short-circuits on the first
//! failure.
//!
//! ## Design
//!
//! - **Descriptors are values**: deriving via `with_parameters` or
//!   `with_header` copies, never mutates, so a base request is safe to
//!   share across call sites.
//! - **Classification is injected**: the core never inspects status codes
//!   or bytes; per-endpoint logic lives in the supplied [`Classify`]
//!   implementation.
//! - **Collaborators are shared**: transport, metadata provider and
//!   diagnostics configuration live in a [`Session`] whose lifetime exceeds
//!   any descriptor built on it.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Core modules
pub mod chain;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod telemetry;
pub mod transport;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
