//! Request description, materialization and raw results.

pub mod headers;
pub mod request;
pub mod response;
pub mod wire;

pub use headers::{ClientMetadata, LibraryMetadata};
pub use request::ApiRequest;
pub use response::{RawExchange, ResponseHead};
pub use wire::WireRequest;
