//! Body parameter handling.

use serde_json::{Map, Value};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Add one body parameter; later writes win on the same key.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    /// Merge a parameter map; supplied entries win on key collision.
    #[must_use]
    pub fn params(mut self, entries: Map<String, Value>) -> Self {
        self.parameters.extend(entries);
        self
    }
}
