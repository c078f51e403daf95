//! Header helpers for the request builder.

use http::header::{HeaderName, HeaderValue};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set a header; last write on the same name wins at materialization.
    ///
    /// An invalid name or value is skipped with a warning, matching the
    /// best-effort policy of wire construction.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (name.parse::<HeaderName>(), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => self.headers.push((name, value)),
            _ => log::warn!("skipping invalid header '{name}'"),
        }
        self
    }

    /// Set multiple headers at once.
    #[must_use]
    pub fn headers<'a, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in entries {
            self = self.header(name, value);
        }
        self
    }

    /// Set the Authorization header with a bearer token.
    #[must_use]
    pub fn bearer_token(self, token: &str) -> Self {
        self.header("authorization", &format!("Bearer {token}"))
    }

    /// Ask for a JSON response.
    #[must_use]
    pub fn accept_json(self) -> Self {
        self.header("accept", "application/json")
    }
}
