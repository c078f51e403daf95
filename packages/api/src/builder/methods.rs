//! Verb selection and the terminal build step.

use http::Method;

use tandem_client::{ApiRequest, BuildError, Classify};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Target a GET at `url`.
    #[must_use]
    pub fn get(self, url: &str) -> Self {
        self.verb(Method::GET, url)
    }

    /// Target a POST at `url`.
    #[must_use]
    pub fn post(self, url: &str) -> Self {
        self.verb(Method::POST, url)
    }

    /// Target a PUT at `url`.
    #[must_use]
    pub fn put(self, url: &str) -> Self {
        self.verb(Method::PUT, url)
    }

    /// Target a PATCH at `url`.
    #[must_use]
    pub fn patch(self, url: &str) -> Self {
        self.verb(Method::PATCH, url)
    }

    /// Target a DELETE at `url`.
    #[must_use]
    pub fn delete(self, url: &str) -> Self {
        self.verb(Method::DELETE, url)
    }

    /// Target a HEAD at `url`.
    #[must_use]
    pub fn head(self, url: &str) -> Self {
        self.verb(Method::HEAD, url)
    }

    fn verb(mut self, method: Method, url: &str) -> Self {
        self.method = method;
        self.url(url)
    }

    /// Finish the build, attaching the response classifier.
    ///
    /// Surfaces the first deferred URL error, a missing endpoint, or an
    /// unsupported verb. No network activity happens here.
    pub fn classify<T, E>(
        self,
        classifier: impl Classify<T, E> + 'static,
    ) -> Result<ApiRequest<T, E>, BuildError> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        let endpoint = self.endpoint.ok_or(BuildError::MissingEndpoint)?;
        if self.debug_enabled {
            log::debug!(
                "building {} {} ({} parameters, {} headers)",
                self.method,
                endpoint,
                self.parameters.len(),
                self.headers.len()
            );
        }

        let mut request = ApiRequest::new(&self.session, self.method, endpoint, classifier)?
            .with_parameters(self.parameters);
        for (name, value) in self.headers {
            request = request.with_header(name, value);
        }
        if let Some(tracer) = self.tracer {
            request = request.with_tracer(tracer);
        }
        Ok(request)
    }
}
