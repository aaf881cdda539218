//! HTTP transport used by [`MealClient`](crate::MealClient).

use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Performs a GET and returns the response body.
///
/// Implemented by [`UreqTransport`] for real requests; tests substitute
/// canned bodies.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String>;
}

/// Blocking transport backed by a [`ureq::Agent`].
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("schoolmeal/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let mut request = self.agent.get(url);
        for (name, value) in query {
            request = request.query(name, value);
        }
        // The key is part of the query string; only log the endpoint.
        debug!(url, "GET");
        let body = request.call()?.into_string()?;
        Ok(body)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        (**self).get(url, query)
    }
}
