//! The shared HTTP client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;

use super::request::HttpRequestBuilder;
use crate::error::Result;

/// Settings applied to every request a client sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
    /// Timeout for establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Redirects followed before giving up.
    pub max_redirects: usize,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            max_redirects: 10,
            user_agent: Some(format!("Waypoint/{} (Rust)", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Builder for an [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Start from [`HttpClientConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set how many redirects to follow.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient> {
        let HttpClientConfig {
            timeout,
            connect_timeout,
            max_redirects,
            ref user_agent,
        } = self.config;

        let mut builder = reqwest::Client::builder().redirect(Policy::limited(max_redirects));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(HttpClient {
            client: builder.build()?,
            config: Arc::new(self.config),
        })
    }
}

/// An async HTTP client.
///
/// Clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a builder.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Start a GET request to `url`.
    pub fn get(&self, url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(self.client.clone(), url.to_string())
    }
}
