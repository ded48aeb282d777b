//! GET request builder.

use http::header::{ACCEPT, HeaderValue};
use waypoint_core::logging::targets;

use super::response::HttpResponse;
use crate::error::Result;

/// A GET request being assembled.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    client: reqwest::Client,
    url: String,
    query: Vec<(String, String)>,
    accept_json: bool,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: reqwest::Client, url: String) -> Self {
        Self {
            client,
            url,
            query: Vec::new(),
            accept_json: false,
        }
    }

    /// Append a query parameter; values are percent-encoded on send.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Ask for a JSON response.
    pub fn accept_json(mut self) -> Self {
        self.accept_json = true;
        self
    }

    /// Send the request and wait for the response head.
    pub async fn send(self) -> Result<HttpResponse> {
        let mut url = url::Url::parse(&self.url)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        tracing::debug!(target: targets::HTTP, url = %url, "GET");

        let mut request = self.client.get(url);
        if self.accept_json {
            request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(target: targets::HTTP, error = %e, "request failed");
        })?;

        tracing::debug!(target: targets::HTTP, status = response.status().as_u16(), "response received");
        Ok(HttpResponse::from_reqwest(response))
    }
}
