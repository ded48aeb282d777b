//! Client for the route-search endpoint.
//!
//! The endpoint answers `GET {base}/route?from=..&to=..&priority=T|C` with
//! the best path between two cities:
//!
//! ```text
//! {"priority": "T", "path": ["Atlanta (ATL)", "Denver (DEN)"], "totalTime": 215, "totalCost": 189.5}
//! ```
//!
//! Failures come back as `{"error": "..."}` with status 400 or 404.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Instrument;
use url::Url;
use waypoint_core::logging::{span_names, targets};

use crate::error::{NetworkError, Result};
use crate::http::{HttpClient, HttpClientBuilder};

/// What a route search optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Shortest total travel time.
    #[default]
    #[serde(rename = "T")]
    Time,
    /// Lowest total cost.
    #[serde(rename = "C")]
    Cost,
}

impl Priority {
    /// Every priority, in display order.
    pub const ALL: [Priority; 2] = [Priority::Time, Priority::Cost];

    /// The wire token sent to the endpoint.
    pub fn token(self) -> &'static str {
        match self {
            Priority::Time => "T",
            Priority::Cost => "C",
        }
    }

    /// The label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Time => "Fastest (Time)",
            Priority::Cost => "Cheapest (Cost)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a string that is not a priority token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority `{0}` (expected `T` or `C`)")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "T" | "t" => Ok(Priority::Time),
            "C" | "c" => Ok(Priority::Cost),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

/// The parameters of one route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
    pub priority: Priority,
}

impl RouteQuery {
    /// Create a new query.
    pub fn new(from: impl Into<String>, to: impl Into<String>, priority: Priority) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            priority,
        }
    }
}

/// The best route the endpoint found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// The priority the route was optimized for.
    pub priority: Priority,
    /// Cities along the route, origin first.
    pub path: Vec<String>,
    /// Total travel time.
    #[serde(rename = "totalTime")]
    pub total_time: u64,
    /// Total cost.
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

impl RouteResult {
    /// Number of legs in the route.
    pub fn legs(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Searches routes against one endpoint.
#[derive(Debug, Clone)]
pub struct RouteSearchClient {
    http: HttpClient,
    route_url: Url,
}

impl RouteSearchClient {
    /// Create a client for the endpoint at `base_url` with default HTTP
    /// settings and the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClientBuilder::new().timeout(timeout).build()?;
        Self::with_client(base_url, http)
    }

    /// Create a client that sends requests through `http`.
    pub fn with_client(base_url: &str, http: HttpClient) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(NetworkError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                base.scheme()
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let route_url = base.join("route")?;

        Ok(Self { http, route_url })
    }

    /// The URL searches are sent to, without query parameters.
    pub fn route_url(&self) -> &Url {
        &self.route_url
    }

    /// Find the best route for `query`.
    pub async fn find_route(&self, query: &RouteQuery) -> Result<RouteResult> {
        let span = tracing::debug_span!(
            target: targets::HTTP,
            "find_route",
            subsystem = span_names::SEARCH,
            from = %query.from,
            to = %query.to,
            priority = query.priority.token()
        );
        self.send(query).instrument(span).await
    }

    async fn send(&self, query: &RouteQuery) -> Result<RouteResult> {
        let response = self
            .http
            .get(self.route_url.as_str())
            .accept_json()
            .query("from", query.from.as_str())
            .query("to", query.to.as_str())
            .query("priority", query.priority.token())
            .send()
            .await?
            .error_for_status_with_body()
            .await
            .inspect_err(|e| {
                tracing::warn!(target: targets::HTTP, error = %e, "route search rejected");
            })?;

        let route: RouteResult = response.json().await?;
        if route.path.is_empty() {
            return Err(NetworkError::InvalidBody("route has no stops".to_string()));
        }

        tracing::debug!(
            target: targets::HTTP,
            stops = route.path.len(),
            total_time = route.total_time,
            total_cost = route.total_cost,
            "route found"
        );
        Ok(route)
    }
}
