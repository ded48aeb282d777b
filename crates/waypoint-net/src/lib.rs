//! Networking for Waypoint.
//!
//! - **HTTP Client**: A small async client over `reqwest` ([`http`])
//! - **Route Search**: Typed access to the route-search endpoint ([`route`])
//!
//! # Route Search
//!
//! ```ignore
//! use std::time::Duration;
//! use waypoint_net::{Priority, RouteQuery, RouteSearchClient};
//!
//! let client = RouteSearchClient::new("http://127.0.0.1:8000", Duration::from_secs(30))?;
//! let query = RouteQuery::new("Atlanta (ATL)", "Denver (DEN)", Priority::Cost);
//! let route = client.find_route(&query).await?;
//! println!("{} stops, ${:.2}", route.path.len(), route.total_cost);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], with [`NetworkError`]
//! distinguishing timeouts, connection failures, error statuses and
//! malformed bodies.

mod error;
pub mod http;
pub mod route;

pub use error::{NetworkError, Result};
pub use route::{ParsePriorityError, Priority, RouteQuery, RouteResult, RouteSearchClient};
