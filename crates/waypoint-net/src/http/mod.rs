//! HTTP client for Waypoint.
//!
//! The GET-only layer over `reqwest` that route search runs on. Failures map
//! into [`NetworkError`](crate::NetworkError) and requests are logged under
//! the `waypoint_net::http` target.
//!
//! # Example
//!
//! ```ignore
//! use waypoint_net::http::HttpClient;
//!
//! let client = HttpClient::builder().build()?;
//!
//! let response = client
//!     .get("http://127.0.0.1:8000/route")
//!     .query("from", "Atlanta (ATL)")
//!     .query("to", "Denver (DEN)")
//!     .accept_json()
//!     .send()
//!     .await?;
//! println!("Status: {}", response.status());
//! ```

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use request::HttpRequestBuilder;
pub use response::HttpResponse;
