//! HTTP response types.

use serde::de::DeserializeOwned;

use crate::error::{NetworkError, Result};

/// A received response whose body has not been read yet.
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self { inner: response }
    }

    /// The status code.
    pub fn status(&self) -> http::StatusCode {
        self.inner.status()
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Read the body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Parse the response body as JSON.
    ///
    /// Malformed bodies are reported as [`NetworkError::Json`].
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check if the status code indicates success, consuming the body for the
    /// error message.
    ///
    /// A JSON body of the form `{"error": "..."}` contributes just its message;
    /// any other non-blank body is used verbatim.
    pub async fn error_for_status_with_body(self) -> Result<Self> {
        let status = self.status().as_u16();
        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(NetworkError::HttpStatus {
            status,
            message: error_message(&body),
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status())
            .field("url", &self.inner.url().as_str())
            .finish()
    }
}
