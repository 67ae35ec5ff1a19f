use thiserror::Error;

/// Shown for every failed load, whatever the underlying cause
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch sales data.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request was superseded and aborted; never shown to the user
    #[error("request cancelled")]
    Cancelled,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Cancelled,
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl From<serde_qs::Error> for FetchError {
    fn from(err: serde_qs::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}
