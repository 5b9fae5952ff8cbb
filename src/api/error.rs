use thiserror::Error;

/// Errors produced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS failure, ...).
    #[error("request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status. `message` is the
    /// response body text, or a synthesized `HTTP <status>` when the body
    /// was empty or unreadable.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A nominally-JSON response body failed to parse.
    #[error("failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The message a view should display for this error.
    ///
    /// Status errors carry the server's own words; everything else renders
    /// through its Display impl.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
