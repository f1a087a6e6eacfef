use thiserror::Error;

/// Largest slice of an error body kept in a [`FetchError::Status`] message.
const MAX_ERROR_BODY: usize = 256;

/// Errors that can occur while fetching a joke.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a valid joke.
    #[error("Failed to decode joke: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Build a [`FetchError::Status`] from a status code and raw response body.
    pub fn status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            "empty response body".to_string()
        } else {
            truncate(body.trim(), MAX_ERROR_BODY)
        };
        FetchError::Status { status, message }
    }

    /// Short machine-readable label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
