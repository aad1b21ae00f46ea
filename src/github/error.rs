use thiserror::Error;

/// Why a listing request produced no repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-2xx status.
    #[error("GitHub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON array of repository objects, or a record
    /// lacked a required field.
    #[error("malformed repository listing: {0}")]
    Decode(#[from] serde_json::Error),

    /// `base_url` does not parse as an absolute URL that can carry a path.
    #[error("invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The token or user agent cannot be sent as an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl FetchError {
    /// Hint shown next to the error, keyed on the HTTP status.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            FetchError::Status { status: 401, .. } => Some("check your access token"),
            FetchError::Status { status: 403, .. } => {
                Some("token lacks permission or the rate limit is exhausted")
            }
            FetchError::Status { status: 404, .. } => Some("user not found"),
            FetchError::Transport(e) if e.is_timeout() => {
                Some("raise github.timeout_secs in the config file")
            }
            _ => None,
        }
    }
}
