//! Error types for the streaming transport layer

/// Result type alias for humstream operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a playlist or streaming bytes
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (connection refused, reset, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    /// Playlist body is not valid UTF-8
    #[error("playlist body is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Playlist contains no `File1=` stream entry
    #[error("no stream entry in playlist")]
    NoStreamEntry,

    /// A stream entry was found but is not a valid URL
    #[error("invalid stream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// True for transport-level failures (connection or status)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status(_))
    }
}
