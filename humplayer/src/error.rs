//! Error types for the playback engine

/// Result type alias for humplayer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a playback session.
///
/// These never cross the engine's public boundary: `start`/`stop`/
/// `toggle` always complete and report failures through the published
/// [`PlayerState`](crate::PlayerState) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or playlist failure from the streaming layer
    #[error(transparent)]
    Stream(#[from] humstream::Error),

    /// The external decoder sink rejected the stream; opaque to the
    /// engine and passed through as-is
    #[error("decoder error: {0}")]
    Decoder(String),
}

impl Error {
    /// Create a decoder error from a string
    pub fn decoder(msg: impl Into<String>) -> Self {
        Self::Decoder(msg.into())
    }
}
