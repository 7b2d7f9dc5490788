//! # humstream - internet radio transport layer
//!
//! `humstream` resolves a station's published playlist reference into a
//! live audio byte-stream endpoint and opens that endpoint as a
//! continuous sequence of fixed-size byte chunks, ready to hand to a
//! decoder.
//!
//! ## Quick Start
//!
//! ```no_run
//! use humstream::StreamClient;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StreamClient::new()?;
//!
//!     // A station publishes a small PLS playlist naming its stream.
//!     let playlist = "https://somafm.com/groovesalad130.pls".parse()?;
//!     let resolved = client.resolve_playlist(&playlist).await?;
//!
//!     // Open the live stream and consume chunks until torn down.
//!     let mut stream = client.open_stream(&resolved.endpoint).await?;
//!     while let Some(chunk) = stream.next().await {
//!         let bytes = chunk?;
//!         // Feed bytes to a decoder sink...
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`client`]: [`StreamClient`] and its builder, the configuration
//!   surface (timeouts, chunk size, container hint, User-Agent)
//! - [`playlist`]: pure PLS body scanning
//! - [`chunk`]: fixed-size re-chunking of the HTTP response body
//! - [`models`]: [`ResolvedStream`] and [`ContainerHint`]
//! - [`error`]: error types and result alias
//!
//! ## Semantics
//!
//! - Playlist resolution is a single fetch-parse attempt: non-success
//!   status, undecodable body, missing `File1=` entry and malformed
//!   URLs all fail with distinct [`Error`] variants. Only the primary
//!   `File1=` entry is read.
//! - The chunk sequence preserves byte order and byte count exactly;
//!   the final chunk of a cleanly terminated stream may be short.
//!   Dropping a [`ChunkStream`] closes the connection. No retries
//!   happen at this layer; retry policy belongs to the caller.

pub mod chunk;
pub mod client;
pub mod error;
pub mod models;
pub mod playlist;

// Re-exports for convenience
pub use chunk::ChunkStream;
pub use client::{ClientBuilder, StreamClient};
pub use error::{Error, Result};
pub use models::{ContainerHint, ResolvedStream};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
