//! HTTP client for playlist resolution and stream acquisition

use crate::chunk::{rechunk, ChunkStream};
use crate::error::{Error, Result};
use crate::models::{ContainerHint, ResolvedStream};
use crate::playlist;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default timeout for playlist fetches
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default timeout for the live byte stream.
/// IMPORTANT: an internet radio stream never completes under normal
/// operation, so the connection must be allowed to stay open for
/// hours. Teardown happens by dropping the stream, not by timeout.
pub const DEFAULT_STREAM_TIMEOUT_SECS: u64 = 7200; // 2 hours

/// Default chunk size handed to the decoder sink, in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "humstream/0.1.0";

/// Default container hint for resolved streams.
/// The target station catalog publishes MP3 streams; the hint is a
/// configuration point, not something sniffed from the playlist.
pub const DEFAULT_CONTAINER_HINT: ContainerHint = ContainerHint::Mp3;

/// HTTP client for internet radio streaming.
///
/// Resolves a station's published playlist reference into a live
/// stream endpoint and opens that endpoint as a chunked byte stream.
///
/// # Example
///
/// ```no_run
/// use humstream::StreamClient;
/// use futures::StreamExt;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = StreamClient::new()?;
///     let playlist = "https://somafm.com/groovesalad130.pls".parse()?;
///
///     let resolved = client.resolve_playlist(&playlist).await?;
///     let mut stream = client.open_stream(&resolved.endpoint).await?;
///
///     while let Some(chunk) = stream.next().await {
///         let bytes = chunk?;
///         // Feed bytes to a decoder...
///         println!("Received {} bytes", bytes.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StreamClient {
    client: Client,
    request_timeout: Duration,
    stream_timeout: Duration,
    chunk_size: usize,
    container_hint: ContainerHint,
}

impl StreamClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Chunk size emitted by [`open_stream`](Self::open_stream), in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Container hint attached to resolved streams
    pub fn container_hint(&self) -> ContainerHint {
        self.container_hint
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Resolve a playlist reference into a live stream endpoint.
    ///
    /// Fetches the playlist, decodes it as UTF-8 and scans for the
    /// primary `File1=` entry. One fetch-parse attempt per call, no
    /// retries. An undecodable body is an error rather than being
    /// treated as empty content.
    pub async fn resolve_playlist(&self, playlist_url: &Url) -> Result<ResolvedStream> {
        tracing::debug!("Fetching playlist: {}", playlist_url);

        let response = self
            .client
            .get(playlist_url.clone())
            .timeout(self.request_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let body = response.bytes().await?;
        let content = String::from_utf8(body.to_vec())?;

        let entry = playlist::first_stream_entry(&content).ok_or(Error::NoStreamEntry)?;
        let endpoint = Url::parse(entry)?;

        tracing::debug!("Playlist resolved to stream endpoint: {}", endpoint);

        Ok(ResolvedStream {
            endpoint,
            container: self.container_hint,
        })
    }

    /// Open a live byte stream against a resolved endpoint.
    ///
    /// Returns a [`ChunkStream`] of fixed-size chunks; a non-success
    /// status fails before the first chunk is produced. A mid-stream
    /// read failure terminates the sequence and is not retried here.
    pub async fn open_stream(&self, endpoint: &Url) -> Result<ChunkStream> {
        tracing::debug!("Opening stream: {}", endpoint);

        let response = self
            .client
            .get(endpoint.clone())
            .timeout(self.stream_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let upstream = response.bytes_stream().map(|result| result.map_err(Error::from));
        Ok(ChunkStream::new(rechunk(upstream, self.chunk_size)))
    }
}

/// Builder for configuring a [`StreamClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    request_timeout: Duration,
    stream_timeout: Duration,
    chunk_size: usize,
    container_hint: ContainerHint,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            stream_timeout: Duration::from_secs(DEFAULT_STREAM_TIMEOUT_SECS),
            chunk_size: DEFAULT_CHUNK_SIZE,
            container_hint: DEFAULT_CONTAINER_HINT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client.
    ///
    /// Useful for sharing connection pools or custom proxy settings;
    /// the User-Agent of a custom client is left untouched.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the timeout for playlist fetches
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the timeout for the live byte stream
    pub fn stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    /// Set the chunk size in bytes (must be non-zero)
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the container hint attached to resolved streams
    pub fn container_hint(mut self, hint: ContainerHint) -> Self {
        self.container_hint = hint;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<StreamClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().user_agent(&self.user_agent).build()?,
        };

        Ok(StreamClient {
            client,
            request_timeout: self.request_timeout,
            stream_timeout: self.stream_timeout,
            chunk_size: self.chunk_size,
            container_hint: self.container_hint,
        })
    }
}
