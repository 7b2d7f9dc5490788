//! Data structures shared by the resolver and the chunk source

use serde::Serialize;
use url::Url;

/// Audio container family a decoder should assume for incoming bytes.
///
/// The hint is a static configuration point on the client
/// ([`ClientBuilder::container_hint`](crate::ClientBuilder::container_hint)),
/// never sniffed from the playlist or the stream itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerHint {
    Mp3,
    Aac,
    Ogg,
    Unknown,
}

impl ContainerHint {
    /// MIME type a decoder or HTTP layer would associate with this hint
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Aac => "audio/aac",
            Self::Ogg => "audio/ogg",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContainerHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::Ogg => "ogg",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A playlist reference resolved to a live stream endpoint.
///
/// Produced by [`StreamClient::resolve_playlist`](crate::StreamClient::resolve_playlist),
/// consumed once by [`StreamClient::open_stream`](crate::StreamClient::open_stream).
/// Not persisted; it lives only for the session that resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStream {
    /// The live audio byte-stream endpoint
    pub endpoint: Url,
    /// Container family the decoder should assume
    pub container: ContainerHint,
}
