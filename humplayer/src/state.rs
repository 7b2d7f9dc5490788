//! Station handles and the published playback state

use serde::Serialize;
use url::Url;

/// One station as handed to the engine per play request.
///
/// Supplied by the caller at toggle-time; the engine holds at most one
/// active handle at a time and the handle dies when its session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationHandle {
    /// Opaque comparable station identity
    pub id: String,
    /// Human-readable station title
    pub title: String,
    /// The station's published playlist reference
    pub playlist_url: Url,
}

impl StationHandle {
    pub fn new(id: impl Into<String>, title: impl Into<String>, playlist_url: Url) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            playlist_url,
        }
    }
}

/// Where the engine currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackPhase {
    /// No session; resting state after `stop` or auto-stop
    Idle,
    /// Fetching and parsing the station's playlist
    Resolving,
    /// Live stream open, chunks flowing to the decoder sink
    Streaming,
    /// Last session failed; resting state until the next `start`
    Error,
}

/// Observable playback state, readable at any time.
///
/// Every published value upholds the engine invariants:
/// [`is_playing`](Self::is_playing) is true iff the phase is
/// `Streaming`, a title is present iff a station is active, and an
/// error message is present iff the phase is `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub phase: PlaybackPhase,
    /// Identity of the active station, absent when no session is live
    pub station_id: Option<String>,
    /// Title of the active station, absent when no session is live
    pub current_title: Option<String>,
    /// Human-readable failure reason, present only in the error phase
    pub error_message: Option<String>,
}

impl PlayerState {
    pub(crate) fn idle() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            station_id: None,
            current_title: None,
            error_message: None,
        }
    }

    pub(crate) fn resolving(station: &StationHandle) -> Self {
        Self {
            phase: PlaybackPhase::Resolving,
            station_id: Some(station.id.clone()),
            current_title: Some(station.title.clone()),
            error_message: None,
        }
    }

    pub(crate) fn streaming(station: &StationHandle) -> Self {
        Self {
            phase: PlaybackPhase::Streaming,
            station_id: Some(station.id.clone()),
            current_title: Some(station.title.clone()),
            error_message: None,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            phase: PlaybackPhase::Error,
            station_id: None,
            current_title: None,
            error_message: Some(message.into()),
        }
    }

    /// True iff the engine is feeding chunks to the decoder sink
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Streaming
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::idle()
    }
}
