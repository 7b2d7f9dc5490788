//! # humplayer - internet radio playback engine
//!
//! `humplayer` owns the playback state machine for an internet radio
//! listener: it resolves a station's playlist reference through
//! [`humstream`], opens the live byte stream, and feeds chunks to an
//! external decoder sink, exposing play/stop/toggle control and an
//! observable state to the caller.
//!
//! ## Lifecycle
//!
//! A *session* is one resolve → stream → play lifecycle tied to a
//! single [`StationHandle`], from `start` to its matching `stop` or
//! auto-stop. The engine holds at most one session at a time; starting
//! a different station tears the previous session down completely
//! before the new one begins, and a superseded session can leak
//! neither a chunk nor a state transition into its successor.
//!
//! Phases move `Idle → Resolving → Streaming` and settle back in
//! `Idle` (explicit stop, or the stream ends on its own) or `Error`
//! (any failure along the way). `Error` is a resting state: it takes a
//! new `start`/`toggle` to leave it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use humplayer::{NullSink, StationHandle, StreamPlayer};
//! use humstream::StreamClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StreamClient::new()?;
//!     let player = StreamPlayer::new(client, Arc::new(NullSink));
//!
//!     let station = StationHandle::new(
//!         "groovesalad",
//!         "Groove Salad",
//!         "https://somafm.com/groovesalad130.pls".parse()?,
//!     );
//!     player.toggle(station).await;
//!
//!     // Observe state: poll a snapshot or subscribe for changes.
//!     let mut states = player.subscribe();
//!     while states.changed().await.is_ok() {
//!         let state = states.borrow().clone();
//!         println!("playing={} title={:?}", state.is_playing(), state.current_title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! `start`/`stop`/`toggle` never return errors. Every failure is
//! caught at the engine boundary, whether it comes from HTTP, playlist
//! parsing, a mid-stream reset, or the decoder, and surfaces as the
//! `error_message` of the published [`PlayerState`].

pub mod error;
pub mod player;
pub mod sink;
pub mod state;

// Re-exports for convenience
pub use error::{Error, Result};
pub use player::StreamPlayer;
pub use sink::{AudioSink, NullSink};
pub use state::{PlaybackPhase, PlayerState, StationHandle};

pub use humstream::ContainerHint;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
