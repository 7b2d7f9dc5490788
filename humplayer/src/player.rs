//! Playback engine state machine
//!
//! One session = one resolve → stream → play lifecycle tied to a
//! single station handle. Sessions are numbered; the number is checked
//! inside the same lock that publishes state, so work belonging to a
//! cancelled session can neither publish a late transition nor deliver
//! a late chunk to the sink of a newer session.

use crate::error::Error;
use crate::sink::AudioSink;
use crate::state::{PlaybackPhase, PlayerState, StationHandle};
use futures::StreamExt;
use humstream::StreamClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Session number meaning "no session is live".
const NO_SESSION: u64 = 0;

/// Internet radio playback engine.
///
/// Orchestrates playlist resolution, chunked stream acquisition and
/// the decoder sink, and publishes its observable state through a
/// watch channel. `start`/`stop`/`toggle` always complete; failures
/// are reported only through [`PlayerState`].
///
/// # Example
///
/// ```no_run
/// use humplayer::{NullSink, StationHandle, StreamPlayer};
/// use humstream::StreamClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = StreamClient::new()?;
///     let player = StreamPlayer::new(client, Arc::new(NullSink));
///
///     let station = StationHandle::new(
///         "groovesalad",
///         "Groove Salad",
///         "https://somafm.com/groovesalad130.pls".parse()?,
///     );
///
///     player.toggle(station.clone()).await; // starts
///     // ... later
///     player.toggle(station).await; // stops
///
///     assert!(!player.state().is_playing());
///     Ok(())
/// }
/// ```
pub struct StreamPlayer {
    inner: Arc<PlayerInner>,
}

struct PlayerInner {
    client: StreamClient,
    sink: Arc<dyn AudioSink>,
    state_tx: watch::Sender<PlayerState>,
    /// Serializes start/stop/toggle; owns the live session.
    control: tokio::sync::Mutex<Option<Session>>,
    /// Number of the session allowed to publish state and deliver
    /// chunks. Checked under this lock together with every publish.
    current: std::sync::Mutex<u64>,
    next_session: AtomicU64,
}

struct Session {
    id: u64,
    station: StationHandle,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl StreamPlayer {
    /// Create an engine around a configured client and a decoder sink
    pub fn new(client: StreamClient, sink: Arc<dyn AudioSink>) -> Self {
        let (state_tx, _) = watch::channel(PlayerState::idle());
        Self {
            inner: Arc::new(PlayerInner {
                client,
                sink,
                state_tx,
                control: tokio::sync::Mutex::new(None),
                current: std::sync::Mutex::new(NO_SESSION),
                next_session: AtomicU64::new(1),
            }),
        }
    }

    /// Snapshot of the published state
    pub fn state(&self) -> PlayerState {
        self.inner.state_tx.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<PlayerState> {
        self.inner.state_tx.subscribe()
    }

    /// Toggle playback for a station.
    ///
    /// If `station` is the one currently resolving or streaming, this
    /// stops it. Anything else starts `station`, tearing down whatever
    /// session was live first.
    pub async fn toggle(&self, station: StationHandle) {
        let mut control = self.inner.control.lock().await;
        let phase = self.inner.state_tx.borrow().phase;
        let same_station = control
            .as_ref()
            .map(|s| s.station.id == station.id)
            .unwrap_or(false);

        if same_station && matches!(phase, PlaybackPhase::Resolving | PlaybackPhase::Streaming) {
            self.stop_locked(&mut control).await;
        } else {
            self.start_locked(&mut control, station).await;
        }
    }

    /// Start playing a station, replacing any live session
    pub async fn start(&self, station: StationHandle) {
        let mut control = self.inner.control.lock().await;
        self.start_locked(&mut control, station).await;
    }

    /// Stop playback and release the sink. Idempotent.
    pub async fn stop(&self) {
        let mut control = self.inner.control.lock().await;
        self.stop_locked(&mut control).await;
    }

    async fn start_locked(&self, control: &mut Option<Session>, station: StationHandle) {
        self.teardown(control).await;

        let inner = self.inner.clone();
        let id = inner.next_session.fetch_add(1, Ordering::SeqCst);
        *inner.current.lock().expect("state lock poisoned") = id;
        inner.state_tx.send_replace(PlayerState::resolving(&station));

        info!("Starting session {} for station '{}'", id, station.title);

        let token = CancellationToken::new();
        let task = tokio::spawn(run_session(
            inner.clone(),
            id,
            station.clone(),
            token.clone(),
        ));
        *control = Some(Session {
            id,
            station,
            token,
            task,
        });
    }

    async fn stop_locked(&self, control: &mut Option<Session>) {
        self.teardown(control).await;
        self.inner.state_tx.send_replace(PlayerState::idle());
    }

    /// Cancel and await the live session, if any. Bounded: every await
    /// inside the session task is raced against its token.
    async fn teardown(&self, control: &mut Option<Session>) {
        if let Some(session) = control.take() {
            debug!("Tearing down session {}", session.id);
            session.token.cancel();
            {
                let mut current = self.inner.current.lock().expect("state lock poisoned");
                if *current == session.id {
                    *current = NO_SESSION;
                }
            }
            if let Err(e) = session.task.await {
                warn!("Session {} task join failed: {}", session.id, e);
            }
        }
    }
}

impl Drop for StreamPlayer {
    fn drop(&mut self) {
        if let Ok(mut control) = self.inner.control.try_lock() {
            if let Some(session) = control.take() {
                session.token.cancel();
                session.task.abort();
            }
        }
    }
}

impl PlayerInner {
    fn is_current(&self, session: u64) -> bool {
        *self.current.lock().expect("state lock poisoned") == session
    }

    /// Publish `state` unless `session` has been superseded
    fn publish(&self, session: u64, state: PlayerState) -> bool {
        let current = self.current.lock().expect("state lock poisoned");
        if *current != session {
            return false;
        }
        self.state_tx.send_replace(state);
        true
    }

    /// End `session` in the error resting state
    fn fail(&self, session: u64, err: &Error) {
        warn!("Session {} failed: {}", session, err);
        let mut current = self.current.lock().expect("state lock poisoned");
        if *current != session {
            return;
        }
        *current = NO_SESSION;
        self.state_tx.send_replace(PlayerState::error(err.to_string()));
    }

    /// End `session` back in idle; the auto-stop path for streams that
    /// terminate on their own
    fn auto_stop(&self, session: u64) {
        info!("Session {} reached end of stream", session);
        let mut current = self.current.lock().expect("state lock poisoned");
        if *current != session {
            return;
        }
        *current = NO_SESSION;
        self.state_tx.send_replace(PlayerState::idle());
    }
}

/// One playback session: resolve, open, feed the sink until the
/// stream ends, fails, or the session is cancelled.
async fn run_session(
    inner: Arc<PlayerInner>,
    id: u64,
    station: StationHandle,
    token: CancellationToken,
) {
    let resolved = tokio::select! {
        _ = token.cancelled() => return,
        r = inner.client.resolve_playlist(&station.playlist_url) => r,
    };
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => return inner.fail(id, &e.into()),
    };

    let stream = tokio::select! {
        _ = token.cancelled() => return,
        r = inner.client.open_stream(&resolved.endpoint) => r,
    };
    let mut stream = match stream {
        Ok(stream) => stream,
        Err(e) => return inner.fail(id, &e.into()),
    };

    if let Err(e) = inner.sink.begin(resolved.container).await {
        return inner.fail(id, &e);
    }

    if !inner.publish(id, PlayerState::streaming(&station)) {
        // Superseded between open and publish; release the sink and go.
        inner.sink.finish().await;
        return;
    }
    info!(
        "Session {} streaming '{}' from {}",
        id, station.title, resolved.endpoint
    );

    loop {
        let item = tokio::select! {
            _ = token.cancelled() => break,
            item = stream.next() => item,
        };
        match item {
            Some(Ok(chunk)) => {
                if !inner.is_current(id) {
                    break;
                }
                let written = tokio::select! {
                    _ = token.cancelled() => break,
                    w = inner.sink.write(chunk) => w,
                };
                if let Err(e) = written {
                    inner.sink.finish().await;
                    return inner.fail(id, &e);
                }
            }
            Some(Err(e)) => {
                inner.sink.finish().await;
                return inner.fail(id, &e.into());
            }
            None => {
                inner.sink.finish().await;
                return inner.auto_stop(id);
            }
        }
    }

    // Cancelled mid-stream; the connection closes when the stream drops.
    inner.sink.finish().await;
}
