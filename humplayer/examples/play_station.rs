//! Play a station and count the bytes that reach the decoder seam.
//!
//! Usage: play_station <playlist-url> [title]
//!
//! Example:
//!   cargo run --example play_station -- https://somafm.com/groovesalad130.pls "Groove Salad"

use anyhow::Result;
use bytes::Bytes;
use humplayer::{AudioSink, ContainerHint, StationHandle, StreamPlayer};
use humstream::StreamClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stands in for a real decoder: counts bytes and logs progress.
#[derive(Default)]
struct CountingSink {
    total: AtomicU64,
}

#[async_trait::async_trait]
impl AudioSink for CountingSink {
    async fn begin(&self, hint: ContainerHint) -> humplayer::Result<()> {
        println!("decoder opened, expecting {hint}");
        Ok(())
    }

    async fn write(&self, chunk: Bytes) -> humplayer::Result<()> {
        let total = self.total.fetch_add(chunk.len() as u64, Ordering::Relaxed) + chunk.len() as u64;
        if total % (256 * 1024) < chunk.len() as u64 {
            println!("received {} KiB", total / 1024);
        }
        Ok(())
    }

    async fn finish(&self) {
        println!("decoder released after {} bytes", self.total.load(Ordering::Relaxed));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let playlist_url: url::Url = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: play_station <playlist-url> [title]"))?
        .parse()?;
    let title = args.next().unwrap_or_else(|| "Unnamed Station".to_string());

    let client = StreamClient::new()?;
    let player = StreamPlayer::new(client, Arc::new(CountingSink::default()));
    let mut states = player.subscribe();

    player
        .toggle(StationHandle::new("cli", title, playlist_url))
        .await;

    // Follow the published state until playback settles.
    loop {
        let state = states.borrow_and_update().clone();
        println!(
            "state: {:?} playing={} title={:?} error={:?}",
            state.phase,
            state.is_playing(),
            state.current_title,
            state.error_message
        );
        match state.phase {
            humplayer::PlaybackPhase::Idle | humplayer::PlaybackPhase::Error => break,
            _ => {}
        }
        if states.changed().await.is_err() {
            break;
        }
    }

    Ok(())
}
