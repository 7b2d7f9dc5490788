//! Decoder sink seam
//!
//! The engine does not interpret audio bytes; it hands them to an
//! external decoder/playback collaborator behind this trait.

use crate::error::Result;
use bytes::Bytes;
use humstream::ContainerHint;

/// External decoder/playback sink.
///
/// The engine drives exactly one begin/write.../finish cycle per
/// playback session: [`begin`](Self::begin) opens the sink with a
/// container hint, each [`write`](Self::write) transfers ownership of
/// one chunk in arrival order, and [`finish`](Self::finish) releases
/// the sink. `finish` is called exactly once for every successful
/// `begin`, on every exit path including cancellation.
///
/// `begin` and `write` failures are treated as opaque decoder errors
/// and drive the engine into its error state. A `write` future may be
/// dropped mid-flight when the session is torn down; implementations
/// must stay consistent across a cancelled write.
#[async_trait::async_trait]
pub trait AudioSink: Send + Sync {
    async fn begin(&self, hint: ContainerHint) -> Result<()>;
    async fn write(&self, chunk: Bytes) -> Result<()>;
    async fn finish(&self);
}

/// A sink that discards everything. Useful for wiring tests and for
/// exercising the engine without an actual decoder.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait::async_trait]
impl AudioSink for NullSink {
    async fn begin(&self, hint: ContainerHint) -> Result<()> {
        tracing::debug!(
            "NullSink opened with container hint {} ({})",
            hint,
            hint.mime_type()
        );
        Ok(())
    }

    async fn write(&self, _chunk: Bytes) -> Result<()> {
        Ok(())
    }

    async fn finish(&self) {}
}
