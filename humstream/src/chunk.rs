//! Chunked stream acquisition
//!
//! Re-publishes an unbounded HTTP response body as a sequence of
//! fixed-size [`Bytes`] chunks. Network frames arrive in arbitrary
//! sizes; they are accumulated and drained so every emitted chunk has
//! exactly `chunk_size` bytes, except the final chunk of a run which
//! may be shorter when the server closes the connection.

use crate::error::Result;
use bytes::{Bytes, BytesMut};
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A sequence of fixed-size audio byte chunks from a live stream.
///
/// Produced by [`StreamClient::open_stream`](crate::StreamClient::open_stream).
/// The sequence is infinite in practice and not restartable: once
/// exhausted or dropped, a new call to `open_stream` is required.
/// Dropping the stream closes the underlying HTTP connection.
pub struct ChunkStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
}

impl ChunkStream {
    pub(crate) fn new(stream: impl Stream<Item = Result<Bytes>> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl std::fmt::Debug for ChunkStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStream").finish_non_exhaustive()
    }
}

impl Stream for ChunkStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Accumulate upstream frames and emit fixed-size chunks.
///
/// Byte order and total byte count are preserved exactly. An upstream
/// error terminates the sequence after being yielded; the buffered
/// remainder of a cleanly terminated stream is emitted as one final
/// short chunk.
pub(crate) fn rechunk<S>(upstream: S, chunk_size: usize) -> impl Stream<Item = Result<Bytes>>
where
    S: Stream<Item = Result<Bytes>> + Send + 'static,
{
    debug_assert!(chunk_size > 0);
    async_stream::stream! {
        let mut buf = BytesMut::with_capacity(chunk_size * 2);
        futures::pin_mut!(upstream);
        while let Some(frame) = upstream.next().await {
            match frame {
                Ok(bytes) => {
                    buf.extend_from_slice(&bytes);
                    while buf.len() >= chunk_size {
                        yield Ok(buf.split_to(chunk_size).freeze());
                    }
                }
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }
        if !buf.is_empty() {
            yield Ok(buf.split().freeze());
        }
    }
}
