// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::{CadenceError, StreamItem};
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that the stream emits nothing within `timeout_ms`.
///
/// With tokio's paused clock, pass `0` to avoid auto-advancing time.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Awaits the next notification and unwraps it to a value.
///
/// # Errors
///
/// Returns the stream's error if the next notification is an error, and a
/// generic stream error if the stream ended instead.
pub async fn unwrap_stream<S, T>(stream: &mut S) -> Result<T, CadenceError>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match stream.next().await {
        Some(StreamItem::Value(v)) => Ok(v),
        Some(StreamItem::Error(e)) => Err(e),
        None => Err(CadenceError::stream_error("Stream ended")),
    }
}
