// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in streams.
//!
//! This module provides a stream wrapper that injects `StreamItem::Error`
//! values into streams for testing error propagation in operators.

use cadence_core::{CadenceError, StreamItem};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a specified position.
///
/// The wrapper takes a stream of plain values, wraps them in
/// `StreamItem::Value`, and emits a `StreamItem::Error` at the given
/// (0-indexed) position instead of pulling from the inner stream.
///
/// # Examples
///
/// ```rust
/// use cadence_core::StreamItem;
/// use cadence_test_utils::ErrorInjectingStream;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let base = stream::iter(vec![1, 2]);
/// let mut with_error = ErrorInjectingStream::new(base, 1);
///
/// assert!(with_error.next().await.unwrap().is_value());
/// assert!(with_error.next().await.unwrap().is_error());
/// assert!(with_error.next().await.unwrap().is_value());
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a new error-injecting stream wrapper.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Poll::Ready(Some(StreamItem::Error(CadenceError::stream_error(
                    "Injected test error",
                ))));
            }
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{stream, StreamExt};

    #[tokio::test]
    async fn test_error_injection_at_position() {
        let base = stream::iter(vec![1, 2, 3]);
        let mut with_error = ErrorInjectingStream::new(base, 1);

        assert!(matches!(
            with_error.next().await.unwrap(),
            StreamItem::Value(1)
        ));
        assert!(with_error.next().await.unwrap().is_error());
        assert!(matches!(
            with_error.next().await.unwrap(),
            StreamItem::Value(2)
        ));
    }

    #[tokio::test]
    async fn test_error_injection_at_start() {
        let base = stream::iter(vec![1]);
        let mut with_error = ErrorInjectingStream::new(base, 0);

        assert!(with_error.next().await.unwrap().is_error());
        assert!(with_error.next().await.unwrap().is_value());
        assert!(with_error.next().await.is_none());
    }
}
