// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the cadence workspace.
//!
//! This crate provides channels, assertion helpers and fixture data for
//! testing the gating operator. It is meant for development and testing
//! only, not for production code.
//!
//! # Key pieces
//!
//! - [`test_channel`] / [`test_channel_with_errors`] - imperative stream
//!   sources for driving operators from test code
//! - [`helpers`] - stream assertions (`assert_no_element_emitted`,
//!   `unwrap_stream`)
//! - [`test_data`] - `TestData` fixtures (`person_alice`, `animal_dog`, ...)
//! - [`ErrorInjectingStream`] - wraps a stream and injects an error at a
//!   chosen position, for error-propagation tests

pub mod animal;
pub mod error_injection;
pub mod helpers;
pub mod person;
pub mod test_data;

use cadence_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, unwrap_stream};
pub use test_data::TestData;

/// Creates a test channel that automatically wraps values in
/// `StreamItem::Value`.
///
/// Dropping the sender completes the stream, which is how tests express
/// source completion.
///
/// # Example
///
/// ```rust
/// use cadence_test_utils::test_channel;
/// use cadence_test_utils::test_data::person_alice;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(person_alice()).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap();
/// assert_eq!(item, person_alice());
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` directly, so tests
/// can push both values and errors through the stream.
///
/// # Example
///
/// ```rust
/// use cadence_test_utils::test_channel_with_errors;
/// use cadence_core::{CadenceError, StreamItem};
///
/// # async fn example() {
/// let (tx, _stream) = test_channel_with_errors::<i32>();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(CadenceError::stream_error("test error")))
///     .unwrap();
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
