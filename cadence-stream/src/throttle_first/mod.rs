// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `throttle_first` operator for streams.
//!
//! The operator forwards the first value, then drops every subsequent value
//! until the current gating stream delivers its first notification. The next
//! value after that is forwarded and a new window begins.
//!
//! Semantics:
//! - When a value arrives and no window is open:
//!   - Forward the value immediately
//!   - Subscribe to a new gating stream for that value
//!   - Drop subsequent values until the gate signals
//! - When the gate delivers its first notification (value or completion):
//!   - Dispose the gate; the next value is eligible again
//! - When the source completes during an open window:
//!   - Completion is withheld until that window closes
//! - An error from either stream terminates the operator immediately.

mod implementation;
mod state;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use core::time::Duration;

use cadence_core::StreamItem;
use futures::Stream;

use crate::gate_factory::GateFactory;
use implementation::ThrottleFirst;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use crate::gate_factory::FixedDurationGate;

/// Extension trait providing the `throttle_first` operator for streams.
///
/// Any stream of `StreamItem<T>` gains the duration form
/// ([`throttle_first`](Self::throttle_first)) and the selector form
/// ([`throttle_first_with`](Self::throttle_first_with)); the duration form
/// is a thin adapter composing [`FixedDurationGate`] over the default
/// runtime's timer.
pub trait ThrottleFirstExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forwards the first value, then drops values for `duration`.
    ///
    /// After the duration elapses the next value is forwarded and a new
    /// window begins. A zero duration suppresses nothing.
    ///
    /// If the source completes while a window is still open, downstream
    /// completion is withheld until the window closes.
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn throttle_first(
        self,
        duration: Duration,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send + 'static,
        T: Send + 'static;

    /// Forwards the first value, then drops values until the gating stream
    /// produced by `factory` for that value delivers its first notification.
    ///
    /// The gate's first notification, value or completion alike, closes the
    /// window; the gate is disposed at that point, so anything it signals
    /// later is never observed. An error on the gate terminates the whole
    /// operator with [`CadenceError::GateFailure`].
    ///
    /// [`CadenceError::GateFailure`]: cadence_core::CadenceError
    fn throttle_first_with<F>(self, factory: F) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        F: GateFactory<T> + Unpin + 'static,
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> ThrottleFirstExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
{
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn throttle_first(self, duration: Duration) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        self.throttle_first_with(FixedDurationGate::new(duration))
    }

    fn throttle_first_with<F>(self, factory: F) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        F: GateFactory<T> + Unpin + 'static,
        Self: Send + 'static,
        T: Send + 'static,
    {
        ThrottleFirst::new(self, factory)
    }
}
