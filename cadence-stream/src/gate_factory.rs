// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-item gating-stream capability and the fixed-duration adapter.

use core::time::Duration;

use cadence_core::StreamItem;
use cadence_runtime::timer::Timer;
use cadence_runtime::{timer_stream, TimerStream};
use futures::Stream;

/// Produces one gating stream per forwarded item.
///
/// The returned stream's first notification, value or completion alike,
/// marks the end of the suppression window opened by that item; everything
/// it signals afterwards is ignored because the operator disposes the gate
/// immediately.
///
/// Any `FnMut(&T) -> Stream` closure is a `GateFactory`, so the selector
/// form of the operator takes plain closures:
///
/// ```rust
/// use cadence_core::StreamItem;
/// use cadence_stream::GateFactory;
/// use futures::stream;
///
/// let mut factory = |item: &u32| stream::iter(vec![StreamItem::Value(*item)]);
/// let _gate = factory.make_gate(&7);
/// ```
pub trait GateFactory<T>: Send {
    /// Item type carried by the gating stream. Its values are only ever
    /// used as a signal and are discarded.
    type Signal;

    /// The gating stream produced for one item.
    type Gate: Stream<Item = StreamItem<Self::Signal>> + Send;

    /// Creates the gating stream for a just-forwarded item.
    fn make_gate(&mut self, item: &T) -> Self::Gate;
}

impl<T, U, G, F> GateFactory<T> for F
where
    F: FnMut(&T) -> G + Send,
    G: Stream<Item = StreamItem<U>> + Send,
{
    type Signal = U;
    type Gate = G;

    fn make_gate(&mut self, item: &T) -> G {
        (self)(item)
    }
}

/// Gating-stream factory that opens a fixed-length window for every item.
///
/// This is the adapter behind the duration form of the operator: it ignores
/// the item and hands out a [`timer_stream`] which completes once after
/// `duration`. The operator already treats completion as a valid
/// window-closing signal, so no value ever needs to flow through the gate.
#[derive(Clone, Debug)]
pub struct FixedDurationGate<TM: Timer> {
    duration: Duration,
    timer: TM,
}

impl<TM: Timer> FixedDurationGate<TM> {
    /// Creates a factory opening windows of `duration` using the given timer.
    pub fn with_timer(duration: Duration, timer: TM) -> Self {
        Self { duration, timer }
    }

    /// The length of each suppression window.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl FixedDurationGate<cadence_runtime::DefaultTimer> {
    /// Creates a factory opening windows of `duration` on the default
    /// runtime's timer.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::with_timer(duration, cadence_runtime::DefaultTimer::default())
    }
}

impl<T, TM: Timer> GateFactory<T> for FixedDurationGate<TM> {
    type Signal = ();
    type Gate = TimerStream<TM>;

    fn make_gate(&mut self, _item: &T) -> Self::Gate {
        timer_stream(&self.timer, self.duration)
    }
}
