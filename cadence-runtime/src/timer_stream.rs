// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;

use cadence_core::StreamItem;
use futures::Stream;
use pin_project::pin_project;

use crate::timer::Timer;

/// Creates a stream that completes exactly once after `duration`, yielding
/// no item beforehand.
///
/// This is the default gating-signal provider: end-of-stream is the window
/// signal, so a purely duration-based gate needs no value type of its own.
///
/// A zero duration produces a stream that is already complete at the first
/// poll.
pub fn timer_stream<TM: Timer>(timer: &TM, duration: Duration) -> TimerStream<TM> {
    TimerStream {
        sleep: Some(timer.sleep_future(duration)),
    }
}

/// Stream returned by [`timer_stream`].
#[pin_project]
pub struct TimerStream<TM: Timer> {
    #[pin]
    sleep: Option<TM::Sleep>,
}

impl<TM: Timer> Stream for TimerStream<TM> {
    type Item = StreamItem<()>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        match this.sleep.as_mut().as_pin_mut() {
            // Already completed; stay fused.
            None => Poll::Ready(None),
            Some(sleep) => match sleep.poll(cx) {
                Poll::Ready(()) => {
                    this.sleep.set(None);
                    Poll::Ready(None)
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}
