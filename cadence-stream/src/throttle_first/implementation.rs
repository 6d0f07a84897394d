// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use cadence_core::{CadenceError, StreamItem};
use futures::Stream;

use crate::gate_factory::GateFactory;
use crate::throttle_first::state::{CompletionDecision, ItemDecision, Machine, WindowDecision};

/// Coordinator binding the state machine to the two live subscriptions.
///
/// The source and the current gate are each held as an `Option<Pin<Box<_>>>`
/// so either can be disposed the moment the state machine decides it is no
/// longer needed; `Option::take` makes every disposal happen at most once.
/// Dropping the whole value disposes whatever is still live, which is how
/// consumer-driven cancellation reaches both subscriptions.
pub(crate) struct ThrottleFirst<T, S, F>
where
    F: GateFactory<T>,
{
    source: Option<Pin<Box<S>>>,
    factory: F,
    gate: Option<Pin<Box<F::Gate>>>,
    machine: Machine,
    _item: PhantomData<fn() -> T>,
}

impl<T, S, F> ThrottleFirst<T, S, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: GateFactory<T>,
{
    pub(crate) fn new(source: S, factory: F) -> Self {
        Self {
            source: Some(Box::pin(source)),
            factory,
            gate: None,
            machine: Machine::new(),
            _item: PhantomData,
        }
    }
}

impl<T, S, F> Stream for ThrottleFirst<T, S, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: GateFactory<T> + Unpin,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        // Exactly one terminal notification ever reaches downstream; after
        // it, every poll is a fused no-op.
        if this.machine.is_terminated() {
            return Poll::Ready(None);
        }

        loop {
            // An elapsed window must reopen before the next source item is
            // considered, so the gate is polled first on every pass.
            if let Some(gate) = this.gate.as_mut() {
                match gate.as_mut().poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(_))) | Poll::Ready(None) => {
                        // The gate's first notification, value or completion
                        // alike, means "window over". Dispose it right away
                        // so nothing it signals later can be observed.
                        this.gate = None;
                        match this.machine.on_window_signal() {
                            WindowDecision::Reopen => {
                                #[cfg(feature = "tracing")]
                                tracing::trace!("gating window closed; operator idle");
                            }
                            WindowDecision::Finish => {
                                #[cfg(feature = "tracing")]
                                tracing::trace!("gating window closed after source completion");
                                this.source = None;
                                return Poll::Ready(None);
                            }
                        }
                    }
                    Poll::Ready(Some(StreamItem::Error(error))) => {
                        this.machine.on_window_error();
                        this.gate = None;
                        this.source = None;
                        return Poll::Ready(Some(StreamItem::Error(CadenceError::gate_failure(
                            error,
                        ))));
                    }
                    Poll::Pending => {}
                }
            }

            if this.machine.is_source_done() {
                // Source exhausted; only the open window can still make
                // progress, and its waker is registered above.
                return Poll::Pending;
            }

            let Some(source) = this.source.as_mut() else {
                return Poll::Pending;
            };

            match source.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(item))) => {
                    match this.machine.on_source_item() {
                        ItemDecision::Emit => {
                            // Forward-then-open is one atomic step: the gate
                            // subscription exists before this call returns.
                            this.gate = Some(Box::pin(this.factory.make_gate(&item)));
                            #[cfg(feature = "tracing")]
                            tracing::trace!("item forwarded; gating window opened");
                            return Poll::Ready(Some(StreamItem::Value(item)));
                        }
                        ItemDecision::Ignore => continue,
                    }
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    this.machine.on_source_error();
                    this.gate = None;
                    this.source = None;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    this.source = None;
                    match this.machine.on_source_complete() {
                        CompletionDecision::Finish => return Poll::Ready(None),
                        CompletionDecision::Defer => return Poll::Pending,
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
