// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::time::Duration;

/// A factory for sleep futures, abstracting over the async runtime.
///
/// Implementations must be cheap to clone; the operator clones its timer
/// once per suppression window.
pub trait Timer: Clone + Send + Sync + Debug + Default + 'static {
    type Sleep: Future<Output = ()> + Send;

    /// Creates a future that resolves after the specified duration.
    ///
    /// Use this in poll-based contexts where the future is stored and polled.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;
}
