// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle-first gating operator for push-style streams.
//!
//! Given a stream of notifications, the operator forwards the first value
//! immediately, then suppresses every subsequent value until a per-item
//! gating stream delivers its first notification, after which the next value
//! is forwarded and a new suppression window begins.
//!
//! # Overview
//!
//! - [`ThrottleFirstExt`] - extension trait with `.throttle_first(duration)`
//!   and `.throttle_first_with(factory)`
//! - [`GateFactory`] - capability for producing one gating stream per
//!   forwarded item; implemented by any `FnMut(&T) -> Stream` closure
//! - [`FixedDurationGate`] - the duration adapter, composing a [`Timer`]
//!   into the gating-stream shape
//!
//! The gating stream's *first* notification, value or completion alike,
//! closes the window. A purely duration-based gate therefore needs to do
//! nothing but complete, which is exactly what
//! [`cadence_runtime::timer_stream`] does.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # async fn example() {
//! use cadence_core::StreamItem;
//! use cadence_stream::prelude::*;
//! use futures::stream::{self, StreamExt};
//! use std::time::Duration;
//!
//! // 2 arrives while 1's window is still open and is suppressed
//! let source = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]);
//! let mut throttled = source.throttle_first(Duration::from_millis(100));
//!
//! assert_eq!(throttled.next().await.unwrap().unwrap(), 1);
//! # }
//! ```
//!
//! [`Timer`]: cadence_runtime::timer::Timer

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod gate_factory;
mod throttle_first;

pub mod prelude;

pub use gate_factory::{FixedDurationGate, GateFactory};
pub use throttle_first::ThrottleFirstExt;
