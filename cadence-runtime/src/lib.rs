// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic timer abstraction for cadence.
//!
//! The gating operator never blocks a thread: waiting for a suppression
//! window to elapse is expressed by holding a live subscription to a timer
//! stream. This crate provides:
//!
//! - the [`Timer`](timer::Timer) trait, a minimal sleep-future factory;
//! - concrete implementations behind `runtime-*` features
//!   (`runtime-tokio` by default, `runtime-smol` for smol/async-io);
//! - [`timer_stream`], the timer primitive: a stream that completes exactly
//!   once after a fixed duration and never yields an item.

pub mod impls;
pub mod timer;
mod timer_stream;

pub use timer_stream::{timer_stream, TimerStream};

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;

#[cfg(feature = "runtime-smol")]
pub use impls::smol::SmolTimer;

/// The timer selected by the enabled runtime feature.
#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = TokioTimer;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultTimer = SmolTimer;
