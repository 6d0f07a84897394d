// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core vocabulary shared by the cadence crates.
//!
//! This crate defines the notification type flowing through gated streams
//! ([`StreamItem`]) and the error taxonomy of the operator ([`CadenceError`]).
//! It carries no async machinery of its own; the operators live in
//! `cadence-stream` and the timer abstraction in `cadence-runtime`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod error;
pub mod stream_item;

pub use self::error::{CadenceError, IntoCadenceError, Result};
pub use self::stream_item::StreamItem;
