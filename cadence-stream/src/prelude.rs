// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```ignore
//! use cadence_stream::prelude::*;
//!
//! let gated = stream.throttle_first(Duration::from_millis(200));
//! ```

pub use crate::gate_factory::{FixedDurationGate, GateFactory};
pub use crate::throttle_first::ThrottleFirstExt;
