// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the cadence gating operator.
//!
//! The operator distinguishes two fatal failure channels: an error signalled
//! by the source stream travels downstream unchanged, while an error
//! signalled by a gating stream is re-reported as the operator's own
//! [`CadenceError::GateFailure`]. Both terminate the operator immediately;
//! there is no retry and no partial recovery.
//!
//! # Examples
//!
//! ```
//! use cadence_core::{CadenceError, Result};
//!
//! fn open_window() -> Result<()> {
//!     Err(CadenceError::stream_error("source not ready"))
//! }
//! ```

/// Root error type for all cadence operations.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// Stream processing encountered an error.
    ///
    /// This is the general error for failures signalled by a source stream.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// The gating stream of the currently open suppression window failed.
    ///
    /// A broken gating stream cannot be skipped: there is no well-defined
    /// next window to fall back to, so the whole operator terminates with
    /// this error.
    #[error("Gating stream failed: {source}")]
    GateFailure {
        /// The error the gating stream signalled
        #[source]
        source: Box<CadenceError>,
    },

    /// Custom error from user code.
    ///
    /// This wraps errors produced by user-provided gating-stream factories,
    /// allowing them to be propagated through the cadence error system.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CadenceError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap an error signalled by a gating stream.
    #[must_use]
    pub fn gate_failure(source: CadenceError) -> Self {
        Self::GateFailure {
            source: Box::new(source),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error originated in a gating stream.
    #[must_use]
    pub const fn is_gate_failure(&self) -> bool {
        matches!(self, Self::GateFailure { .. })
    }
}

/// Specialized `Result` type for cadence operations.
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Extension trait for converting arbitrary errors into [`CadenceError`].
///
/// This trait is automatically implemented for all types that implement
/// `std::error::Error + Send + Sync + 'static`.
pub trait IntoCadenceError {
    /// Convert this error into a [`CadenceError`].
    fn into_cadence(self) -> CadenceError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoCadenceError for E {
    fn into_cadence(self) -> CadenceError {
        CadenceError::user_error(self)
    }
}

impl Clone for CadenceError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::GateFailure { source } => Self::GateFailure {
                source: source.clone(),
            },
            // The boxed error is not clonable, so flatten it to its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
