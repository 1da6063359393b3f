//! Error definitions
//!
//! This module provides error types for testkit-mock.

use thiserror::Error;

/// Main error type for testkit-mock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Expected arguments were declared twice on the same mocker.
    #[error("expected arguments were already declared as {expected}")]
    AlreadyConfigured {
        /// Rendering of the arguments recorded by the first declaration.
        expected: String,
    },

    /// A call did not start with the declared arguments.
    #[error("expected the first {checked} arguments to be {expected}, but they were {actual}")]
    ArgumentMismatch {
        /// How many leading arguments were compared.
        checked: usize,
        /// Rendering of the declared prefix.
        expected: String,
        /// Rendering of the same number of leading actual arguments.
        actual: String,
    },

    /// A one-shot behavior was run again after handing out its value.
    #[error("one-shot behavior already returned its value")]
    OnceExhausted,

    /// The mock was called with no behavior installed.
    #[error("mock called with no implementation installed (call #{call})")]
    NotProgrammed {
        /// Zero-based index of the failing call.
        call: usize,
    },
}

impl Error {
    /// Create an already-configured error.
    #[must_use]
    pub fn already_configured(expected: impl Into<String>) -> Self {
        Self::AlreadyConfigured {
            expected: expected.into(),
        }
    }

    /// Create an argument mismatch error.
    #[must_use]
    pub fn argument_mismatch(
        checked: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ArgumentMismatch {
            checked,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether this error came from argument validation.
    #[must_use]
    pub fn is_argument_mismatch(&self) -> bool {
        matches!(self, Self::ArgumentMismatch { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
