//! # testkit-mock
//!
//! > Fluent behavior setup for function mocks
//!
//! **testkit-mock** programs what a mock callable returns or resolves, and can
//! require that each call starts with particular arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_mock::prelude::*;
//!
//! let mock = FunctionMock::<(i32, &str, bool), &str>::new();
//!
//! setup_mock(&mock)
//!     .expect_arguments((1, "a"))
//!     .unwrap()
//!     .return_value_once("ok");
//!
//! assert_eq!(mock.call((1, "a", true)).unwrap(), "ok");
//! ```
//!
//! ## Features
//!
//! - **Argument checking** - Require a prefix of each call's arguments
//! - **One-shot and persistent behavior** - Return once or every time
//! - **Async mocks** - Resolve already-completed futures
//! - **Any mock type** - Implement [`mock::MockFn`] to plug in your own

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mock;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_mock::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mock::{
        setup_mock, ArgumentCheckingMocker, ArgumentPrefix, FunctionMock, MockFn, Resolved,
    };
}

// Re-exports
pub use error::{Error, Result};
pub use mock::setup_mock;
