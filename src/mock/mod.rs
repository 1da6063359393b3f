//! Utilities for programming function mocks.
//!
//! This module provides:
//!
//! - [`setup_mock`] - Fluent behavior setup with argument checking
//! - [`FunctionMock`] - A mock callable that records calls
//! - [`MockFn`] - What a mock must support to be set up
//! - [`ArgumentPrefix`] - Leading arguments a call must start with
//! - [`Resolved`] - Already-completed futures for async mocks
//!
//! # Returning Values
//!
//! ```rust
//! use testkit_mock::mock::{setup_mock, FunctionMock};
//!
//! let mock = FunctionMock::<(i32, i32), i32>::new();
//! setup_mock(&mock).return_value(0).return_value_once(42);
//!
//! assert_eq!(mock.call((1, 2)).unwrap(), 42);
//! assert_eq!(mock.call((1, 2)).unwrap(), 0);
//! ```
//!
//! # Resolving Values
//!
//! ```rust
//! use futures::future::BoxFuture;
//! use futures::FutureExt;
//! use testkit_mock::mock::{setup_mock, FunctionMock};
//!
//! let fetch = FunctionMock::<(String,), BoxFuture<'static, u64>>::new();
//! setup_mock(&fetch)
//!     .expect_arguments(("users".to_string(),))
//!     .unwrap()
//!     .resolve_value_once(3);
//!
//! let pending = fetch.call(("users".to_string(),)).unwrap();
//! assert_eq!(pending.now_or_never(), Some(3));
//! assert!(fetch.call(("posts".to_string(),)).is_err());
//! ```

mod arguments;
mod function;
mod resolve;
mod setup;

pub use arguments::{render_arguments, ArgumentPrefix};
pub use function::{FunctionMock, Implementation, MockCall, MockFn};
pub use resolve::Resolved;
pub use setup::{setup_mock, ArgumentCheckingMocker};
