// Allow must_use_candidate since mock methods often have useful side effects
#![allow(clippy::must_use_candidate)]

//! Programmable function mocks.
//!
//! This module provides the [`MockFn`] capability trait, which is everything
//! [`setup_mock`](super::setup_mock) needs from a mock, and [`FunctionMock`],
//! a mock callable that implements it and records its calls.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use testkit_mock::mock::{FunctionMock, MockFn};
//!
//! let mock = FunctionMock::<(i32,), i32>::new();
//! mock.mock_implementation(Arc::new(|(x,): &(i32,)| Ok(x * 2)));
//!
//! assert_eq!(mock.call((5,)).unwrap(), 10);
//! assert!(mock.was_called_with(&(5,)));
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{Error, Result};

/// A behavior installed on a mock: receives the call's arguments and produces
/// its result.
pub type Implementation<A, R> = Arc<dyn Fn(&A) -> Result<R> + Send + Sync>;

/// The capabilities a mock callable must offer to be configured.
///
/// `A` is the mock's argument tuple and `R` its return type.
pub trait MockFn<A, R> {
    /// Install `implementation` for every following call, replacing any
    /// previously installed persistent implementation.
    fn mock_implementation(&self, implementation: Implementation<A, R>);

    /// Install `implementation` for a single following call.
    ///
    /// One-shot implementations take precedence over the persistent one and
    /// are used in the order they were installed.
    fn mock_implementation_once(&self, implementation: Implementation<A, R>);
}

/// A record of a single mock call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall<A> {
    /// The arguments passed to the call.
    pub args: A,
    /// Zero-based position of the call in the mock's history.
    pub index: usize,
}

struct MockState<A, R> {
    calls: Vec<MockCall<A>>,
    implementation: Option<Implementation<A, R>>,
    once: VecDeque<Implementation<A, R>>,
}

impl<A, R> Default for MockState<A, R> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            implementation: None,
            once: VecDeque::new(),
        }
    }
}

/// A mock callable with programmable behavior and call recording.
///
/// Clones share state: every clone sees the same calls and the same
/// behavior, so one handle can go to the code under test while the test
/// keeps another.
///
/// # Type Parameters
///
/// - `A` - The argument tuple (must be Clone for recording)
/// - `R` - The return type
pub struct FunctionMock<A, R> {
    name: Arc<str>,
    state: Arc<Mutex<MockState<A, R>>>,
}

impl<A, R> FunctionMock<A, R> {
    /// Create a mock with no behavior installed.
    pub fn new() -> Self {
        Self::named("mock")
    }

    /// Create a mock whose name shows up in log events.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of times the mock was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Check if the mock was called at least once.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Check if the mock was called exactly N times.
    #[must_use]
    pub fn was_called_times(&self, n: usize) -> bool {
        self.call_count() == n
    }

    /// Forget recorded calls but keep the installed behavior.
    pub fn clear(&self) {
        self.state.lock().calls.clear();
    }

    /// Forget recorded calls and every installed behavior.
    pub fn reset(&self) {
        *self.state.lock() = MockState::default();
    }
}

impl<A: Clone, R> FunctionMock<A, R> {
    /// Call the mock.
    ///
    /// The call is recorded first. The oldest pending one-shot implementation
    /// answers it if there is one, otherwise the persistent implementation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotProgrammed`] when no implementation is installed,
    /// or whatever error the answering implementation returns.
    pub fn call(&self, args: A) -> Result<R> {
        let (index, implementation) = {
            let mut state = self.state.lock();
            let index = state.calls.len();
            state.calls.push(MockCall {
                args: args.clone(),
                index,
            });
            let implementation = match state.once.pop_front() {
                Some(once) => Some(once),
                None => state.implementation.clone(),
            };
            (index, implementation)
        };

        trace!(mock = %self.name, call = index, "mock invoked");

        match implementation {
            Some(implementation) => implementation(&args),
            None => Err(Error::NotProgrammed { call: index }),
        }
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<MockCall<A>> {
        self.state.lock().calls.clone()
    }

    /// Get the Nth call record (0-indexed).
    pub fn nth_call(&self, n: usize) -> Option<MockCall<A>> {
        self.state.lock().calls.get(n).cloned()
    }

    /// Get the most recent call record.
    pub fn last_call(&self) -> Option<MockCall<A>> {
        self.state.lock().calls.last().cloned()
    }

    /// Check if the mock was ever called with exactly these arguments.
    pub fn was_called_with(&self, expected: &A) -> bool
    where
        A: PartialEq,
    {
        self.state.lock().calls.iter().any(|c| &c.args == expected)
    }
}

impl<A, R> MockFn<A, R> for FunctionMock<A, R> {
    fn mock_implementation(&self, implementation: Implementation<A, R>) {
        self.state.lock().implementation = Some(implementation);
    }

    fn mock_implementation_once(&self, implementation: Implementation<A, R>) {
        self.state.lock().once.push_back(implementation);
    }
}

impl<A, R> Default for FunctionMock<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Clone for FunctionMock<A, R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: Debug, R> Debug for FunctionMock<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FunctionMock")
            .field("name", &self.name)
            .field("call_count", &state.calls.len())
            .field("calls", &state.calls)
            .field("pending_once", &state.once.len())
            .field("programmed", &state.implementation.is_some())
            .finish()
    }
}
