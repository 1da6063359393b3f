//! Already-completed futures for async mocks.
//!
//! A mock of an `async fn` returns some future type. [`Resolved`] names the
//! value that future yields and builds one that is ready on the first poll.

use std::future::{self, Future};
use std::pin::Pin;

/// A future type that can be built already completed with a given value.
///
/// # Example
///
/// ```rust
/// use std::pin::Pin;
/// use std::future::Future;
/// use testkit_mock::mock::Resolved;
///
/// type Reply = Pin<Box<dyn Future<Output = u32> + Send>>;
///
/// let reply = Reply::resolved(7);
/// # let _ = reply;
/// ```
pub trait Resolved: Sized {
    /// The value the future completes with.
    type Output;

    /// Build a future that is immediately ready with `value`.
    fn resolved(value: Self::Output) -> Self;
}

impl<T> Resolved for future::Ready<T> {
    type Output = T;

    fn resolved(value: T) -> Self {
        future::ready(value)
    }
}

impl<T: Send + 'static> Resolved for Pin<Box<dyn Future<Output = T> + Send>> {
    type Output = T;

    fn resolved(value: T) -> Self {
        Box::pin(future::ready(value))
    }
}

impl<T: 'static> Resolved for Pin<Box<dyn Future<Output = T>>> {
    type Output = T;

    fn resolved(value: T) -> Self {
        Box::pin(future::ready(value))
    }
}

#[cfg(feature = "futures")]
impl<T> Resolved for futures::future::Ready<T> {
    type Output = T;

    fn resolved(value: T) -> Self {
        futures::future::ready(value)
    }
}
