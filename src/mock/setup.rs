// Programming methods return the mocker for chaining; dropping it is fine.
#![allow(clippy::must_use_candidate)]

//! Fluent behavior setup with argument-prefix checking.
//!
//! [`setup_mock`] wraps a mock in an [`ArgumentCheckingMocker`], which
//! programs what the mock returns or resolves and can require that calls
//! start with particular arguments.
//!
//! # Example
//!
//! ```rust
//! use testkit_mock::mock::{setup_mock, FunctionMock};
//! use testkit_mock::Error;
//!
//! let lookup = FunctionMock::<(u32, &str, bool), &str>::new();
//!
//! setup_mock(&lookup)
//!     .expect_arguments((1, "a"))
//!     .unwrap()
//!     .return_value_once("ok")
//!     .return_value_once("again");
//!
//! assert_eq!(lookup.call((1, "a", true)).unwrap(), "ok");
//!
//! let err = lookup.call((2, "a", false)).unwrap_err();
//! assert!(matches!(err, Error::ArgumentMismatch { checked: 2, .. }));
//! ```

use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};

use super::arguments::ArgumentPrefix;
use super::function::MockFn;
use super::resolve::Resolved;

type SharedPrefix<A> = Arc<OnceLock<Box<dyn ArgumentPrefix<A> + Send + Sync>>>;

/// Create an [`ArgumentCheckingMocker`] for `mock`.
///
/// # Example
///
/// ```rust
/// use testkit_mock::mock::{setup_mock, FunctionMock};
///
/// let mock = FunctionMock::<(i32,), i32>::new();
/// setup_mock(&mock).return_value(3);
///
/// assert_eq!(mock.call((0,)).unwrap(), 3);
/// ```
pub fn setup_mock<M, A, R>(mock: &M) -> ArgumentCheckingMocker<'_, M, A, R>
where
    M: MockFn<A, R>,
{
    ArgumentCheckingMocker::new(mock)
}

/// Programs a mock's behavior, optionally checking the leading arguments of
/// each call.
///
/// Expected arguments are read when the mock is called, not when behavior is
/// installed, so they apply to checking behaviors installed before
/// [`expect_arguments`](Self::expect_arguments) as well.
///
/// # Type Parameters
///
/// - `M` - The mock being configured
/// - `A` - The mock's argument tuple
/// - `R` - The mock's return type
///
/// Installed behaviors are [`Implementation`](super::Implementation)s, which
/// must be `Send + Sync`. The values they hand out must therefore be `Send`
/// (and `Sync` too when they are cloned for every call), so a mock returning
/// `Rc<_>` cannot be programmed through this type.
pub struct ArgumentCheckingMocker<'m, M, A, R> {
    mock: &'m M,
    expected: SharedPrefix<A>,
    _marker: PhantomData<fn(A) -> R>,
}

impl<'m, M, A, R> ArgumentCheckingMocker<'m, M, A, R>
where
    M: MockFn<A, R>,
{
    /// Wrap `mock` with no expected arguments declared.
    pub fn new(mock: &'m M) -> Self {
        Self {
            mock,
            expected: Arc::new(OnceLock::new()),
            _marker: PhantomData,
        }
    }

    /// Require that checked calls start with `prefix`.
    ///
    /// Only [`return_value_once`](Self::return_value_once) and
    /// [`resolve_value_once`](Self::resolve_value_once) check arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyConfigured`] if expected arguments were
    /// already declared on this mocker. The first declaration is kept.
    pub fn expect_arguments<P>(&self, prefix: P) -> Result<&Self>
    where
        P: ArgumentPrefix<A> + Send + Sync + 'static,
    {
        let rendered = prefix.render();
        if self.expected.set(Box::new(prefix)).is_err() {
            let existing = self
                .expected
                .get()
                .map(|existing| existing.render())
                .unwrap_or_default();
            return Err(Error::already_configured(existing));
        }
        debug!(arguments = %rendered, "declared expected arguments");
        Ok(self)
    }

    /// Whether expected arguments have been declared.
    #[must_use]
    pub fn has_expected_arguments(&self) -> bool {
        self.expected.get().is_some()
    }

    /// Return `value` from the next call, after checking its arguments.
    ///
    /// `value` is handed out once and never cloned. If a mock runs this
    /// one-shot again after it returned, that call fails with
    /// [`Error::OnceExhausted`].
    pub fn return_value_once(&self, value: R) -> &Self
    where
        A: 'static,
        R: Send + 'static,
    {
        let expected = Arc::clone(&self.expected);
        let value = Mutex::new(Some(value));
        self.mock.mock_implementation_once(Arc::new(move |actual: &A| {
            verify_arguments(&expected, actual)?;
            value.lock().take().ok_or(Error::OnceExhausted)
        }));
        debug!(behavior = "return_value_once", "programmed mock");
        self
    }

    /// Return `value` from every call. Arguments are not checked.
    pub fn return_value(&self, value: R) -> &Self
    where
        A: 'static,
        R: Clone + Send + Sync + 'static,
    {
        self.mock
            .mock_implementation(Arc::new(move |_: &A| Ok(value.clone())));
        debug!(behavior = "return_value", "programmed mock");
        self
    }

    /// Return a future already resolved to `value` from every call.
    /// Arguments are not checked.
    pub fn resolve_value(&self, value: R::Output) -> &Self
    where
        A: 'static,
        R: Resolved + 'static,
        R::Output: Clone + Send + Sync + 'static,
    {
        self.mock
            .mock_implementation(Arc::new(move |_: &A| Ok(R::resolved(value.clone()))));
        debug!(behavior = "resolve_value", "programmed mock");
        self
    }

    /// Return a future already resolved to `value` from every call, after
    /// checking the call's arguments.
    ///
    /// Unlike [`return_value_once`](Self::return_value_once), this stays
    /// installed for all following calls until the mock is reprogrammed.
    /// A mismatch is returned by the call itself, never by the future.
    pub fn resolve_value_once(&self, value: R::Output) -> &Self
    where
        A: 'static,
        R: Resolved + 'static,
        R::Output: Clone + Send + Sync + 'static,
    {
        let expected = Arc::clone(&self.expected);
        self.mock.mock_implementation(Arc::new(move |actual: &A| {
            verify_arguments(&expected, actual)?;
            Ok(R::resolved(value.clone()))
        }));
        debug!(behavior = "resolve_value_once", "programmed mock");
        self
    }
}

fn verify_arguments<A>(expected: &SharedPrefix<A>, actual: &A) -> Result<()> {
    let Some(prefix) = expected.get() else {
        return Ok(());
    };
    if prefix.matches(actual) {
        return Ok(());
    }

    let err = Error::argument_mismatch(
        prefix.arity(),
        prefix.render(),
        prefix.render_actual(actual),
    );
    debug!(error = %err, "argument check failed");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::FunctionMock;

    #[test]
    fn test_expect_arguments_twice_fails() {
        let mock = FunctionMock::<(i32, &str), ()>::new();
        let mocker = setup_mock(&mock);

        mocker.expect_arguments((1, "a")).unwrap();
        let err = mocker.expect_arguments((1,)).err().unwrap();

        assert_eq!(err, Error::already_configured(r#"[1, "a"]"#));
        assert!(mocker.has_expected_arguments());
    }

    #[test]
    fn test_expect_arguments_leaves_mock_untouched() {
        let mock = FunctionMock::<(i32,), i32>::new();
        setup_mock(&mock).expect_arguments((1,)).unwrap();

        assert!(matches!(
            mock.call((1,)),
            Err(Error::NotProgrammed { call: 0 })
        ));
    }

    #[test]
    fn test_return_value_once_without_expected_arguments() {
        let mock = FunctionMock::<(i32,), &str>::new();
        setup_mock(&mock).return_value_once("any");

        assert_eq!(mock.call((99,)).unwrap(), "any");
    }

    #[test]
    fn test_return_value_once_mismatch() {
        let mock = FunctionMock::<(i32, &str), &str>::new();
        setup_mock(&mock)
            .expect_arguments((1, "a"))
            .unwrap()
            .return_value_once("ok");

        let err = mock.call((1, "b")).unwrap_err();
        assert_eq!(
            err,
            Error::argument_mismatch(2, r#"[1, "a"]"#, r#"[1, "b"]"#)
        );
        // The one-shot was consumed by the failing call
        assert!(matches!(
            mock.call((1, "a")),
            Err(Error::NotProgrammed { call: 1 })
        ));
    }

    #[test]
    fn test_expected_arguments_apply_to_earlier_behavior() {
        let mock = FunctionMock::<(i32,), i32>::new();
        let mocker = setup_mock(&mock);

        mocker.return_value_once(5);
        mocker.expect_arguments((7,)).unwrap();

        assert!(mock.call((6,)).unwrap_err().is_argument_mismatch());
    }

    #[test]
    fn test_return_value_ignores_expected_arguments() {
        let mock = FunctionMock::<(i32,), i32>::new();
        setup_mock(&mock)
            .expect_arguments((1,))
            .unwrap()
            .return_value(10);

        assert_eq!(mock.call((1,)).unwrap(), 10);
        assert_eq!(mock.call((2,)).unwrap(), 10);
    }

    #[test]
    fn test_mockers_do_not_share_expected_arguments() {
        let mock = FunctionMock::<(i32,), i32>::new();
        setup_mock(&mock).expect_arguments((1,)).unwrap();

        // A fresh mocker over the same mock starts unconfigured
        let mocker = setup_mock(&mock);
        assert!(!mocker.has_expected_arguments());
        mocker.return_value_once(3);

        assert_eq!(mock.call((2,)).unwrap(), 3);
    }

    #[test]
    fn test_return_value_once_without_clone() {
        let mock = FunctionMock::<(u8,), std::io::Result<u8>>::new();
        setup_mock(&mock)
            .expect_arguments((1,))
            .unwrap()
            .return_value_once(Ok(1))
            .return_value_once(Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full")));

        assert_eq!(mock.call((1,)).unwrap().unwrap(), 1);

        let io_err = mock.call((1,)).unwrap().unwrap_err();
        assert_eq!(io_err.to_string(), "disk full");
    }
}
