//! Argument prefixes for checking how a mock is called.
//!
//! A mock's arguments are always a tuple. An [`ArgumentPrefix`] is a shorter
//! (or equally long) tuple whose elements must equal the leading elements of
//! each call's arguments. Trailing arguments are not compared.
//!
//! # Example
//!
//! ```rust
//! use testkit_mock::mock::ArgumentPrefix;
//!
//! let prefix = (1, "a");
//! assert!(prefix.matches(&(1, "a", true)));
//! assert!(!prefix.matches(&(2, "a", true)));
//! assert_eq!(prefix.render_actual(&(2, "a", true)), r#"[2, "a"]"#);
//! ```

use std::fmt::Debug;

/// Leading arguments that a call's argument tuple `A` must start with.
///
/// Implemented for every tuple of up to eight elements against every argument
/// tuple that starts with the same element types, including the empty prefix
/// `()` which matches anything.
pub trait ArgumentPrefix<A> {
    /// Number of leading arguments this prefix checks.
    fn arity(&self) -> usize;

    /// Whether the leading arguments of `actual` equal this prefix.
    fn matches(&self, actual: &A) -> bool;

    /// Render this prefix for error messages.
    fn render(&self) -> String;

    /// Render as many leading arguments of `actual` as this prefix checks.
    fn render_actual(&self, actual: &A) -> String;
}

/// Render a list of arguments as `[a, b, c]` using their `Debug` output.
///
/// # Example
///
/// ```rust
/// use testkit_mock::mock::render_arguments;
///
/// assert_eq!(render_arguments(&[&1, &"a"]), r#"[1, "a"]"#);
/// assert_eq!(render_arguments(&[]), "[]");
/// ```
#[must_use]
pub fn render_arguments(arguments: &[&dyn Debug]) -> String {
    let rendered: Vec<String> = arguments.iter().map(|arg| format!("{arg:?}")).collect();
    format!("[{}]", rendered.join(", "))
}

macro_rules! one {
    ($t:tt) => {
        1
    };
}

macro_rules! impl_prefix {
    (($($P:ident $p:tt),*) ; ($($R:ident),*)) => {
        #[allow(unused_variables)]
        impl<$($P,)* $($R,)*> ArgumentPrefix<($($P,)* $($R,)*)> for ($($P,)*)
        where
            $($P: PartialEq + Debug,)*
        {
            fn arity(&self) -> usize {
                0 $(+ one!($P))*
            }

            fn matches(&self, actual: &($($P,)* $($R,)*)) -> bool {
                true $(&& self.$p == actual.$p)*
            }

            fn render(&self) -> String {
                render_arguments(&[$(&self.$p as &dyn Debug),*])
            }

            fn render_actual(&self, actual: &($($P,)* $($R,)*)) -> String {
                render_arguments(&[$(&actual.$p as &dyn Debug),*])
            }
        }
    };
}

// Walks one argument tuple from the left, emitting a prefix impl for each
// split point between checked and unchecked elements.
macro_rules! impl_prefixes {
    (($($P:ident $p:tt),*) ; ()) => {
        impl_prefix!(($($P $p),*) ; ());
    };
    (($($P:ident $p:tt),*) ; ($R:ident $r:tt $(, $Rs:ident $rs:tt)*)) => {
        impl_prefix!(($($P $p),*) ; ($R $(, $Rs)*));
        impl_prefixes!(($($P $p,)* $R $r) ; ($($Rs $rs),*));
    };
}

impl_prefixes!(() ; ());
impl_prefixes!(() ; (T0 0));
impl_prefixes!(() ; (T0 0, T1 1));
impl_prefixes!(() ; (T0 0, T1 1, T2 2));
impl_prefixes!(() ; (T0 0, T1 1, T2 2, T3 3));
impl_prefixes!(() ; (T0 0, T1 1, T2 2, T3 3, T4 4));
impl_prefixes!(() ; (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5));
impl_prefixes!(() ; (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6));
impl_prefixes!(() ; (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7));
