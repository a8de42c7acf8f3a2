//! Testing utilities for robustify-based code.
//!
//! Provides assertion macros over [`Outcome`] and, behind the `proptest`
//! feature, an `Arbitrary` implementation for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use robustify::{assert_err, assert_ok, Outcome};
//!
//! let ok: Outcome<i32, String> = Outcome::Ok(42);
//! assert_ok!(ok);
//!
//! let err: Outcome<i32, String> = Outcome::Err("down".to_string());
//! assert_err!(err);
//! ```

#[cfg(feature = "proptest")]
use crate::Outcome;

/// Assert that an outcome is `Ok`.
///
/// Panics with the error's debug representation otherwise.
///
/// # Example
///
/// ```rust
/// use robustify::{assert_ok, attempt};
///
/// let outcome = attempt(|| 1).retry_if(|_| false, || {}, 3);
/// assert_ok!(outcome);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is `Err`.
///
/// Panics with the success value's debug representation otherwise.
///
/// # Example
///
/// ```rust
/// use robustify::{assert_err, attempt};
///
/// let outcome = attempt(|| 1).retry_if(|_| true, || {}, 0);
/// assert_err!(outcome);
/// ```
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::Ok),
            any_with::<E>(e_params).prop_map(Outcome::Err),
        ]
        .boxed()
    }
}
