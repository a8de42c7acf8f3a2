//! A two-variant sum type representing success or failure.
//!
//! # Outcome vs std Result
//!
//! [`Outcome<T, E>`] carries the same information as `std::result::Result`:
//! exactly one of a success payload or a typed error. It exists so the
//! combinators in this crate can return a value the rest of the crate owns:
//! `Arbitrary` and serde support live here, and the retry combinators extend
//! it without orphan-rule gymnastics. Conversions to and from `Result` are
//! free in both directions, so `?`-based code interoperates directly via
//! [`Outcome::into_result`].
//!
//! # Examples
//!
//! ```rust
//! use robustify::Outcome;
//!
//! let good: Outcome<i32, String> = Outcome::Ok(42);
//! let doubled = good.map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Ok(84));
//!
//! // Bridge into ? territory
//! fn take(outcome: Outcome<i32, String>) -> Result<i32, String> {
//!     let n = outcome.into_result()?;
//!     Ok(n + 1)
//! }
//! assert_eq!(take(Outcome::Ok(1)), Ok(2));
//! ```

/// A value that is either `Ok(T)` or `Err(E)`.
///
/// Exactly one variant is populated, fixed at construction. The retry
/// combinators return `Outcome<T, MaxTriesReached>`: `Ok` when the
/// predicate cleared, `Err` when the attempt budget ran out.
///
/// # Example
///
/// ```rust
/// use robustify::Outcome;
///
/// let outcome: Outcome<i32, &str> = Outcome::Ok(7);
/// match outcome {
///     Outcome::Ok(n) => assert_eq!(n, 7),
///     Outcome::Err(e) => panic!("unexpected error: {}", e),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success variant, holding the payload.
    Ok(T),
    /// The failure variant, holding the typed error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert!(ok.is_ok());
    /// assert!(!ok.is_err());
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    // ========== Extractors ==========

    /// Extract the success value, discarding any error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert_eq!(ok.ok(), Some(1));
    ///
    /// let err: Outcome<i32, &str> = Outcome::Err("nope");
    /// assert_eq!(err.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Extract the error value, discarding any success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Borrow both variants, producing an `Outcome` of references.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let ok: Outcome<String, String> = Outcome::Ok("value".to_string());
    /// assert_eq!(ok.as_ref().ok().map(String::len), Some(5));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Return the success value or compute one from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let err: Outcome<usize, &str> = Outcome::Err("four");
    /// assert_eq!(err.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    // ========== Combinators ==========

    /// Transform the success value, leaving errors untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(ok.map(|n| n * 10), Outcome::Ok(20));
    ///
    /// let err: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(err.map(|n| n * 10), Outcome::Err("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the error value, leaving successes untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(err.map_err(str::len), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chain a fallible computation on the success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use robustify::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(8).and_then(half), Outcome::Ok(4));
    /// assert_eq!(Outcome::Ok(3).and_then(half), Outcome::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    // ========== Conversions ==========

    /// Convert into a `std::result::Result`, enabling the `?` operator.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Build an `Outcome` from a `std::result::Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
