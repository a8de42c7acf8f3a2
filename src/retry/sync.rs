//! Blocking retry variant.

use super::exhausted;
use crate::error::MaxTriesReached;
use crate::outcome::Outcome;

/// Invoke a blocking action once and wrap it for retrying.
///
/// The action runs exactly once here; a panic from that invocation unwinds
/// to the caller. For actions returning futures, use
/// [`attempt_async`](crate::attempt_async) instead; the split mirrors the
/// action's type, decided once at the call site.
///
/// # Examples
///
/// ```rust
/// use robustify::{attempt, Outcome};
///
/// let mut source = vec![1, 2, 3, 4].into_iter();
/// let outcome = attempt(|| source.next().unwrap()).retry_if(
///     |n| *n < 4,
///     || {},
///     3,
/// );
///
/// assert_eq!(outcome, Outcome::Ok(4));
/// ```
pub fn attempt<T, F>(mut action: F) -> Attempt<T, F>
where
    F: FnMut() -> T,
{
    let current = action();
    Attempt { current, action }
}

/// A blocking action paired with its most recent result.
///
/// Constructed by [`attempt`]. The wrapper owns both the action and the
/// result; nothing is shared with the caller until `retry_if` returns.
#[derive(Debug)]
pub struct Attempt<T, F> {
    current: T,
    action: F,
}

impl<T, F> Attempt<T, F>
where
    F: FnMut() -> T,
{
    /// The result of the most recent invocation.
    pub fn result(&self) -> &T {
        &self.current
    }

    /// Retry the action while `predicate` holds, up to `max_tries` times.
    ///
    /// `predicate` returning `true` means "retry again". `on_retry` runs
    /// once before each re-invocation; its effects are the caller's to
    /// manage. Exhausting the budget while the predicate still holds yields
    /// `Err(MaxTriesReached)` carrying the configured budget in its
    /// message. A budget of zero is already exhausted: the call returns
    /// `Err` without ever consulting the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use robustify::{attempt, Outcome};
    ///
    /// let mut backoffs = 0;
    /// let outcome = attempt(|| 5).retry_if(|n| *n >= 0, || backoffs += 1, 2);
    ///
    /// assert!(outcome.is_err());
    /// assert_eq!(backoffs, 2);
    /// ```
    pub fn retry_if<P, H>(
        mut self,
        mut predicate: P,
        mut on_retry: H,
        max_tries: u32,
    ) -> Outcome<T, MaxTriesReached>
    where
        P: FnMut(&T) -> bool,
        H: FnMut(),
    {
        // A zero budget is spent before the first judgment.
        if max_tries == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(max_tries, "retry budget exhausted");
            return Outcome::Err(exhausted(max_tries));
        }
        let mut tries = 0;
        loop {
            if !predicate(&self.current) {
                return Outcome::Ok(self.current);
            }
            if tries == max_tries {
                #[cfg(feature = "tracing")]
                tracing::warn!(max_tries, "retry budget exhausted");
                return Outcome::Err(exhausted(max_tries));
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(attempt = tries + 1, "result rejected, retrying");
            on_retry();
            self.current = (self.action)();
            tries += 1;
        }
    }
}
