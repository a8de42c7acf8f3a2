//! Suspending retry variant.

use std::future::Future;

use futures::future::{ready, Ready};

use super::exhausted;
use crate::error::MaxTriesReached;
use crate::outcome::Outcome;

/// Invoke a future-producing action once and wrap it for retrying.
///
/// The action runs exactly once here, but the future it returns is stored
/// unpolled; nothing suspends until [`AsyncAttempt::retry_if`] is awaited.
/// A panic from the one invocation unwinds to the caller.
///
/// # Examples
///
/// ```rust
/// use robustify::{attempt_async, sync_hook, Outcome};
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// # tokio_test::block_on(async {
/// let calls = AtomicU32::new(0);
/// let calls_ref = &calls;
/// let outcome = attempt_async(move || async move {
///     calls_ref.fetch_add(1, Ordering::SeqCst) + 1
/// })
/// .retry_if(|n| *n < 3, sync_hook(|| {}), 5)
/// .await;
///
/// assert_eq!(outcome, Outcome::Ok(3));
/// assert_eq!(calls.load(Ordering::SeqCst), 3);
/// # });
/// ```
pub fn attempt_async<F, Fut>(mut action: F) -> AsyncAttempt<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: Future,
{
    let pending = action();
    AsyncAttempt { pending, action }
}

/// A suspending action paired with its pending initial result.
///
/// Constructed by [`attempt_async`]. The initial future is awaited exactly
/// once, inside `retry_if`. Attempts are strictly sequential: no task is
/// spawned, no two invocations of the action are ever in flight at once,
/// and dropping the `retry_if` future mid-await abandons the loop without
/// producing a partial result (cancellation stays with the host runtime).
pub struct AsyncAttempt<F, Fut> {
    pending: Fut,
    action: F,
}

impl<F, Fut> std::fmt::Debug for AsyncAttempt<F, Fut> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncAttempt").finish_non_exhaustive()
    }
}

impl<F, Fut, T> AsyncAttempt<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = T>,
{
    /// Retry the action while `predicate` holds, up to `max_tries` times.
    ///
    /// Same contract as [`Attempt::retry_if`](crate::Attempt::retry_if)
    /// (including the zero-budget exhaustion), with three suspension
    /// points: resolving the initial pending result,
    /// awaiting each `on_retry` future, and awaiting each re-invocation.
    /// The hook returns a future; awaiting one that is already complete
    /// (such as [`sync_hook`]'s) proceeds without yielding, so blocking and
    /// suspending hooks share this signature.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use robustify::{attempt_async, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let mut waits = 0;
    /// let outcome = attempt_async(|| async { 5 })
    ///     .retry_if(
    ///         |n| *n >= 0,
    ///         || {
    ///             waits += 1;
    ///             tokio::time::sleep(std::time::Duration::from_millis(1))
    ///         },
    ///         2,
    ///     )
    ///     .await;
    ///
    /// assert!(outcome.is_err());
    /// assert_eq!(waits, 2);
    /// # });
    /// ```
    pub async fn retry_if<P, H, HFut>(
        self,
        mut predicate: P,
        mut on_retry: H,
        max_tries: u32,
    ) -> Outcome<T, MaxTriesReached>
    where
        P: FnMut(&T) -> bool,
        H: FnMut() -> HFut,
        HFut: Future<Output = ()>,
    {
        let AsyncAttempt {
            pending,
            mut action,
        } = self;
        // The pending initial result is resolved exactly once, even when
        // the budget is already spent.
        let mut current = pending.await;
        if max_tries == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(max_tries, "retry budget exhausted");
            return Outcome::Err(exhausted(max_tries));
        }
        let mut tries = 0;
        loop {
            if !predicate(&current) {
                return Outcome::Ok(current);
            }
            if tries == max_tries {
                #[cfg(feature = "tracing")]
                tracing::warn!(max_tries, "retry budget exhausted");
                return Outcome::Err(exhausted(max_tries));
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(attempt = tries + 1, "result rejected, retrying");
            on_retry().await;
            current = action().await;
            tries += 1;
        }
    }
}

/// Adapt a blocking hook for [`AsyncAttempt::retry_if`].
///
/// Runs the closure and hands back an already-completed future, so the
/// await in the retry loop resumes immediately.
///
/// # Examples
///
/// ```rust
/// use robustify::{attempt_async, sync_hook};
///
/// # tokio_test::block_on(async {
/// let mut logged = 0;
/// let _ = attempt_async(|| async { 1 })
///     .retry_if(|n| *n < 1, sync_hook(|| logged += 1), 3)
///     .await;
///
/// assert_eq!(logged, 0); // predicate cleared on the initial result
/// # });
/// ```
pub fn sync_hook<F>(mut hook: F) -> impl FnMut() -> Ready<()>
where
    F: FnMut(),
{
    move || {
        hook();
        ready(())
    }
}
