//! Retry combinators over predicate-judged actions.
//!
//! The entry points are [`attempt`] for blocking actions and
//! [`attempt_async`] for suspending ones. Each invokes the action exactly
//! once and wraps the (resolved or pending) result together with the action
//! itself; the wrapper's `retry_if` then drives the loop:
//!
//! 1. Judge the current result with the predicate. `false` means the result
//!    is acceptable: return it as [`Outcome::Ok`].
//! 2. `true` with the attempt budget spent: return
//!    [`Outcome::Err`]`(`[`MaxTriesReached`]`)`.
//! 3. Otherwise run the retry hook, re-invoke the action, and judge again.
//!
//! `max_tries` bounds re-invocations *beyond* the initial one, so up to
//! `max_tries + 1` results are judged in total. A budget of zero is already
//! exhausted: the call returns `Err` without judging the initial result,
//! which is the exhaustion contract, not a special case.
//!
//! Panics from the action or the hook are not caught; "the predicate never
//! cleared" is the only failure this module converts into a value.
//!
//! # Quick Start
//!
//! ```rust
//! use robustify::{attempt, Outcome};
//!
//! let mut polls = 0;
//! let outcome = attempt(|| {
//!     polls += 1;
//!     polls
//! })
//! .retry_if(|n| *n < 3, || {}, 5);
//!
//! assert_eq!(outcome, Outcome::Ok(3));
//! ```

mod future;
mod sync;

pub use future::{attempt_async, sync_hook, AsyncAttempt};
pub use sync::{attempt, Attempt};

use crate::error::MaxTriesReached;

/// Budget-exhaustion error shared by both variants. The message text is a
/// stable part of the contract; callers match on it.
fn exhausted(max_tries: u32) -> MaxTriesReached {
    MaxTriesReached::new(format!("Max tries ({max_tries}) reached for retryif()"))
}
