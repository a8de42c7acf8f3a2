//! # Robustify
//!
//! Functional-style retry combinators for Rust.
//!
//! ## Philosophy
//!
//! Retrying is a policy decision, not an exception. **Robustify** models it
//! that way: an action is invoked, its result is judged by a caller-supplied
//! predicate, and retries continue until the predicate clears or a bounded
//! attempt budget runs out. Exhaustion is an ordinary value
//! ([`MaxTriesReached`] inside [`Outcome::Err`]), never a panic.
//!
//! ## Quick Example
//!
//! ```rust
//! use robustify::{attempt, Outcome};
//!
//! let mut readings = vec![503, 503, 200].into_iter();
//!
//! // Re-poll while the status looks transient, at most 5 extra times.
//! let outcome = attempt(|| readings.next().unwrap()).retry_if(
//!     |status| *status == 503,
//!     || {},
//!     5,
//! );
//!
//! assert_eq!(outcome, Outcome::Ok(200));
//! ```
//!
//! The same vocabulary works for suspending actions via
//! [`attempt_async`], and the [`isin`] helper builds memoized membership
//! predicates for collection-valued results.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod membership;
pub mod outcome;
pub mod retry;
pub mod testing;

// Re-exports
pub use error::MaxTriesReached;
pub use membership::{isin, Membership};
pub use outcome::Outcome;
pub use retry::{attempt, attempt_async, sync_hook, AsyncAttempt, Attempt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::MaxTriesReached;
    pub use crate::membership::{isin, Membership};
    pub use crate::outcome::Outcome;
    pub use crate::retry::{attempt, attempt_async, sync_hook, AsyncAttempt, Attempt};
}
