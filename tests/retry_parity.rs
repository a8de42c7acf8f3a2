//! The blocking and suspending variants must agree: identical outcomes and
//! identical action/hook invocation counts for equivalent scenarios.

use robustify::{attempt, attempt_async, sync_hook, MaxTriesReached, Outcome};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Drive the blocking variant: the action yields 1, 2, 3, ...; the
/// predicate rejects values below `clears_at`.
fn run_sync(clears_at: u32, max_tries: u32) -> (Outcome<u32, MaxTriesReached>, u32, u32) {
    let invocations = Arc::new(AtomicU32::new(0));
    let hook_calls = Arc::new(AtomicU32::new(0));

    let outcome = attempt({
        let invocations = invocations.clone();
        move || invocations.fetch_add(1, Ordering::SeqCst) + 1
    })
    .retry_if(
        |n| *n < clears_at,
        {
            let hook_calls = hook_calls.clone();
            move || {
                hook_calls.fetch_add(1, Ordering::SeqCst);
            }
        },
        max_tries,
    );

    (
        outcome,
        invocations.load(Ordering::SeqCst),
        hook_calls.load(Ordering::SeqCst),
    )
}

/// Same scenario on the suspending variant.
async fn run_async(clears_at: u32, max_tries: u32) -> (Outcome<u32, MaxTriesReached>, u32, u32) {
    let invocations = Arc::new(AtomicU32::new(0));
    let hook_calls = Arc::new(AtomicU32::new(0));

    let outcome = attempt_async({
        let invocations = invocations.clone();
        move || {
            let invocations = invocations.clone();
            async move { invocations.fetch_add(1, Ordering::SeqCst) + 1 }
        }
    })
    .retry_if(
        |n| *n < clears_at,
        sync_hook({
            let hook_calls = hook_calls.clone();
            move || {
                hook_calls.fetch_add(1, Ordering::SeqCst);
            }
        }),
        max_tries,
    )
    .await;

    (
        outcome,
        invocations.load(Ordering::SeqCst),
        hook_calls.load(Ordering::SeqCst),
    )
}

#[tokio::test]
async fn variants_agree_across_scenarios() {
    // (clears_at, max_tries) covering immediate success, success on the
    // final permitted attempt, exhaustion, and a zero budget.
    let scenarios = [(1, 5), (4, 3), (10, 3), (2, 0), (1, 0)];

    for (clears_at, max_tries) in scenarios {
        let sync = run_sync(clears_at, max_tries);
        let asynchronous = run_async(clears_at, max_tries).await;
        assert_eq!(
            sync, asynchronous,
            "variants diverged for clears_at={clears_at} max_tries={max_tries}"
        );
    }
}

#[tokio::test]
async fn exhaustion_messages_are_identical() {
    let (sync_outcome, _, _) = run_sync(100, 2);
    let (async_outcome, _, _) = run_async(100, 2).await;

    let sync_err = sync_outcome.err().unwrap();
    let async_err = async_outcome.err().unwrap();
    assert_eq!(sync_err, async_err);
    assert_eq!(sync_err.message(), "Max tries (2) reached for retryif()");
}

#[test]
fn membership_predicate_drives_retries() {
    use robustify::isin;

    let mut still_syncing = isin("syncing");
    let mut pages = vec![
        vec!["syncing", "partial"],
        vec!["syncing"],
        vec!["complete"],
    ]
    .into_iter();

    let outcome = attempt(|| pages.next().unwrap()).retry_if(
        |page| still_syncing.check(page),
        || {},
        5,
    );

    assert_eq!(outcome, Outcome::Ok(vec!["complete"]));
    assert_eq!(still_syncing.misses(), 3);
}
