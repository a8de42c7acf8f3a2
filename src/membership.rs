//! Memoized set-membership predicates.
//!
//! [`isin`] builds a reusable check for "is this value in that collection",
//! caching the answer per collection so that judging the same result
//! repeatedly (the common case inside a retry loop) scans it only once.
//!
//! # Examples
//!
//! ```rust
//! use robustify::isin;
//!
//! let mut is_blocked = isin(451);
//! assert!(is_blocked.check(&[404, 451, 500]));
//! assert!(!is_blocked.check(&[200, 204]));
//! ```

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Build a memoized membership predicate for `value`.
///
/// The returned [`Membership`] answers containment questions for any
/// hashable collection of `T`; see [`Membership::check`]. A closure over
/// `check` slots straight into `retry_if` as a predicate:
///
/// ```rust
/// use robustify::{attempt, isin, Outcome};
///
/// let mut has_placeholder = isin("pending".to_string());
/// let mut responses = vec![
///     vec!["pending".to_string()],
///     vec!["done".to_string()],
/// ]
/// .into_iter();
///
/// let outcome = attempt(|| responses.next().unwrap()).retry_if(
///     |page| has_placeholder.check(page),
///     || {},
///     3,
/// );
///
/// assert_eq!(outcome, Outcome::Ok(vec!["done".to_string()]));
/// ```
pub fn isin<T>(value: T) -> Membership<T>
where
    T: Hash + PartialEq,
{
    Membership {
        value,
        cache: HashMap::new(),
    }
}

/// A membership predicate with a per-collection answer cache.
///
/// Cached answers are stored under the collection's content hash together
/// with a snapshot of its elements; a hit is confirmed by comparing the
/// collection against the snapshot, so two distinct collections never
/// share an answer even if their hashes collide. The cache assumes each
/// collection's contents are stable between calls: a collection mutated
/// after it has been checked is treated as a brand-new collection on its
/// next check, and the stale entry lingers in the cache.
#[derive(Debug, Clone)]
pub struct Membership<T> {
    value: T,
    cache: HashMap<u64, Vec<(Vec<T>, bool)>>,
}

impl<T> Membership<T>
where
    T: Hash + PartialEq,
{
    /// Report whether the sought value is contained in `collection`.
    ///
    /// The first check of a given collection scans it and snapshots its
    /// elements; subsequent checks of an equal collection are answered
    /// from the cache without re-judging elements against the sought
    /// value.
    pub fn check<C>(&mut self, collection: &C) -> bool
    where
        T: Clone,
        C: Hash + ?Sized,
        for<'a> &'a C: IntoIterator<Item = &'a T>,
    {
        let mut hasher = DefaultHasher::new();
        collection.hash(&mut hasher);
        let bucket = self.cache.entry(hasher.finish()).or_default();

        if let Some((_, found)) = bucket
            .iter()
            .find(|(snapshot, _)| snapshot.iter().eq(collection.into_iter()))
        {
            return *found;
        }

        let snapshot: Vec<T> = collection.into_iter().cloned().collect();
        let found = snapshot.iter().any(|item| *item == self.value);
        bucket.push((snapshot, found));
        found
    }

    /// The value being sought.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of distinct collections actually scanned so far.
    ///
    /// Cache hits do not increase this count, which makes memoization
    /// observable in tests.
    pub fn misses(&self) -> usize {
        self.cache.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn reports_containment() {
        let mut pred = isin(3);
        assert!(pred.check(&[1, 2, 3]));
        assert!(!pred.check(&[4, 5, 6]));
        let as_vec = vec![2, 3];
        assert!(pred.check(&as_vec));
    }

    #[test]
    fn value_accessor_returns_sought_value() {
        let pred = isin("x");
        assert_eq!(*pred.value(), "x");
    }

    /// Element type that counts comparisons against the sought value (the
    /// only marked element), so membership scans are observable
    /// independently of snapshot bookkeeping.
    #[derive(Clone)]
    struct Counted {
        id: u32,
        sought: bool,
    }

    static EQ_CALLS: AtomicU32 = AtomicU32::new(0);

    impl Counted {
        fn plain(id: u32) -> Self {
            Self { id, sought: false }
        }
    }

    impl PartialEq for Counted {
        fn eq(&self, other: &Self) -> bool {
            if self.sought || other.sought {
                EQ_CALLS.fetch_add(1, Ordering::SeqCst);
            }
            self.id == other.id
        }
    }

    impl Hash for Counted {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    #[test]
    fn repeated_checks_are_memoized() {
        let haystack = vec![Counted::plain(1), Counted::plain(2)];
        let mut pred = isin(Counted { id: 2, sought: true });

        assert!(pred.check(&haystack));
        let scans = EQ_CALLS.load(Ordering::SeqCst);
        assert!(scans >= 1);
        assert_eq!(pred.misses(), 1);

        // Same collection again: answered from cache, no further judging
        // against the sought value.
        assert!(pred.check(&haystack));
        assert_eq!(EQ_CALLS.load(Ordering::SeqCst), scans);
        assert_eq!(pred.misses(), 1);
    }

    #[test]
    fn distinct_collections_are_cached_separately() {
        let mut pred = isin(9);
        assert!(!pred.check(&[1, 2]));
        assert!(pred.check(&[9]));
        assert_eq!(pred.misses(), 2);

        assert!(!pred.check(&[1, 2]));
        assert!(pred.check(&[9]));
        assert_eq!(pred.misses(), 2);
    }

    /// Worst-case hashing: every collection lands in the same cache slot.
    #[derive(Clone, PartialEq)]
    struct Unhashed(u32);

    impl Hash for Unhashed {
        fn hash<H: Hasher>(&self, _: &mut H) {}
    }

    #[test]
    fn colliding_hashes_do_not_share_answers() {
        let mut pred = isin(Unhashed(1));
        assert!(pred.check(&[Unhashed(1)]));
        assert!(!pred.check(&[Unhashed(2)]));
        assert!(pred.check(&[Unhashed(1)]));
        assert_eq!(pred.misses(), 2);
    }
}
