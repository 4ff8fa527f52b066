//! StrHashSet: public API over the bucket array and its entry arena.

use crate::buckets::{Arena, Buckets, Entry, Probe};
use crate::iter::{IntoIter, Iter};
use crate::prime::next_prime;
use crate::report::Report;
use crate::sdbm::{bucket_index, sdbm};
use core::fmt;

/// Capacity requested by `StrHashSet::new`, rounded up to 17.
pub const DEFAULT_CAPACITY: usize = 16;

/// A set of unique string keys stored in prime-sized, separately chained
/// buckets. Grows by 1.5x whenever an insert walks a chain deeper than
/// `log2(capacity)`.
pub struct StrHashSet {
    buckets: Buckets,
    entries: Arena,
}

impl StrHashSet {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set whose bucket array has the smallest prime
    /// number of slots `>= capacity` (at least 2).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: Buckets::with_capacity(capacity),
            entries: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets. Always prime.
    pub fn capacity(&self) -> usize {
        self.buckets.size()
    }

    /// Adds `key` if absent and returns the bucket it lives in.
    ///
    /// Inserting a key that is already present leaves the set untouched.
    /// The returned index is diagnostic only: any later growth moves keys
    /// to new buckets.
    pub fn insert(&mut self, key: &str) -> usize {
        let hash = sdbm(key);
        match self.buckets.probe(&self.entries, hash, key) {
            Probe::Present { bucket } => bucket,
            Probe::Vacant { bucket, depth } => {
                let id = self.entries.insert(Entry::new(key, hash));
                self.buckets.attach(&mut self.entries, id, bucket, depth)
            }
        }
    }

    pub fn find(&self, key: &str) -> Option<&Entry> {
        let hash = sdbm(key);
        let mut cursor = self.buckets.head(bucket_index(hash, self.capacity()));
        while let Some(id) = cursor {
            let e = &self.entries[id];
            if e.key() == key {
                return Some(e);
            }
            cursor = e.next;
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Rehashes every key into `next_prime(capacity)` buckets. The usual
    /// depth check still applies while relinking, so the result may end up
    /// larger than requested.
    pub fn resize(&mut self, capacity: usize) {
        tracing::trace!(
            from = self.capacity(),
            requested = capacity,
            to = next_prime(capacity),
            "forced resize"
        );
        self.buckets.grow(&mut self.entries, capacity);
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets, &self.entries)
    }

    /// Calls `f` once per key in iteration order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Entry),
    {
        for e in self.iter() {
            f(e);
        }
    }

    pub fn report(&self) -> Report {
        Report::collect(&self.buckets, &self.entries)
    }

    /// Emits the current `Report` as a tracing event.
    pub fn log_report(&self) {
        let r = self.report();
        tracing::info!(
            count = r.count,
            capacity = r.capacity,
            occupancy = r.occupancy(),
            collision_rate = r.collision_rate(),
            load_factor = r.load_factor(),
            max_depth = r.max_depth,
            deepest_key = r.deepest_key.as_deref().unwrap_or("-"),
            approx_bytes = r.approx_bytes,
            "{}",
            r
        );
    }
}

impl Default for StrHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StrHashSet {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for StrHashSet {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.buckets, self.entries)
    }
}

impl<S: AsRef<str>> Extend<S> for StrHashSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StrHashSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}
