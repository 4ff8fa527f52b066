//! Buckets: the prime-sized array of singly-linked chains.
//!
//! Entries live in a `SlotMap` arena owned by the set; a chain is a run of
//! arena keys threaded through `Entry::next`. Relinking during growth only
//! rewrites those keys, so key strings are never copied or reallocated.

use crate::prime::{exceeds_depth, grown_size, next_prime};
use crate::sdbm::bucket_index;
use slotmap::{DefaultKey, SlotMap};

/// A stored key. Handed out only as `&Entry`, so callers can read but never
/// mutate it.
pub struct Entry {
    key: Box<str>,
    hash: u64,
    pub(crate) next: Option<DefaultKey>,
}

impl Entry {
    pub(crate) fn new(key: &str, hash: u64) -> Self {
        Self {
            key: key.into(),
            hash,
            next: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn hash(&self) -> u64 {
        self.hash
    }

    pub(crate) fn into_key(self) -> Box<str> {
        self.key
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.key.fmt(f)
    }
}

pub(crate) type Arena = SlotMap<DefaultKey, Entry>;

/// Outcome of walking one chain for a key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Probe {
    /// The key is already stored in `bucket`.
    Present { bucket: usize },
    /// The key is absent; `bucket`'s chain was `depth` entries long.
    Vacant { bucket: usize, depth: usize },
}

#[derive(Debug)]
pub(crate) struct Buckets {
    heads: Vec<Option<DefaultKey>>,
    count: usize,
}

impl Buckets {
    /// Empty array sized to the smallest prime `>= requested`.
    pub(crate) fn with_capacity(requested: usize) -> Self {
        Self {
            heads: vec![None; next_prime(requested)],
            count: 0,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.heads.len()
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn head(&self, bucket: usize) -> Option<DefaultKey> {
        self.heads.get(bucket).copied().flatten()
    }

    pub(crate) fn probe(&self, entries: &Arena, hash: u64, key: &str) -> Probe {
        let bucket = bucket_index(hash, self.size());
        let mut depth = 0;
        let mut cursor = self.heads[bucket];
        while let Some(id) = cursor {
            let e = &entries[id];
            if e.key() == key {
                return Probe::Present { bucket };
            }
            depth += 1;
            cursor = e.next;
        }
        Probe::Vacant { bucket, depth }
    }

    /// Prepends the arena entry `id` to the chain found vacant by `probe`,
    /// growing first when that chain is already too deep. Returns the bucket
    /// the entry ends up in, recomputed if growth happened.
    pub(crate) fn attach(
        &mut self,
        entries: &mut Arena,
        id: DefaultKey,
        mut bucket: usize,
        depth: usize,
    ) -> usize {
        if exceeds_depth(depth, self.size()) {
            self.grow(entries, grown_size(self.size()));
            bucket = bucket_index(entries[id].hash(), self.size());
        }
        entries[id].next = self.heads[bucket];
        self.heads[bucket] = Some(id);
        self.count += 1;
        bucket
    }

    /// Full insertion path for an entry already in the arena: dedup, depth
    /// check, prepend. Used for rehashing, where it may itself grow `self`.
    pub(crate) fn link(&mut self, entries: &mut Arena, id: DefaultKey) -> usize {
        let probe = {
            let e = &entries[id];
            self.probe(entries, e.hash(), e.key())
        };
        match probe {
            Probe::Present { .. } => {
                unreachable!("keys are unique across the set; relinking found a duplicate")
            }
            Probe::Vacant { bucket, depth } => self.attach(entries, id, bucket, depth),
        }
    }

    /// Rebuilds the chains in a fresh array of `next_prime(target)` buckets
    /// and adopts it. Entries move by relinking; none are copied or dropped.
    pub(crate) fn grow(&mut self, entries: &mut Arena, target: usize) {
        let mut fresh = Buckets::with_capacity(target);
        tracing::debug!(
            from = self.size(),
            to = fresh.size(),
            count = self.count,
            "growing bucket array"
        );
        for bucket in 0..self.size() {
            let mut cursor = self.heads[bucket];
            while let Some(id) = cursor {
                // Read the successor before `link` rewrites it.
                cursor = entries[id].next;
                fresh.link(entries, id);
            }
        }
        debug_assert_eq!(fresh.count, self.count);
        *self = fresh;
    }

    /// Length of every chain, indexed by bucket.
    pub(crate) fn chain_depths<'a>(
        &'a self,
        entries: &'a Arena,
    ) -> impl Iterator<Item = (usize, Option<DefaultKey>)> + 'a {
        self.heads.iter().map(move |&head| {
            let mut depth = 0;
            let mut tail = None;
            let mut cursor = head;
            while let Some(id) = cursor {
                depth += 1;
                tail = Some(id);
                cursor = entries[id].next;
            }
            (depth, tail)
        })
    }
}
