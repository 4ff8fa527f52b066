//! Distribution diagnostics for a `StrHashSet`.

use crate::buckets::{Arena, Buckets, Entry};
use core::fmt;

/// Snapshot of how keys are spread over the bucket array. Observational
/// only; building one never changes the set.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub count: usize,
    pub capacity: usize,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Buckets holding two or more entries.
    pub colliding_buckets: usize,
    pub max_depth: usize,
    /// Tail key of the first chain reaching `max_depth`.
    pub deepest_key: Option<String>,
    /// Rough heap footprint: per-entry bookkeeping plus key bytes.
    pub approx_bytes: usize,
}

impl Report {
    pub(crate) fn collect(buckets: &Buckets, entries: &Arena) -> Self {
        let mut occupied_buckets = 0;
        let mut colliding_buckets = 0;
        let mut max_depth = 0;
        let mut deepest = None;
        for (depth, tail) in buckets.chain_depths(entries) {
            if depth == 0 {
                continue;
            }
            occupied_buckets += 1;
            if depth > 1 {
                colliding_buckets += 1;
            }
            if depth > max_depth {
                max_depth = depth;
                deepest = tail;
            }
        }
        let key_bytes: usize = entries.values().map(|e| e.key().len()).sum();
        Self {
            count: buckets.count(),
            capacity: buckets.size(),
            occupied_buckets,
            colliding_buckets,
            max_depth,
            deepest_key: deepest.map(|id| entries[id].key().to_string()),
            approx_bytes: buckets.count() * core::mem::size_of::<Entry>() + key_bytes,
        }
    }

    fn ratio(n: usize, capacity: usize) -> f64 {
        if capacity == 0 {
            0.0
        } else {
            n as f64 / capacity as f64
        }
    }

    /// Fraction of buckets that are non-empty.
    pub fn occupancy(&self) -> f64 {
        Self::ratio(self.occupied_buckets, self.capacity)
    }

    /// Fraction of buckets whose chain holds more than one entry.
    pub fn collision_rate(&self) -> f64 {
        Self::ratio(self.colliding_buckets, self.capacity)
    }

    pub fn load_factor(&self) -> f64 {
        Self::ratio(self.count, self.capacity)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {:>6}/{:<6} occupied: {:>6.2}% collisions: {:>6.2}% load: {:>6.2}% \
             max depth: {} (key: {}) mem: {:.2}K",
            self.count,
            self.capacity,
            self.occupancy() * 100.0,
            self.collision_rate() * 100.0,
            self.load_factor() * 100.0,
            self.max_depth,
            self.deepest_key.as_deref().unwrap_or("-"),
            self.approx_bytes as f64 / 1024.0,
        )
    }
}
