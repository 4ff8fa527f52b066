//! str-hashset: a single-threaded set of unique string keys stored in
//! prime-sized, separately chained buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable string set whose growth timing and bucket
//!   placement are fully determined by its inputs.
//! - Layers:
//!   - `sdbm`: the unsalted sdbm string hash; bucket = `hash % capacity`.
//!   - `prime`: prime sizing (`next_prime`) and the growth policy
//!     (`grown_size`, `exceeds_depth`).
//!   - `buckets`: the bucket array. Chains are arena keys threaded through
//!     entries held in a `SlotMap`; growth relinks keys, never strings.
//!   - `StrHashSet`: public API (insert, find, iterate, resize, report).
//!
//! Growth policy
//! - On insert of an absent key, the chain it hashes to is walked first. If
//!   that walk was deeper than `log2(capacity)`, the array grows to
//!   `next_prime(capacity * 1.5)` before the key is linked, and its bucket
//!   is recomputed.
//! - Rehashing relinks every entry through the same insertion path, so a
//!   growth can cascade into further growths of the fresh array. Each step
//!   strictly increases capacity, so the cascade ends.
//! - Lookups never trigger growth.
//!
//! Iteration order
//! - Bucket index ascending; within a bucket, most recently inserted first
//!   (inserts prepend). Any growth reshuffles this order.
//!
//! Ownership and failure
//! - The set exclusively owns every key; callers only see `&Entry`, so the
//!   borrow checker rules out mutation during iteration or `for_each`.
//! - No operation is fallible. A miss is `None`; allocation failure aborts
//!   the process through the global allocator.
//!
//! Notes and non-goals
//! - No removal, no generic keys, no serialization, no eviction.
//! - Not `Sync`-aware: share behind an external lock if needed.
//! - The hash is unsalted; adversarial keys can force long chains and
//!   repeated growth.
//!
//! Logging
//! - Growth emits a `tracing` debug event, forced resizes a trace event,
//!   and `StrHashSet::log_report` an info event. No subscriber is installed.

mod buckets;
mod iter;
pub mod prime;
mod report;
pub mod sdbm;
mod str_hash_set;
mod str_hash_set_proptest;

// Public surface
pub use buckets::Entry;
pub use iter::{IntoIter, Iter};
pub use report::Report;
pub use str_hash_set::{StrHashSet, DEFAULT_CAPACITY};
