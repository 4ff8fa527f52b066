//! Iteration over a `StrHashSet`: buckets in ascending order, each chain
//! from head (most recently inserted) to tail.

use crate::buckets::{Arena, Buckets, Entry};
use core::iter::FusedIterator;
use slotmap::DefaultKey;

/// Borrowing cursor over every entry. Holds the current entry and a
/// prefetched successor so advancing never needs the current entry's link.
pub struct Iter<'a> {
    buckets: &'a Buckets,
    entries: &'a Arena,
    index: usize,
    curr: Option<DefaultKey>,
    next: Option<DefaultKey>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(buckets: &'a Buckets, entries: &'a Arena) -> Self {
        Self {
            buckets,
            entries,
            index: 0,
            curr: None,
            next: buckets.head(0),
            remaining: buckets.count(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.next;
        loop {
            if let Some(id) = self.curr {
                self.next = self.entries[id].next;
                self.remaining -= 1;
                return Some(&self.entries[id]);
            }
            if self.index + 1 >= self.buckets.size() {
                // Park past the end so later calls keep returning None.
                self.index = self.buckets.size();
                self.next = None;
                return None;
            }
            self.index += 1;
            self.curr = self.buckets.head(self.index);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owning iterator produced by `StrHashSet::into_iter`. Each key is taken
/// out of the arena as it is visited, in the same order as `Iter`.
pub struct IntoIter {
    buckets: Buckets,
    entries: Arena,
    index: usize,
    next: Option<DefaultKey>,
}

impl IntoIter {
    pub(crate) fn new(buckets: Buckets, entries: Arena) -> Self {
        let next = buckets.head(0);
        Self {
            buckets,
            entries,
            index: 0,
            next,
        }
    }
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut curr = self.next;
        loop {
            if let Some(id) = curr {
                let entry = self
                    .entries
                    .remove(id)
                    .expect("chains only link live arena entries");
                self.next = entry.next;
                return Some(entry.into_key().into_string());
            }
            if self.index + 1 >= self.buckets.size() {
                self.index = self.buckets.size();
                self.next = None;
                return None;
            }
            self.index += 1;
            curr = self.buckets.head(self.index);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.entries.len(), Some(self.entries.len()))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}
