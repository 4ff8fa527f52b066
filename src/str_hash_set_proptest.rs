#![cfg(test)]

// Property tests for StrHashSet kept inside the crate so they can reach the
// bucket layout directly.

use crate::prime::is_prime;
use crate::sdbm::{bucket_index, sdbm};
use crate::StrHashSet;
use hashbrown::HashSet;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Find(usize),
    Contains(String),
    Resize(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (
        0usize..40,
        proptest::collection::vec("[a-z]{0,6}", 1..=24),
    )
        .prop_flat_map(|(cap, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                4 => idx.clone().prop_map(OpI::Insert),
                2 => idx.clone().prop_map(OpI::Find),
                1 => "[a-z]{0,6}".prop_map(OpI::Contains),
                1 => (0usize..200).prop_map(OpI::Resize),
                1 => Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..120).prop_map(move |ops| (cap, pool.clone(), ops))
        })
}

fn bucket_order_ascending(s: &StrHashSet) -> bool {
    let mut order = s.iter().map(|e| bucket_index(sdbm(e.key()), s.capacity()));
    let mut prev = match order.next() {
        Some(b) => b,
        None => return true,
    };
    order.all(|b| {
        let ok = b >= prev;
        prev = b;
        ok
    })
}

// Property: State-machine equivalence against hashbrown::HashSet.
// Invariants exercised across random operation sequences:
// - `len` equals the number of distinct keys inserted so far.
// - `find`/`contains` parity with the model for pool and random keys.
// - A forced resize preserves membership and `len`.
// - Iteration yields every key exactly once, in ascending bucket order.
// - Capacity is prime after every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let mut sut = StrHashSet::with_capacity(cap);
        let mut model: HashSet<String> = HashSet::new();

        for op in ops {
            match op {
                OpI::Insert(i) => {
                    let k = &pool[i];
                    let bucket = sut.insert(k);
                    model.insert(k.clone());
                    prop_assert_eq!(bucket, bucket_index(sdbm(k), sut.capacity()));
                }
                OpI::Find(i) => {
                    let k = &pool[i];
                    let found = sut.find(k);
                    prop_assert_eq!(found.is_some(), model.contains(k));
                    if let Some(e) = found {
                        prop_assert_eq!(e.key(), k.as_str());
                    }
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains(&s), model.contains(&s));
                }
                OpI::Resize(n) => {
                    let before: BTreeSet<String> = sut.iter().map(|e| e.key().to_string()).collect();
                    sut.resize(n);
                    prop_assert!(sut.capacity() >= n);
                    let after: BTreeSet<String> = sut.iter().map(|e| e.key().to_string()).collect();
                    prop_assert_eq!(before, after);
                }
                OpI::Iterate => {
                    let visited: Vec<String> = sut.iter().map(|e| e.key().to_string()).collect();
                    let unique: BTreeSet<String> = visited.iter().cloned().collect();
                    prop_assert_eq!(visited.len(), unique.len(), "each key visited once");
                    let m_keys: BTreeSet<String> = model.iter().cloned().collect();
                    prop_assert_eq!(unique, m_keys);
                    prop_assert!(bucket_order_ascending(&sut));
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(is_prime(sut.capacity()));
            prop_assert_eq!(sut.iter().count(), sut.len());
        }
    }
}

// Property: inserting a key a second time changes nothing observable when no
// growth happens in between.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_duplicate_insert_is_noop(
        keys in proptest::collection::vec("[a-z0-9]{0,8}", 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut s = StrHashSet::with_capacity(7);
        for k in &keys {
            s.insert(k);
        }
        let dup = &keys[pick.index(keys.len())];
        let cap = s.capacity();
        let len = s.len();
        let order: Vec<String> = s.iter().map(|e| e.key().to_string()).collect();
        let report = s.report();

        let bucket = s.insert(dup);

        prop_assert_eq!(bucket, bucket_index(sdbm(dup), cap));
        prop_assert_eq!(s.capacity(), cap);
        prop_assert_eq!(s.len(), len);
        let again: Vec<String> = s.iter().map(|e| e.key().to_string()).collect();
        prop_assert_eq!(order, again);
        prop_assert_eq!(s.report(), report);
    }
}
