use proptest::prelude::*;
use std::collections::BTreeSet;
use str_hashset::prime::{is_prime, next_prime};
use str_hashset::StrHashSet;

// Property: next_prime returns the smallest prime at or above its input.
proptest! {
    #[test]
    fn prop_next_prime_is_smallest(n in 0usize..20_000) {
        let p = next_prime(n);
        prop_assert!(p >= n);
        prop_assert!(is_prime(p));
        prop_assert!((n.max(2)..p).all(|m| !is_prime(m)));
    }
}

// Model inserts into a set created with an arbitrary capacity and check the
// structural invariants after every step.
proptest! {
    #[test]
    fn prop_growth_keeps_invariants(
        cap in 0usize..64,
        keys in proptest::collection::vec("[a-c]{0,4}", 1..300),
    ) {
        let mut s = StrHashSet::with_capacity(cap);
        let mut model = BTreeSet::new();
        let mut last_cap = s.capacity();

        for k in &keys {
            s.insert(k);
            model.insert(k.clone());

            // Capacity only ever grows and stays prime
            prop_assert!(s.capacity() >= last_cap);
            prop_assert!(is_prime(s.capacity()));
            last_cap = s.capacity();

            prop_assert_eq!(s.len(), model.len());
            prop_assert!(s.contains(k));
        }

        // Final invariant: iteration visits exactly the distinct keys
        let visited: Vec<String> = s.iter().map(|e| e.key().to_string()).collect();
        let unique: BTreeSet<String> = visited.iter().cloned().collect();
        prop_assert_eq!(visited.len(), unique.len());
        prop_assert_eq!(unique, model);
    }
}
