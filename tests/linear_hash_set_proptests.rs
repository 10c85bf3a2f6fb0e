// LinearHashSet property tests (public API).
//
// Property 1: model equivalence against std's HashSet.
//  - Model: std::collections::HashSet over the same key pool.
//  - Invariant: insert/remove return values, contains, len and is_empty
//    match the model after every operation; final iteration yields the
//    model's key set.
//  - Operations: insert, remove, contains, iterate.
//
// Property 2: permutation insensitivity.
//  - Sets built from a sequence and a shuffle of it compare equal.
//
// Property 3: build-then-drain round trip.
//  - Draining a set built from any sequence yields exactly its distinct
//    elements, each once.
use linear_hash_set::LinearHashSet;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

proptest! {
    #[test]
    fn prop_matches_std_set(
        keys in 1usize..=6,
        ops in proptest::collection::vec((0u8..=3u8, 0usize..100usize), 1..120)
    ) {
        let mut sut: LinearHashSet<String> = LinearHashSet::new();
        let mut model: HashSet<String> = HashSet::new();

        for (op, raw_k) in ops {
            let key = format!("k{}", raw_k % keys);
            match op {
                0 => prop_assert_eq!(sut.insert(key.clone()), model.insert(key.clone())),
                1 => prop_assert_eq!(sut.remove(&key), model.remove(&key)),
                2 => prop_assert_eq!(sut.contains(&key), model.contains(&key)),
                3 => {
                    let s_keys: BTreeSet<String> = sut.iter().cloned().collect();
                    let m_keys: BTreeSet<String> = model.iter().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        let s_keys: BTreeSet<String> = sut.iter().cloned().collect();
        let m_keys: BTreeSet<String> = model.into_iter().collect();
        prop_assert_eq!(s_keys, m_keys);
    }
}

proptest! {
    #[test]
    fn prop_permutation_builds_equal_sets(
        (original, shuffled) in proptest::collection::vec(any::<u32>(), 0..64)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a: LinearHashSet<u32> = original.into_iter().collect();
        let b: LinearHashSet<u32> = shuffled.into_iter().collect();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_build_then_drain_round_trips(keys in proptest::collection::vec(any::<u16>(), 0..256)) {
        let distinct: BTreeSet<u16> = keys.iter().copied().collect();
        let set: LinearHashSet<u16> = keys.into_iter().collect();
        prop_assert_eq!(set.len(), distinct.len());

        let mut drained = BTreeSet::new();
        for key in set {
            prop_assert!(drained.insert(key), "a key was yielded twice");
        }
        prop_assert_eq!(drained, distinct);
    }
}
