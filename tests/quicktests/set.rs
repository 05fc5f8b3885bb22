use classic_collections::set::{Set, SortedSet, UnsortedSet};

use std::collections::BTreeSet;

use crate::Op;

quickcheck::quickcheck! {
    fn sorted_set_stays_sorted(ops: Vec<Op<i8>>) -> bool {
        let mut set = SortedSet::new();
        let mut expected = BTreeSet::new();

        for op in ops {
            let agrees = match op {
                Op::Insert(x) => set.insert(x) == expected.insert(x),
                Op::Remove(x) => set.remove(&x) == expected.remove(&x),
            };
            if !agrees {
                return false;
            }
        }

        set.as_slice().windows(2).all(|pair| pair[0] < pair[1]) && set.iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn sorting_an_unsorted_set(xs: Vec<i8>) -> bool {
        let unsorted: UnsortedSet<_> = xs.iter().copied().collect();
        let sorted = SortedSet::from_set(&unsorted);

        sorted.same_elements(&unsorted) && sorted == xs.into_iter().collect::<SortedSet<_>>()
    }
}
