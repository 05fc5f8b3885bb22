use classic_collections::tree::BinarySearchTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(bst.take(x), set.take(x));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = BinarySearchTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        // We may have inserted the same value multiple times - delete each one.
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_restores_len(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: BinarySearchTree<_> = xs.into_iter().filter(|y| *y != x).collect();
        let before = tree.len();

        tree.insert(x) && tree.remove(&x) && tree.len() == before && !tree.to_vec().contains(&&x)
    }
}

quickcheck::quickcheck! {
    fn iterative_and_recursive_shapes_match(xs: Vec<i16>) -> bool {
        let mut recursive = BinarySearchTree::new();
        let mut iterative = BinarySearchTree::new();
        for x in xs {
            recursive.insert(x);
            iterative.insert_iterative(x);
        }

        let mut recursive_out = Vec::new();
        let mut iterative_out = Vec::new();
        recursive.write_tree(&mut recursive_out).is_ok()
            && iterative.write_tree(&mut iterative_out).is_ok()
            && recursive_out == iterative_out
    }
}
