//! Property tests driving the tree through its public API only, mirroring
//! every sequence of operations against a `HashSet`.

use std::collections::HashSet;

use quickcheck::{quickcheck, Arbitrary, Gen};

use splay_tree::SplayTree;

/// An enum for the various kinds of "things" to do to
/// a splay tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K> {
    Insert(K),
    Remove(K),
    Contains(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Contains(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and a hash set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut SplayTree<i8>, set: &mut HashSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => assert_eq!(tree.insert(*k), set.insert(*k)),
            Op::Remove(k) => assert_eq!(tree.remove(k), set.remove(k)),
            Op::Contains(k) => assert_eq!(tree.contains(k), set.contains(k)),
        }
    }
}

quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = SplayTree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
    }
}

quickcheck! {
    fn contains_inserted(xs: Vec<i8>) -> bool {
        let mut tree = SplayTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = SplayTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = SplayTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let deleted: HashSet<_> = deletes.iter().copied().collect();
        deletes.iter().all(|x| !tree.contains(x))
            && xs.iter().filter(|x| !deleted.contains(*x)).all(|x| tree.contains(x))
    }
}

quickcheck! {
    fn insert_splays_the_key_to_the_root(xs: Vec<i8>) -> bool {
        let mut tree = SplayTree::new();

        xs.iter().all(|x| {
            tree.insert(*x);
            tree.root() == Some(x)
        })
    }
}

quickcheck! {
    fn len_counts_distinct_keys(xs: Vec<i8>) -> bool {
        let mut tree = SplayTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.len() == distinct.len()
    }
}
