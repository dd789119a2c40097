//! Key orderings for [`SplayTree`][crate::SplayTree].
//!
//! The tree never requires `K: Ord` directly. All comparisons go through a
//! [`Compare`] implementation held by the tree, so the same key type can be
//! stored under different orderings. [`NaturalOrder`] is the default and simply
//! defers to `Ord`; any closure of the right shape also works.

use std::cmp::Ordering;

/// A total ordering between keys of type `K`.
///
/// Implementations must be consistent: for any `a` and `b`, exactly one of
/// `Less`, `Equal`, or `Greater` is returned, and the relation is transitive.
/// An inconsistent comparator breaks the tree's ordering invariant; the tree
/// does not attempt to detect or recover from that.
pub trait Compare<K> {
    /// Compares `a` to `b`, returning where `a` sorts relative to `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The default ordering: ascending [`Ord`] order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<K: Ord> Compare<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Closures and fn pointers can be used as comparators directly.
///
/// # Examples
///
/// ```
/// use splay_tree::SplayTree;
///
/// // Larger keys sort first.
/// let mut tree = SplayTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.insert(1);
/// tree.insert(2);
///
/// assert!(tree.contains(&1));
/// ```
impl<K, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
