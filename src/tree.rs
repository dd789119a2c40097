//! A self-adjusting binary search tree ("splay tree") storing a set of keys.
//!
//! Every operation that touches a key finishes by rotating the touched node up
//! to the root. The tree keeps no parent pointers: each node is owned
//! exclusively by its parent link, and the information a splay step needs (how
//! far below the current node the touched node sits, and through which two
//! child directions) is carried back up the recursive descent in a small
//! splay-state value instead.
//!
//! # Examples
//!
//! ```
//! use splay_tree::SplayTree;
//!
//! let mut tree = SplayTree::new();
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(!tree.insert(2)); // already present
//!
//! assert!(tree.contains(&1));
//! assert_eq!(tree.root(), Some(&1)); // the found key is now the root
//!
//! assert!(tree.remove(&2));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, NaturalOrder};

/// A child slot. Owns the entire subtree hanging below it.
type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Which child slot a downward step took.
#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

/// Where, relative to the current subtree root, the node being promoted sits.
///
/// This is the stand-in for parent pointers. A splay step never needs to look
/// more than two levels down, so as each recursive frame returns it only has to
/// know how many levels below it the promoted node is (re-based to 0 after
/// every rotation, so never more than 2) and the directions of the last two
/// downward steps toward it.
#[derive(Clone, Copy, Debug)]
struct SplayState {
    /// Levels between the current subtree root and the node to promote.
    depth: u8,
    /// Direction of the most recent downward step toward the node.
    first: Side,
    /// Direction of the step below that.
    second: Side,
}

impl SplayState {
    /// The node to promote sits above this frame. Returned for an empty
    /// subtree (a miss promotes the last node on the search path) and for a
    /// just-deleted node (the ascent promotes whatever took its place).
    fn above() -> Self {
        SplayState {
            depth: 0,
            first: Side::Left,
            second: Side::Left,
        }
    }

    /// The current subtree root is itself the node to promote.
    fn here() -> Self {
        SplayState {
            depth: 1,
            first: Side::Left,
            second: Side::Left,
        }
    }

    /// Records the direction the current frame descended.
    fn through(self, side: Side) -> Self {
        SplayState {
            first: side,
            ..self
        }
    }
}

/// Rotates the subtree right: the left child becomes the subtree root and the
/// old root becomes its right child. O(1), no allocation.
fn rotate_right<K>(link: &mut Link<K>) {
    let mut node = link.take().expect("Cannot rotate an empty subtree");
    let mut pivot = node.left.take().expect("Rotate right requires a left child");
    node.left = pivot.right.take();
    pivot.right = Some(node);
    *link = Some(pivot);
}

/// Mirror image of [`rotate_right`].
fn rotate_left<K>(link: &mut Link<K>) {
    let mut node = link.take().expect("Cannot rotate an empty subtree");
    let mut pivot = node.right.take().expect("Rotate left requires a right child");
    node.right = pivot.left.take();
    pivot.left = Some(node);
    *link = Some(pivot);
}

/// Runs one ascending splay step on `link`, then slides the two-step window in
/// `state` one level up for the next frame.
///
/// With the node to promote one level down and this frame at the overall root,
/// a single rotation toward it suffices (zig). Two levels down makes this frame
/// the grandparent: a straight path gets two same-direction rotations here
/// (zig-zig), a bent path gets a rotation on the child link followed by one
/// here (zig-zag). Each fired step re-bases `depth` to 0.
fn splay_step<K>(link: &mut Link<K>, state: &mut SplayState, at_root: bool) {
    if state.depth == 1 && at_root {
        match state.first {
            Side::Left => rotate_right(link),
            Side::Right => rotate_left(link),
        }
        state.depth = 0;
    } else if state.depth == 2 {
        match (state.first, state.second) {
            (Side::Left, Side::Left) => {
                rotate_right(link);
                rotate_right(link);
            }
            (Side::Right, Side::Right) => {
                rotate_left(link);
                rotate_left(link);
            }
            (Side::Right, Side::Left) => {
                let node = link.as_mut().expect("Cannot splay an empty subtree");
                rotate_right(&mut node.right);
                rotate_left(link);
            }
            (Side::Left, Side::Right) => {
                let node = link.as_mut().expect("Cannot splay an empty subtree");
                rotate_left(&mut node.left);
                rotate_right(link);
            }
        }
        state.depth = 0;
    }
    state.second = state.first;
    state.depth += 1;
}

/// Detaches the minimum node of a non-empty subtree, leaving the rest of the
/// subtree in place. The detached node's right subtree takes over its slot.
fn detach_min<K>(link: &mut Link<K>) -> Box<Node<K>> {
    let node = link.as_mut().expect("Cannot take the minimum of an empty subtree");
    if node.left.is_some() {
        detach_min(&mut node.left)
    } else {
        let mut min = link.take().expect("Checked non-empty above");
        *link = min.right.take();
        min
    }
}

/// A self-adjusting binary search tree storing a set of keys.
///
/// Searching, inserting, and removing all splay the touched node to the root,
/// which gives amortized `O(lg N)` cost per operation without any balance
/// bookkeeping. Individual operations may take `O(N)` on a tree that a
/// pathological access sequence has stretched into a spine; the splay performed
/// by that same operation then shortens the spine. [`height`][SplayTree::height]
/// reports the current worst case, which also bounds the recursion depth the
/// operations use.
///
/// Keys are ordered by a [`Compare`] implementation fixed at construction;
/// [`new`][SplayTree::new] uses ascending [`Ord`] order.
pub struct SplayTree<K, C = NaturalOrder> {
    root: Link<K>,
    len: usize,
    cmp: C,
}

impl<K> SplayTree<K> {
    /// Creates an empty tree ordered by ascending [`Ord`] order.
    pub fn new() -> Self {
        SplayTree {
            root: None,
            len: 0,
            cmp: NaturalOrder,
        }
    }
}

impl<K> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Clone for SplayTree<K, C>
where
    K: Clone,
    C: Clone,
{
    /// Deep copy: every node is cloned into a new ownership graph, so the copy
    /// never aliases the original.
    fn clone(&self) -> Self {
        SplayTree {
            root: self.root.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K, C> fmt::Debug for SplayTree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplayTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K, C> SplayTree<K, C> {
    /// Creates an empty tree ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        SplayTree {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The number of keys in the tree. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The key at the root: the most recently splayed key, or `None` when the
    /// tree is empty.
    ///
    /// After a successful [`insert`][SplayTree::insert] or a hit in
    /// [`contains`][SplayTree::contains] this is the key that was passed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.root(), None);
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.root(), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// The height of the tree: the longest path from the root down to a leaf.
    ///
    /// This bounds the recursion depth (and stack use) of the mutating
    /// operations. It amortizes to `O(lg N)` but can reach `O(N)` before the
    /// self-adjustment corrects a pathological shape, so callers running on
    /// small stacks can check it between operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        fn height_of<K>(link: &Link<K>) -> usize {
            match link {
                None => 0,
                Some(node) => height_of(&node.left).max(height_of(&node.right)) + 1,
            }
        }
        height_of(&self.root)
    }
}

impl<K, C> SplayTree<K, C>
where
    C: Compare<K>,
{
    /// Returns whether `key` is present.
    ///
    /// On a hit the found node is splayed to the root, making another access
    /// to the same (or a nearby) key cheap. On a miss the last node on the
    /// search path is splayed instead; either way the key set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&mut self, key: &K) -> bool {
        let (found, _) = Self::search(&self.cmp, &mut self.root, key, true);
        found
    }

    /// Inserts `key`, returning whether it was newly added.
    ///
    /// Returns `false` for a key that is already present; no duplicate is
    /// created. In both cases the node holding the key ends up at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let (inserted, _) = Self::insert_into(&self.cmp, &mut self.root, key, true);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// When the removed node had two children, the minimum of its right
    /// subtree takes its place; the ascent back to the root then splays the
    /// surviving node nearest the removal site.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let (removed, _) = Self::remove_from(&self.cmp, &mut self.root, key, true);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn search(cmp: &C, link: &mut Link<K>, key: &K, at_root: bool) -> (bool, SplayState) {
        let node = match link {
            None => return (false, SplayState::above()),
            Some(node) => node,
        };
        let (found, mut state) = match cmp.compare(key, &node.key) {
            Ordering::Less => {
                let (found, state) = Self::search(cmp, &mut node.left, key, false);
                (found, state.through(Side::Left))
            }
            Ordering::Greater => {
                let (found, state) = Self::search(cmp, &mut node.right, key, false);
                (found, state.through(Side::Right))
            }
            Ordering::Equal => return (true, SplayState::here()),
        };
        splay_step(link, &mut state, at_root);
        (found, state)
    }

    fn insert_into(cmp: &C, link: &mut Link<K>, key: K, at_root: bool) -> (bool, SplayState) {
        let node = match link {
            None => {
                *link = Some(Node::new_boxed(key));
                return (true, SplayState::here());
            }
            Some(node) => node,
        };
        let (inserted, mut state) = match cmp.compare(&key, &node.key) {
            Ordering::Less => {
                let (inserted, state) = Self::insert_into(cmp, &mut node.left, key, false);
                (inserted, state.through(Side::Left))
            }
            Ordering::Greater => {
                let (inserted, state) = Self::insert_into(cmp, &mut node.right, key, false);
                (inserted, state.through(Side::Right))
            }
            // The existing node still floats up, so a repeated insert behaves
            // like a successful search.
            Ordering::Equal => return (false, SplayState::here()),
        };
        splay_step(link, &mut state, at_root);
        (inserted, state)
    }

    fn remove_from(cmp: &C, link: &mut Link<K>, key: &K, at_root: bool) -> (bool, SplayState) {
        let node = match link {
            None => return (false, SplayState::above()),
            Some(node) => node,
        };
        let (removed, mut state) = match cmp.compare(key, &node.key) {
            Ordering::Less => {
                let (removed, state) = Self::remove_from(cmp, &mut node.left, key, false);
                (removed, state.through(Side::Left))
            }
            Ordering::Greater => {
                let (removed, state) = Self::remove_from(cmp, &mut node.right, key, false);
                (removed, state.through(Side::Right))
            }
            Ordering::Equal => {
                let mut node = link.take().expect("Compared against this node");
                *link = match (node.left.take(), node.right.take()) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, mut right) => {
                        // The minimum of the right subtree is detached without
                        // splaying its search path and reused as the new
                        // subtree root.
                        let mut successor = detach_min(&mut right);
                        successor.left = left;
                        successor.right = right;
                        Some(successor)
                    }
                };
                // Splaying starts one level up, promoting whatever now
                // occupies the removal site.
                return (true, SplayState::above());
            }
        };
        splay_step(link, &mut state, at_root);
        (removed, state)
    }
}
