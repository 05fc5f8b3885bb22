//! An unbalanced Binary Search Tree. Every node owns its children outright (there are no parent
//! pointers) so the whole structure is a plain recursive `enum` of boxed nodes.
//!
//! The tree never rebalances itself. Inserting values in sorted order produces a tree that is
//! really a linked list and every operation degrades to `O(N)`. Inserting in a "random enough"
//! order keeps the height near `O(lg N)`.
//!
//! Collecting, extending, [`insert_iterative`][BinarySearchTree::insert_iterative], iteration,
//! `clone` and drop all work in loops. Most other queries recurse once per level so on a
//! degenerate tree of many thousands of values they can overflow the thread's stack.
//!
//! # Examples
//!
//! ```
//! use classic_collections::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! for x in [5, 3, 8, 1, 4] {
//!     assert!(tree.insert(x));
//! }
//!
//! // Values are only stored once.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.to_vec(), vec![&1, &3, &4, &5, &8]);
//! assert_eq!(tree.height(), Some(2));
//! assert_eq!(tree.get(2), Ok(&4));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&8));
//!
//! assert!(tree.remove(&3));
//! assert!(!tree.contains(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::mem;

use crate::util::{Insertion, Removal};
use crate::Error;

/// A Binary Search Tree storing each distinct value once. It can be used for inserting, finding,
/// and removing values as well as rank and range queries over them.
pub struct BinarySearchTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    /// Copies the tree node for node so the copy has the same shape. Works with an explicit stack
    /// instead of recursing so degenerate trees can be cloned too.
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Visit(&'a Tree<T>),
            Join(&'a T),
        }

        let mut steps = vec![Step::Visit(&self.root)];
        let mut built = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Tree::Leaf) => built.push(Tree::Leaf),
                Step::Visit(Tree::Node(node)) => {
                    // The left copy is finished first so it ends up below the right one.
                    steps.push(Step::Join(&node.value));
                    steps.push(Step::Visit(&node.right));
                    steps.push(Step::Visit(&node.left));
                }
                Step::Join(value) => {
                    let right = built.pop().unwrap_or(Tree::Leaf);
                    let left = built.pop().unwrap_or(Tree::Leaf);
                    built.push(Tree::Node(Box::new(Node {
                        value: value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().unwrap_or(Tree::Leaf),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub const fn new() -> Self {
        Self {
            root: Tree::Leaf,
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` as a new leaf unless an equal value is already stored. Returns whether the
    /// tree changed.
    ///
    /// The search checks for equality at each node before deciding which way to go so the only
    /// values sent left are ones strictly less than the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = self.root.insert(value).changed();
        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// The same as [`insert`][Self::insert] but walks down the tree with a loop instead of
    /// recursing. Both produce identically shaped trees for the same sequence of values.
    pub fn insert_iterative(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut cursor = &mut self.root;
        while let Tree::Node(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return false,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }

        *cursor = Tree::Node(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes the value equal to `value` from the tree. Returns whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(!tree.remove(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes the value equal to `value` from the tree and returns the value that was stored.
    ///
    /// A node with two children isn't unlinked. Instead its value is replaced by its in-order
    /// successor (the smallest value of its right subtree) and the successor's node is unlinked.
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = self.root.remove(value).into_value();
        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }

    /// Whether a value equal to `value` is stored in the tree. Runs in `O(height)`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.contains(value)
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has no
    /// height at all and a tree with a single node has a height of 0.
    pub fn height(&self) -> Option<usize> {
        self.root.height()
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Every value in the tree in ascending order.
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Result<&T, Error> {
        self.root.leftmost().ok_or(Error::Empty)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Result<&T, Error> {
        self.root.rightmost().ok_or(Error::Empty)
    }

    /// The value with the given `rank`, i.e. the value at index `rank` of the sorted values. A
    /// `rank` of 0 is the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{tree::BinarySearchTree, Error};
    ///
    /// let tree: BinarySearchTree<_> = [10, 30, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.get(1), Ok(&20));
    /// assert_eq!(tree.get(3), Err(Error::RankOutOfBounds { rank: 3, len: 3 }));
    /// ```
    pub fn get(&self, rank: usize) -> Result<&T, Error> {
        let out_of_bounds = Error::RankOutOfBounds {
            rank,
            len: self.len,
        };
        if rank >= self.len {
            return Err(out_of_bounds);
        }

        let mut remaining = rank;
        self.root.select(&mut remaining).ok_or(out_of_bounds)
    }

    /// Every value strictly less than `cutoff`, in ascending order.
    pub fn less_than(&self, cutoff: &T) -> Vec<&T>
    where
        T: Ord,
    {
        let mut found = Vec::new();
        self.root.collect_less_than(cutoff, &mut found);
        found
    }

    /// Every value strictly greater than `cutoff`, in ascending order.
    pub fn greater_than(&self, cutoff: &T) -> Vec<&T>
    where
        T: Ord,
    {
        let mut found = Vec::new();
        self.root.collect_greater_than(cutoff, &mut found);
        found
    }

    /// The number of nodes `depth` edges below the root.
    pub fn nodes_at_depth(&self, depth: usize) -> usize {
        self.root.nodes_at_depth(depth)
    }

    /// Writes the tree "on its side": the root is on the left and each node is printed on its own
    /// line, indented two spaces per level. A node's right subtree is written above it and its
    /// left subtree below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_tree(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "  3\n2\n  1\n");
    /// ```
    pub fn write_tree<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        self.root.write(out, 0)
    }

    /// [`write_tree`][Self::write_tree] to stdout.
    pub fn print_tree(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_tree(&mut out)
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        // Dropping the root directly would recurse once per level which overflows the stack on
        // degenerate trees.
        let mut pending = vec![self.root.take()];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(mut node) = tree {
                pending.push(node.left.take());
                pending.push(node.right.take());
            }
        }
        self.len = 0;
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Collecting sorted input builds a chain as deep as the input is long.
        for value in iter {
            self.insert_iterative(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the values of a [`BinarySearchTree`]. It keeps the path of nodes
/// whose left subtrees have been visited but whose own values haven't.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a BinarySearchTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.descend_left(&tree.root);
        iter
    }

    fn descend_left(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A subtree. Either empty or a boxed [`Node`] which owns its own subtrees.
enum Tree<T> {
    Leaf,
    Node(Box<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::Leaf
    }
}

impl<T> Tree<T> {
    fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn insert(&mut self, value: T) -> Insertion
    where
        T: Ord,
    {
        match self {
            Self::Leaf => {
                *self = Self::Node(Node::new_boxed(value));
                Insertion::Inserted
            }
            Self::Node(node) => match value.cmp(&node.value) {
                Ordering::Equal => Insertion::Duplicate,
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
            },
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Equal => true,
                Ordering::Greater => node.right.contains(value),
            },
        }
    }

    fn remove(&mut self, value: &T) -> Removal<T>
    where
        T: Ord,
    {
        let Self::Node(node) = self else {
            return Removal::Absent;
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left.remove(value),
            Ordering::Greater => node.right.remove(value),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // A leaf or a node with a single child is replaced by that child.
                (Self::Leaf, only) | (only, Self::Leaf) => match mem::replace(self, only) {
                    Self::Node(removed) => Removal::Removed(removed.value),
                    Self::Leaf => unreachable!("`remove` matched a node but replaced a leaf"),
                },
                (left, Self::Node(right)) => {
                    let (successor, rest) = right.pop_min();

                    if cfg!(debug_assertions) {
                        if let Self::Node(left) = &left {
                            assert!(left.value < successor);
                        }
                        if let Self::Node(rest) = &rest {
                            assert!(successor < rest.value);
                        }
                    }

                    node.left = left;
                    node.right = rest;
                    Removal::Removed(mem::replace(&mut node.value, successor))
                }
            },
        }
    }

    fn height(&self) -> Option<usize> {
        match self {
            Self::Leaf => None,
            Self::Node(node) => Some(
                node.left
                    .height()
                    .max(node.right.height())
                    .map_or(0, |child_height| child_height + 1),
            ),
        }
    }

    fn leftmost(&self) -> Option<&T> {
        let mut node = match self {
            Self::Leaf => return None,
            Self::Node(node) => node,
        };
        while let Self::Node(left) = &node.left {
            node = left;
        }

        Some(&node.value)
    }

    fn rightmost(&self) -> Option<&T> {
        let mut node = match self {
            Self::Leaf => return None,
            Self::Node(node) => node,
        };
        while let Self::Node(right) = &node.right {
            node = right;
        }

        Some(&node.value)
    }

    /// In-order search for the value `remaining` positions into this subtree. Each value visited
    /// before it counts `remaining` down by one.
    fn select(&self, remaining: &mut usize) -> Option<&T> {
        let Self::Node(node) = self else {
            return None;
        };

        if let Some(found) = node.left.select(remaining) {
            return Some(found);
        }
        if *remaining == 0 {
            return Some(&node.value);
        }
        *remaining -= 1;

        node.right.select(remaining)
    }

    fn collect_less_than<'a>(&'a self, cutoff: &T, found: &mut Vec<&'a T>)
    where
        T: Ord,
    {
        let Self::Node(node) = self else {
            return;
        };

        node.left.collect_less_than(cutoff, found);
        // Everything on the right is larger than this node so there's nothing more to find unless
        // this node qualifies.
        if node.value < *cutoff {
            found.push(&node.value);
            node.right.collect_less_than(cutoff, found);
        }
    }

    fn collect_greater_than<'a>(&'a self, cutoff: &T, found: &mut Vec<&'a T>)
    where
        T: Ord,
    {
        let Self::Node(node) = self else {
            return;
        };

        if node.value > *cutoff {
            node.left.collect_greater_than(cutoff, found);
            found.push(&node.value);
        }
        node.right.collect_greater_than(cutoff, found);
    }

    fn nodes_at_depth(&self, depth: usize) -> usize {
        match (self, depth) {
            (Self::Leaf, _) => 0,
            (Self::Node(_), 0) => 1,
            (Self::Node(node), _) => {
                node.left.nodes_at_depth(depth - 1) + node.right.nodes_at_depth(depth - 1)
            }
        }
    }

    fn write<W>(&self, out: &mut W, depth: usize) -> io::Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        if let Self::Node(node) = self {
            node.right.write(out, depth + 1)?;
            writeln!(out, "{:indent$}{}", "", node.value, indent = depth * 2)?;
            node.left.write(out, depth + 1)?;
        }

        Ok(())
    }
}

/// A `Node` holds a value and always has two children although those children may be
/// [`Leaf`][Tree::Leaf]s.
struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
        })
    }

    /// Unlinks the smallest value in the subtree rooted at this node. Returns that value along with
    /// whatever is left of the subtree. Only the node holding the minimum is deallocated.
    fn pop_min(mut self: Box<Self>) -> (T, Tree<T>) {
        match self.left.take() {
            Tree::Leaf => {
                let Self { value, right, .. } = *self;
                (value, right)
            }
            Tree::Node(left) => {
                let (min, rest) = left.pop_min();
                self.left = rest;
                (min, Tree::Node(self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(tree: &BinarySearchTree<i32>) -> String {
        let mut out = Vec::new();
        tree.write_tree(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn root_value(tree: &BinarySearchTree<i32>) -> Option<i32> {
        match &tree.root {
            Tree::Leaf => None,
            Tree::Node(n) => Some(n.value),
        }
    }

    #[test]
    fn small_tree_queries() {
        let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.to_vec(), vec![&1, &3, &4, &5, &8]);
        assert_eq!(tree.height(), Some(2));
        assert_eq!(tree.get(2), Ok(&4));
        assert_eq!(tree.min(), Ok(&1));
        assert_eq!(tree.max(), Ok(&8));
        assert_eq!(tree.nodes_at_depth(0), 1);
        assert_eq!(tree.nodes_at_depth(1), 2);
        assert_eq!(tree.nodes_at_depth(2), 2);
        assert_eq!(tree.nodes_at_depth(3), 0);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = BinarySearchTree::new();

        assert!(tree.insert(5));
        assert!(!tree.insert(5));
        assert!(!tree.insert_iterative(5));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn height_of_tiny_trees() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.height(), None);

        tree.insert(1);
        assert_eq!(tree.height(), Some(0));

        tree.insert(2);
        assert_eq!(tree.height(), Some(1));
    }

    #[test]
    fn empty_tree() {
        let mut tree = BinarySearchTree::<i32>::new();

        assert!(!tree.remove(&1));
        assert!(!tree.contains(&1));
        assert_eq!(tree.min(), Err(Error::Empty));
        assert_eq!(tree.max(), Err(Error::Empty));
        assert_eq!(tree.get(0), Err(Error::RankOutOfBounds { rank: 0, len: 0 }));
        assert!(tree.less_than(&1).is_empty());
        assert_eq!(tree.nodes_at_depth(0), 0);
        assert_eq!(rendered(&tree), "");
    }

    #[test]
    fn remove_leaf() {
        let mut tree: BinarySearchTree<_> = [5, 3, 7].into_iter().collect();

        assert!(tree.remove(&7));
        assert!(!tree.contains(&7));
        assert!(tree.contains(&3));
        assert!(tree.contains(&5));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_with_only_right_child() {
        let mut tree: BinarySearchTree<_> = [5, 3, 7, 9].into_iter().collect();

        assert_eq!(tree.take(&7), Some(7));
        assert_eq!(tree.to_vec(), vec![&3, &5, &9]);
        assert_eq!(rendered(&tree), "  9\n5\n  3\n");
    }

    #[test]
    fn remove_with_only_left_child() {
        let mut tree: BinarySearchTree<_> = [5, 3, 7, 6].into_iter().collect();

        assert_eq!(tree.take(&7), Some(7));
        assert_eq!(tree.to_vec(), vec![&3, &5, &6]);
        assert_eq!(rendered(&tree), "  6\n5\n  3\n");
    }

    #[test]
    fn remove_with_two_children_promotes_successor() {
        let mut tree: BinarySearchTree<_> = [10, 5, 15, 3, 7, 12, 18].into_iter().collect();

        assert!(tree.remove(&10));
        assert_eq!(root_value(&tree), Some(12));
        assert_eq!(tree.to_vec(), vec![&3, &5, &7, &12, &15, &18]);
        assert_eq!(tree.len(), 6);
        assert_eq!(
            rendered(&tree),
            "    18\n  15\n12\n    7\n  5\n    3\n"
        );
    }

    #[test]
    fn remove_with_deeper_successor() {
        let mut tree: BinarySearchTree<_> = [5, 3, 9, 7, 10, 8].into_iter().collect();

        // 7 is the successor and its right child 8 takes its place under 9.
        assert_eq!(tree.take(&5), Some(5));
        assert_eq!(root_value(&tree), Some(7));
        assert_eq!(rendered(&tree), "    10\n  9\n    8\n7\n  3\n");
    }

    #[test]
    fn remove_root_until_empty() {
        let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();

        assert!(tree.remove(&2));
        assert!(tree.remove(&3));
        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), None);
    }

    #[test]
    fn ranges_exclude_cutoff() {
        let tree: BinarySearchTree<_> = [50, 20, 70, 10, 30, 60, 80].into_iter().collect();

        assert_eq!(tree.less_than(&30), vec![&10, &20]);
        assert_eq!(tree.greater_than(&30), vec![&50, &60, &70, &80]);
        assert_eq!(tree.less_than(&55), vec![&10, &20, &30, &50]);
        assert_eq!(tree.greater_than(&80), Vec::<&i32>::new());
        assert_eq!(tree.less_than(&10), Vec::<&i32>::new());
    }

    #[test]
    fn renders_right_subtree_first() {
        let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();

        assert_eq!(rendered(&tree), "  8\n5\n    4\n  3\n    1\n");
    }

    #[test]
    fn iterative_insert_builds_same_shape() {
        let values = [8, 3, 10, 1, 6, 14, 4, 7, 13, 6, 1];
        let mut recursive = BinarySearchTree::new();
        let mut iterative = BinarySearchTree::new();
        for value in values {
            recursive.insert(value);
            iterative.insert_iterative(value);
        }

        assert_eq!(rendered(&recursive), rendered(&iterative));
        assert_eq!(recursive.len(), iterative.len());
    }

    #[test]
    fn degenerate_tree_clones_and_drops_without_recursing() {
        // Sorted insertion builds this same shape but takes quadratic time.
        let mut root = Tree::Leaf;
        for value in (0..100_000).rev() {
            root = Tree::Node(Box::new(Node {
                value,
                left: Tree::Leaf,
                right: root,
            }));
        }
        let tree = BinarySearchTree { root, len: 100_000 };

        assert_eq!(tree.min(), Ok(&0));
        assert_eq!(tree.max(), Ok(&99_999));

        let copy = tree.clone();
        assert_eq!(copy.len(), 100_000);
        assert_eq!(copy.max(), Ok(&99_999));
        assert!(copy.iter().eq(tree.iter()));
        drop(tree);
        drop(copy);
    }

    #[test]
    fn collecting_sorted_values_builds_a_chain() {
        let tree: BinarySearchTree<i32> = (0..30_000).collect();

        assert_eq!(tree.len(), 30_000);
        assert_eq!(tree.min(), Ok(&0));
        assert_eq!(tree.max(), Ok(&29_999));
        assert!(tree.iter().copied().eq(0..30_000));
    }

    #[test]
    fn clone_is_independent_and_same_shape() {
        let mut tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
        let copy = tree.clone();

        assert_eq!(rendered(&copy), rendered(&tree));
        assert_eq!(copy.len(), tree.len());

        assert!(tree.remove(&3));
        assert!(copy.contains(&3));
        assert_eq!(copy.len(), 9);

        let empty = BinarySearchTree::<i32>::new().clone();
        assert!(empty.is_empty());
        assert_eq!(empty.height(), None);
    }

    #[test]
    fn print_tree_leaves_tree_alone() {
        let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();

        assert!(tree.print_tree().is_ok());
        assert_eq!(tree.to_vec(), vec![&1, &3, &4, &5, &8]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn clear_resets() {
        let mut tree: BinarySearchTree<_> = (0..10).collect();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
        assert!(tree.insert(3));
    }

    #[test]
    fn iter_is_exact_size() {
        let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3].into_iter().collect();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 5);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&3, &4, &6]);
    }
}
