//! Sets: collections holding each distinct element at most once.
//!
//! The [`Set`] trait only asks implementors for storage primitives (`len`, `iter`, `insert`,
//! `remove`, and `retain`). Membership and set algebra are provided on top of those and may be
//! overridden when an implementation can do better, e.g. [`SortedSet`] uses binary search for
//! [`contains`][Set::contains].
//!
//! # Examples
//!
//! ```
//! use classic_collections::set::{Set, SortedSet, UnsortedSet};
//!
//! let evens: UnsortedSet<_> = [6, 2, 4].into_iter().collect();
//! let small: SortedSet<_> = [1, 2, 3, 4].into_iter().collect();
//!
//! assert_eq!(small.intersection(&evens).to_string(), "(2, 4)");
//! assert_eq!(small.difference(&evens).to_string(), "(1, 3)");
//! assert_eq!(evens.union(&small).len(), 5);
//! ```

use std::fmt;

mod sorted;
mod unsorted;

pub use sorted::SortedSet;
pub use unsorted::UnsortedSet;

/// A collection of distinct elements.
pub trait Set<T>
where
    T: Eq,
{
    /// The iterator returned by [`iter`][Set::iter].
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Iterates over every element once. The order is up to the implementation.
    fn iter(&self) -> Self::Iter<'_>;

    /// The number of elements in the set.
    fn len(&self) -> usize;

    /// Adds `item` unless an equal element is already present. Returns whether the set changed.
    fn insert(&mut self, item: T) -> bool;

    /// Removes the element equal to `item`. Returns whether the set changed.
    fn remove(&mut self, item: &T) -> bool;

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool;

    /// Whether the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an element equal to `item` is in the set.
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Whether every element of `other` is also in this set.
    fn contains_all<S>(&self, other: &S) -> bool
    where
        S: Set<T>,
    {
        other.iter().all(|element| self.contains(element))
    }

    /// Inserts a clone of every element of `other`. Returns whether the set changed.
    fn add_all<S>(&mut self, other: &S) -> bool
    where
        S: Set<T>,
        T: Clone,
    {
        let mut changed = false;
        for element in other.iter() {
            changed |= self.insert(element.clone());
        }

        changed
    }

    /// Removes every element.
    fn clear(&mut self) {
        self.retain(|_| false);
    }

    /// A new set holding the elements in either this set or `other`.
    fn union<S>(&self, other: &S) -> Self
    where
        Self: Clone,
        S: Set<T>,
        T: Clone,
    {
        let mut union = self.clone();
        union.add_all(other);
        union
    }

    /// A new set holding the elements in both this set and `other`.
    fn intersection<S>(&self, other: &S) -> Self
    where
        Self: Clone,
        S: Set<T>,
    {
        let mut intersection = self.clone();
        intersection.retain(|element| other.contains(element));
        intersection
    }

    /// A new set holding the elements of this set that aren't in `other`.
    fn difference<S>(&self, other: &S) -> Self
    where
        Self: Clone,
        S: Set<T>,
    {
        let mut difference = self.clone();
        difference.retain(|element| !other.contains(element));
        difference
    }

    /// Whether both sets hold exactly the same elements, regardless of how they store them.
    fn same_elements<S>(&self, other: &S) -> bool
    where
        S: Set<T>,
    {
        self.len() == other.len() && self.contains_all(other)
    }
}

/// Formats elements as `(e1, e2, ..., en)`.
fn fmt_elements<'a, T, I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "(")?;
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, ")")
}
