use std::fmt;
use std::slice;

use super::{fmt_elements, Set};
use crate::Error;

/// A [`Set`] keeping its elements in ascending order. Lookups are binary searches over the
/// sorted elements so membership is `O(lg N)` while insertion and removal still shift the
/// elements after the affected position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedSet<T> {
    elements: Vec<T>,
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedSet<T> {
    /// Generates a new, empty `SortedSet`.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The elements in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// The smallest element.
    pub fn min(&self) -> Result<&T, Error> {
        self.elements.first().ok_or(Error::Empty)
    }

    /// The largest element.
    pub fn max(&self) -> Result<&T, Error> {
        self.elements.last().ok_or(Error::Empty)
    }
}

impl<T> SortedSet<T>
where
    T: Ord,
{
    /// A sorted copy of any other set.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::set::{SortedSet, UnsortedSet};
    ///
    /// let unsorted: UnsortedSet<_> = [3, 1, 2].into_iter().collect();
    /// let sorted = SortedSet::from_set(&unsorted);
    ///
    /// assert_eq!(sorted.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn from_set<S>(other: &S) -> Self
    where
        S: Set<T>,
        T: Clone,
    {
        other.iter().cloned().collect()
    }
}

impl<T> Set<T> for SortedSet<T>
where
    T: Ord,
{
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn insert(&mut self, item: T) -> bool {
        match self.elements.binary_search(&item) {
            Ok(_) => false,
            Err(pos) => {
                self.elements.insert(pos, item);
                true
            }
        }
    }

    fn remove(&mut self, item: &T) -> bool {
        match self.elements.binary_search(item) {
            Ok(pos) => {
                self.elements.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(keep);
    }

    fn contains(&self, item: &T) -> bool {
        self.elements.binary_search(item).is_ok()
    }
}

impl<T> fmt::Display for SortedSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, &self.elements)
    }
}

impl<T> FromIterator<T> for SortedSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        elements.sort();
        elements.dedup();
        Self { elements }
    }
}

impl<T> Extend<T> for SortedSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
