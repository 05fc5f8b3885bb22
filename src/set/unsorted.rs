use std::fmt;
use std::slice;

use super::{fmt_elements, Set};

/// A [`Set`] keeping its elements in insertion order. Every lookup is a linear scan so it only
/// needs `T: Eq`.
#[derive(Debug, Clone)]
pub struct UnsortedSet<T> {
    elements: Vec<T>,
}

impl<T> Default for UnsortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnsortedSet<T> {
    /// Generates a new, empty `UnsortedSet`.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Set<T> for UnsortedSet<T>
where
    T: Eq,
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
        if self.contains(&item) {
            return false;
        }

        self.elements.push(item);
        true
    }

    fn remove(&mut self, item: &T) -> bool {
        match self.elements.iter().position(|element| element == item) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(keep);
    }
}

impl<T> PartialEq for UnsortedSet<T>
where
    T: Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_elements(other)
    }
}

impl<T> Eq for UnsortedSet<T> where T: Eq {}

impl<T> fmt::Display for UnsortedSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, &self.elements)
    }
}

impl<T> FromIterator<T> for UnsortedSet<T>
where
    T: Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for UnsortedSet<T>
where
    T: Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
