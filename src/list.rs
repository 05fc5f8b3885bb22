//! A doubly linked list. Each node points at both of its neighbours so elements can be added and
//! removed at either end in `O(1)` and positional lookups walk in from whichever end is closer.
//!
//! # Examples
//!
//! ```
//! use classic_collections::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! list.insert(1, 10).unwrap();
//! assert_eq!(list.get(1), Ok(&10));
//! assert_eq!(list.index_of(&3), Some(3));
//!
//! assert_eq!(list.remove_at(0), Ok(1));
//! assert_eq!(list.pop_back(), Some(3));
//! assert_eq!(list.to_string(), "[10, 2]");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::Error;

/// A doubly linked list owning its elements.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // Tells the drop checker that we own `Node<T>`s.
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    /// Formats the list as `[e1, e2, ..., en]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub const fn new() -> Self {
        Self {
            head: Link(None),
            tail: Link(None),
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `item` to the end of the list.
    pub fn push_back(&mut self, item: T) {
        let node = Node::new_leaked(item, self.tail, Link(None));
        match self.tail.node_mut() {
            Some(tail) => tail.next = Link(Some(node)),
            None => self.head = Link(Some(node)),
        }
        self.tail = Link(Some(node));
        self.len += 1;
    }

    /// Prepends `item` to the front of the list.
    pub fn push_front(&mut self, item: T) {
        let node = Node::new_leaked(item, Link(None), self.head);
        match self.head.node_mut() {
            Some(head) => head.prev = Link(Some(node)),
            None => self.tail = Link(Some(node)),
        }
        self.head = Link(Some(node));
        self.len += 1;
    }

    /// Removes and returns the first element, if there is one.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: The head belongs to this list and no references into it are alive because we
        // hold `&mut self`.
        self.head.0.map(|head| unsafe { self.unlink(head) })
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: The tail belongs to this list and no references into it are alive because we
        // hold `&mut self`.
        self.tail.0.map(|tail| unsafe { self.unlink(tail) })
    }

    /// The first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.head.node().map(|node| &node.value)
    }

    /// The last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.tail.node().map(|node| &node.value)
    }

    /// Inserts `item` so that it ends up at position `pos`, shifting everything at or after `pos`
    /// one place towards the back. `pos` may be `len()` to append.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{list::LinkedList, Error};
    ///
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    ///
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    ///
    /// assert_eq!(list.insert(9, 9), Err(Error::PositionOutOfBounds { position: 9, len: 4 }));
    /// ```
    pub fn insert(&mut self, pos: usize, item: T) -> Result<(), Error> {
        if pos == self.len {
            self.push_back(item);
            return Ok(());
        }

        let mut next = self.node_at(pos)?;
        // SAFETY: `next` and its predecessor belong to this list and no references into them are
        // alive because we hold `&mut self`.
        unsafe {
            let prev = next.as_ref().prev;
            let node = Node::new_leaked(item, prev, Link(Some(next)));
            next.as_mut().prev = Link(Some(node));
            match prev.0 {
                Some(mut prev) => prev.as_mut().next = Link(Some(node)),
                None => self.head = Link(Some(node)),
            }
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `pos`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, Error> {
        let node = self.node_at(pos)?;
        // SAFETY: `node_at` only returns nodes in this list and we hold `&mut self`.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes the first element equal to `item`. Returns whether the list changed.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find_from(self.head, |value| value == item) {
            Some((_, node)) => {
                // SAFETY: `find_from` only returns nodes in this list and we hold `&mut self`.
                unsafe { self.unlink(node) };
                true
            }
            None => false,
        }
    }

    /// The element at `pos`.
    pub fn get(&self, pos: usize) -> Result<&T, Error> {
        // SAFETY: `node_at` only returns nodes in this list. The returned reference borrows `self`
        // so the node can't be unlinked while it's alive.
        self.node_at(pos).map(|node| unsafe { &node.as_ref().value })
    }

    /// The element at `pos`, mutably.
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        // SAFETY: As in `get` but with `&mut self` guaranteeing exclusivity.
        self.node_at(pos).map(|mut node| unsafe { &mut node.as_mut().value })
    }

    /// Replaces the element at `pos` with `item`, returning the element that was there.
    pub fn set(&mut self, pos: usize, item: T) -> Result<T, Error> {
        self.get_mut(pos).map(|value| mem::replace(value, item))
    }

    /// The position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_from(self.head, |value| value == item).map(|(pos, _)| pos)
    }

    /// The position of the first element equal to `item` at or after `pos`. `pos` may be `len()`
    /// in which case nothing is found.
    pub fn index_of_from(&self, item: &T, pos: usize) -> Result<Option<usize>, Error>
    where
        T: PartialEq,
    {
        if pos == self.len {
            return Ok(None);
        }

        let start = self.node_at(pos)?;
        Ok(self
            .find_from(Link(Some(start)), |value| value == item)
            .map(|(offset, _)| pos + offset))
    }

    /// A new list holding clones of the elements in `start..stop`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::list::LinkedList;
    ///
    /// let list: LinkedList<_> = (0..6).collect();
    ///
    /// assert_eq!(list.sub_list(2, 5).unwrap().to_string(), "[2, 3, 4]");
    /// assert!(list.sub_list(3, 3).unwrap().is_empty());
    /// assert!(list.sub_list(4, 2).is_err());
    /// ```
    pub fn sub_list(&self, start: usize, stop: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        self.check_range(start, stop)?;

        Ok(self.iter().skip(start).take(stop - start).cloned().collect())
    }

    /// Removes every element in `start..stop`.
    pub fn remove_range(&mut self, start: usize, stop: usize) -> Result<(), Error> {
        self.check_range(start, stop)?;
        if start == stop {
            return Ok(());
        }

        let mut cursor = self.node_at(start)?;
        for _ in start..stop {
            // SAFETY: The range was checked so each `cursor` is a node in this list and we hold
            // `&mut self`. `next` is read before the node is freed.
            unsafe {
                let next = cursor.as_ref().next;
                self.unlink(cursor);
                match next.0 {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }

        Ok(())
    }

    /// Keeps only the elements for which `keep` returns `true`, in their original order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head.0;
        while let Some(node) = cursor {
            // SAFETY: `node` is in this list and we hold `&mut self`. `next` is read before the
            // node may be freed.
            unsafe {
                cursor = node.as_ref().next.0;
                if !keep(&node.as_ref().value) {
                    self.unlink(node);
                }
            }
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    fn check_range(&self, start: usize, stop: usize) -> Result<(), Error> {
        if start > stop || stop > self.len {
            return Err(Error::InvalidRange {
                start,
                stop,
                len: self.len,
            });
        }

        Ok(())
    }

    /// The node at `pos`, walking from the front or the back depending on which is closer.
    fn node_at(&self, pos: usize) -> Result<NonNull<Node<T>>, Error> {
        let out_of_bounds = Error::PositionOutOfBounds {
            position: pos,
            len: self.len,
        };
        if pos >= self.len {
            return Err(out_of_bounds);
        }

        let mut cursor = self.head;
        if pos <= self.len / 2 {
            for _ in 0..pos {
                cursor = cursor.node().map_or(Link(None), |node| node.next);
            }
        } else {
            cursor = self.tail;
            for _ in pos + 1..self.len {
                cursor = cursor.node().map_or(Link(None), |node| node.prev);
            }
        }

        cursor.0.ok_or(out_of_bounds)
    }

    /// Walks forward from `start` until `matches` accepts a value. Returns how many steps were
    /// taken along with the matching node.
    fn find_from<F>(&self, start: Link<T>, mut matches: F) -> Option<(usize, NonNull<Node<T>>)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = start;
        let mut steps = 0;
        while let Some(node) = cursor.node() {
            if matches(&node.value) {
                return cursor.0.map(|ptr| (steps, ptr));
            }
            cursor = node.next;
            steps += 1;
        }

        None
    }

    /// Detaches `node` from its neighbours, frees it, and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must belong to this list and nothing may reference it.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: Every node was allocated by `Node::new_leaked` using `Box` and the caller
        // guarantees nothing else references it.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        // SAFETY: The neighbours are distinct nodes of this list and aren't borrowed.
        unsafe {
            match node.prev.0 {
                Some(mut prev) => prev.as_mut().next = node.next,
                None => self.head = node.next,
            }
            match node.next.0 {
                Some(mut next) => next.as_mut().prev = node.prev,
                None => self.tail = node.prev,
            }
        }
        self.len -= 1;

        if cfg!(debug_assertions) {
            assert_eq!(self.head.0.is_none(), self.len == 0);
            assert_eq!(self.tail.0.is_none(), self.len == 0);
        }

        node.value
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A borrowing iterator over the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.0.map(|node| {
            // SAFETY: The iterator borrows the list for `'a` so the node outlives the reference.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.0.map(|node| {
            // SAFETY: As in `next`.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty link always points at a live node of the list it was read from.
        // Callers only hold the returned reference while the list is borrowed.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn node_mut(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: As in `node`. Callers hold `&mut` to the list so nothing else is borrowed.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }
}

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and hands ownership of it to whichever list links it in.
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, prev, next })))
    }
}
