//! Property tests driving the public API of each collection with random operations and comparing
//! against the standard library.

use quickcheck::{Arbitrary, Gen};

mod list;
mod set;
mod tree;

/// An enum for the various kinds of "things" to do to
/// collections in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the collection
    Insert(T),
    /// Remove the T from the collection
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
