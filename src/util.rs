/// The outcome of inserting into a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// A new leaf was created for the value.
    Inserted,
    /// An equal value was already stored so nothing changed.
    Duplicate,
}

impl Insertion {
    pub(crate) fn changed(self) -> bool {
        self == Self::Inserted
    }
}

/// The outcome of removing from a subtree.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Removal<T> {
    /// No equal value was stored so nothing was removed.
    Absent,
    /// A node was unlinked and this is the value it held.
    Removed(T),
}

impl<T> Removal<T> {
    pub(crate) fn into_value(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Removed(value) => Some(value),
        }
    }
}
