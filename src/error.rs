//! The error type shared by every collection in this crate.

/// Errors returned when an operation's precondition does not hold. A collection that returns one
/// of these has not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rank query asked for an element past the end of an ordered collection.
    #[error("rank {rank} is out of bounds for a collection of {len} elements")]
    RankOutOfBounds {
        /// The requested rank.
        rank: usize,
        /// How many elements the collection held.
        len: usize,
    },
    /// A positional operation on a list referred to a position that doesn't exist.
    #[error("position {position} is out of bounds for a list of {len} elements")]
    PositionOutOfBounds {
        /// The requested position.
        position: usize,
        /// How many elements the list held.
        len: usize,
    },
    /// A `start..stop` range was reversed or ran past the end of a list.
    #[error("range {start}..{stop} is invalid for a list of {len} elements")]
    InvalidRange {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        stop: usize,
        /// How many elements the list held.
        len: usize,
    },
    /// The operation needs at least one element.
    #[error("the collection is empty")]
    Empty,
}
