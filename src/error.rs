use thiserror::Error;

/// Errors returned by the fallible operations of a [`List`](crate::List).
///
/// Every failing call is rejected before the list is touched, so an error
/// never leaves the list partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The given position is not a valid index into the list.
    ///
    /// Read, replace, swap and remove accept `0..len`; insert additionally
    /// accepts `len`.
    #[error("position {position} is out of range for a list of length {len}")]
    OutOfRange { position: usize, len: usize },
    /// The operation is only defined on a non-empty list.
    #[error("operation requires a non-empty list")]
    EmptyContainer,
}

/// A broken structural invariant, reported by [`List::validate`].
///
/// [`List::validate`]: crate::List::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The number of nodes reachable from one end differs from `len`.
    #[error("length mismatch: expected {expected}, walked {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// `head.prev` or `tail.next` is not `None`, or only one end is set.
    #[error("boundary link broken: {message}")]
    BoundaryLink { message: String },
    /// `n.next.prev != n` at the given position.
    #[error("back link of the node at position {position} does not point back")]
    BrokenBackLink { position: usize },
    /// A link points at a slot that holds no node.
    #[error("link at position {position} points to vacant slot {slot}")]
    VacantLink { position: usize, slot: usize },
    /// The chain visits more nodes than the arena holds.
    #[error("cycle detected after {steps} steps")]
    Cycle { steps: usize },
    /// The free list reaches a slot that still holds a node.
    #[error("free list reaches occupied slot {slot}")]
    CorruptFreeList { slot: usize },
    /// A slot is neither on the chain nor on the free list.
    #[error("slot {slot} is neither linked nor free")]
    LeakedSlot { slot: usize },
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn error_messages() {
        let err = ListError::OutOfRange {
            position: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "position 7 is out of range for a list of length 3"
        );
        assert_eq!(
            ListError::EmptyContainer.to_string(),
            "operation requires a non-empty list"
        );
    }
}
