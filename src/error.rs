use thiserror::Error;

/// Error returned by the fallible operations of every list in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A positional read, write or removal was attempted on an empty list.
    #[error("operation requires a non-empty list")]
    EmptyCollection,
    /// The index lies outside the range allowed by the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Length of the list at the time of the request
        len: usize,
    },
    /// A fixed-capacity list is already full.
    #[error("capacity exceeded: list already holds {capacity} elements")]
    CapacityExceeded {
        /// Maximum number of elements the list can hold
        capacity: usize,
    },
    /// A chunked list was configured with chunks unable to hold any element.
    #[error("invalid chunk size {chunk_size}: chunks must hold at least one element")]
    InvalidChunkSize {
        /// Chunk size that was requested
        chunk_size: usize,
    },
}

/// Validates an index addressing an existing element (`[0, len)`).
pub(crate) fn check_exclusive_index(index: usize, len: usize) -> Result<(), ListError> {
    if len == 0 {
        return Err(ListError::EmptyCollection);
    }

    if index >= len {
        return Err(ListError::IndexOutOfRange { index, len });
    }

    Ok(())
}

/// Validates an insertion point (`[0, len]`).
pub(crate) fn check_inclusive_index(index: usize, len: usize) -> Result<(), ListError> {
    if index > len {
        return Err(ListError::IndexOutOfRange { index, len });
    }

    Ok(())
}
