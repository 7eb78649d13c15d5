use thiserror::Error;

/// Error types for `LockVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LockVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Erase range is inverted or extends past the current vector length
    #[error("Invalid range: [{first}, {last}) does not fit vector length {length}")]
    InvalidRange {
        /// First position of the half-open range
        first: usize,
        /// One-past-last position of the half-open range
        last: usize,
        /// Current length of the vector
        length: usize,
    },
}
