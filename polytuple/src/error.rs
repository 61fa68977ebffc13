use thiserror::Error;

/// The ways reading an [`ErasedTuple`](crate::ErasedTuple) as a particular type can fail.
///
/// None of these are raised for a missing key: a miss is always `None`. Each of these instead
/// means the caller asked for something the stored tuple does not have, and should be fixed where
/// the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The element exists, but is not of the requested type.
    #[error("element {index} is a `{found}`, not the requested `{expected}`")]
    TypeMismatch {
        /// The position of the element, counting from zero.
        index: usize,
        /// The name of the requested type.
        expected: &'static str,
        /// The name of the element's actual type.
        found: &'static str,
    },
    /// There is no element at the requested position.
    #[error("no element at index {index} of a tuple of length {length}")]
    OutOfBounds {
        /// The requested position, counting from zero.
        index: usize,
        /// The length of the tuple.
        length: usize,
    },
    /// The tuple has a different number of elements than the requested variant.
    #[error("expected a tuple of length {expected}, found one of length {found}")]
    ArityMismatch {
        /// The length of the requested variant.
        expected: usize,
        /// The length of the tuple.
        found: usize,
    },
}
