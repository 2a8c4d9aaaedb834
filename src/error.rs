//! Contract-violation taxonomy shared by [`Maybe`](crate::Maybe) and
//! [`Outcome`](crate::Outcome).
//!
//! These are programming errors, not recoverable conditions: the accessor
//! that hits one panics with the corresponding message. Code that wants
//! propagation instead of termination should go through [`probe!`](crate::probe)
//! rather than `unwrap`.

use thiserror::Error;

/// A precondition violation raised by the unchecked accessors.
///
/// Native enums make a corrupted discriminant unrepresentable, so the only
/// constructible violations are the two wrong-variant reads and the
/// absent-value read.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("attempted to unwrap an absent value")]
    AbsentValue,

    #[error("attempted to read the success payload of a failure")]
    NotSuccess,

    #[error("attempted to read the failure payload of a success")]
    NotFailure,
}
