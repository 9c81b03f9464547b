use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by list and cursor operations whose preconditions do not hold.
///
/// No operation mutates the list before it has detected one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The position is past the end and cannot be dereferenced or advanced.
    #[error("position is past the end of the list")]
    PastTheEnd,
    /// The before-begin anchor holds no value.
    #[error("the before-begin position cannot be dereferenced")]
    BeforeBegin,
    /// `erase_after` was given the last position of the list.
    #[error("position has no successor to erase")]
    NoSuccessor,
    #[error("the list is empty")]
    Empty,
    /// The node behind the position has been removed from the list.
    #[error("position refers to a node that is no longer in the list")]
    StalePosition,
    /// The position was produced by a different list.
    #[error("position belongs to another list")]
    ForeignPosition,
    #[error("failed to allocate a list node: {0}")]
    AllocFailed(TryReserveError),
}

pub type Result<T> = core::result::Result<T, Error>;
