use std::result;
use thiserror::Error;

/// Errors returned by the containers in this crate.
///
/// A failed operation leaves the container exactly as it was before the call.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// `insert` was called with a key that is already stored.
    #[error("duplicate key")]
    DuplicateKey,
    /// `peek`, `peek_mut` or `extract` was called with a key that is not stored.
    #[error("key does not exist")]
    NonexistentKey,
    /// `minimum_key` or `maximum_key` was called on an empty tree.
    #[error("tree is empty")]
    EmptyTree,
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = result::Result<T, Error>;
