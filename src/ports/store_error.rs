//! Shared error type for datastore-backed ports.

use thiserror::Error;

/// Errors from the datastore collaborators.
///
/// "No record found" is never an error; ports model absence with `Option`
/// or a zero default. An error here means the store could not answer at
/// all, and the decision engine chooses the propagation direction: trial
/// and plan lookups degrade gracefully, usage and credit reads deny.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The query or mutation failed (connection, timeout, constraint).
    #[error("datastore unavailable: {0}")]
    Unavailable(String),

    /// A row was read but could not be interpreted.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl StoreError {
    /// Wraps a driver-level error as `Unavailable`.
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        StoreError::Unavailable(err.to_string())
    }

    /// Wraps a row-interpretation error as `MalformedRecord`.
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        StoreError::MalformedRecord(err.to_string())
    }
}
