//! Common error types for data-layer operations.

use sea_orm::DbErr;

/// Errors surfaced by the stores and the repository.
///
/// Failures inside detached mirror jobs are never reported through this
/// type; they are logged and discarded (see [`crate::repository`]).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An operation targeted an id that is not present in the store.
    #[error("fruit (id {0}) not found")]
    NotFound(String),

    /// A backing store is unset or unreachable. Distinct from a store that
    /// is merely empty, which is a valid result.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
