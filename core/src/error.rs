//! Error types for the pet API client.
//!
//! # Design
//! One variant per operation, each with a fixed user-facing message. Every
//! way an operation can fail — transport error, non-2xx status, undecodable
//! body — collapses into that operation's variant, so callers surface a
//! stable string per action rather than a status code. The id of the
//! targeted record is interpolated where the operation has one.

/// Errors returned by the pet store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Listing the collection failed.
    #[error("Failed to fetch pets")]
    List,

    /// Fetching a single pet failed.
    #[error("Failed to fetch pet with id {0}")]
    Get(u64),

    /// Creating a pet failed.
    #[error("Failed to create pet")]
    Create,

    /// Updating a pet failed.
    #[error("Failed to update pet with id {0}")]
    Update(u64),

    /// Deleting a pet failed.
    #[error("Failed to delete pet with id {0}")]
    Delete(u64),
}
