//! Error types for repository access
//!
//! Failures that have a meaning of their own (as opposed to plain I/O
//! mishaps) are modelled here so callers can react to them; everything
//! else travels as an [`anyhow::Error`] with context attached.

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Errors raised while reading a repository from disk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    /// No `.git` directory was found in the starting directory or any of
    /// its ancestors.
    #[error("Not inside a Git repository")]
    RepositoryNotFound,

    /// An object named by a ref or a parent header has no readable entry
    /// in the object database (missing file or undecodable zlib stream).
    #[error("object {oid} could not be read from the object database")]
    ObjectNotFound { oid: ObjectId },

    /// An object was read but its content does not parse as the commit
    /// the traversal expected.
    #[error("malformed object {oid}: {reason}")]
    MalformedObject { oid: ObjectId, reason: String },
}
