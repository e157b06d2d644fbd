use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Errors from read operations against the object store.
///
/// Every error is terminal for the operation that produced it; there is no
/// retry or partial-result path.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// No `.git` directory anywhere above the starting point.
    #[error("not a git repository (searched upward from {})", start.display())]
    RepoNotFound { start: PathBuf },

    /// The refs namespace could not be read.
    #[error("failed to read ref {name}: {source}")]
    RefRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// No loose object file at the path derived from the id.
    #[error("object not found: {id}")]
    ObjectNotFound {
        id: ObjectId,
        #[source]
        source: std::io::Error,
    },

    /// The compressed stream could not be inflated.
    #[error("failed to inflate object {id}: {source}")]
    Decode {
        id: ObjectId,
        #[source]
        source: std::io::Error,
    },

    /// Header or body grammar violated.
    #[error("malformed object {id}: {reason}")]
    Malformed { id: ObjectId, reason: String },

    /// A textual id that is not 40 hexadecimal characters.
    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),
}

impl ReadError {
    pub(crate) fn malformed(id: &ObjectId, reason: impl Into<String>) -> Self {
        ReadError::Malformed {
            id: id.clone(),
            reason: reason.into(),
        }
    }
}

/// Result alias for read operations.
pub type ReadResult<T> = Result<T, ReadError>;
