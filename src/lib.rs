//! Read-only access to the git loose-object store.
//!
//! The crate locates a repository, enumerates branch refs, inflates loose
//! objects and decodes trees and commits, and walks commit ancestry. It
//! never writes to the store.

pub mod areas;
pub mod artifacts;
pub mod error;
