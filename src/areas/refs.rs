//! Git branch references
//!
//! Branches live as small files under `refs/heads`, each holding the target
//! commit's 40-hex id, optionally followed by whitespace. All access here
//! is read-only; refs are re-read from storage on every resolution.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{ReadError, ReadResult};
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only view of the refs namespace of one repository.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the gitdir (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn heads_path(&self) -> PathBuf {
        self.path.join("refs").join("heads")
    }

    /// Branch names relative to `refs/heads`, sorted so the "first branch"
    /// is deterministic across filesystems.
    pub fn list_branches(&self) -> ReadResult<Vec<String>> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            return Err(ReadError::RefRead {
                name: "refs/heads".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "refs/heads is not a directory",
                ),
            });
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                Some(relative_path.to_string_lossy().to_string())
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// Read the target id of `refs/heads/<branch>`.
    ///
    /// Returns `None` when the ref file is missing or holds fewer than 40
    /// characters; neither is an error by itself.
    pub fn read_ref(&self, branch: &str) -> ReadResult<Option<ObjectId>> {
        let ref_path = self.heads_path().join(branch);
        let content = match std::fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        match content.get(..OBJECT_ID_LENGTH) {
            Some(hash) => Ok(Some(ObjectId::try_parse(hash)?)),
            None => Ok(None),
        }
    }

    /// Resolve a branch name or raw hash to a commit id.
    ///
    /// Tries the ref lookup first; anything that misses falls through to
    /// literal-id interpretation, so branch names and hashes pass through
    /// every downstream component uniformly. A well-formed literal id that
    /// names no stored object only fails later, at load time.
    pub fn resolve_commitish(&self, commitish: &str) -> ReadResult<ObjectId> {
        match self.read_ref(commitish)? {
            Some(oid) => Ok(oid),
            None => ObjectId::try_parse(commitish),
        }
    }
}
