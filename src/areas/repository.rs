use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::error::{ReadError, ReadResult};
use std::path::{Path, PathBuf};

/// Handle on one repository: the gitdir plus the components reading it.
#[derive(Debug)]
pub struct Repository {
    gitdir: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open a repository rooted at an explicit gitdir.
    ///
    /// No validation happens here; a bogus path surfaces later as a ref or
    /// object read failure. Taking the root explicitly keeps every
    /// downstream call testable against synthetic stores.
    pub fn open(gitdir: impl Into<PathBuf>) -> Self {
        let gitdir: PathBuf = gitdir.into();
        let database = Database::new(gitdir.join("objects").into_boxed_path());
        let refs = Refs::new(gitdir.clone().into_boxed_path());

        Repository {
            gitdir: gitdir.into_boxed_path(),
            database,
            refs,
        }
    }

    /// Walk upward from `start` until a directory containing `.git` is
    /// found.
    pub fn discover(start: impl AsRef<Path>) -> ReadResult<Self> {
        let start = start.as_ref();

        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(".git");
            if candidate.is_dir() {
                return Ok(Self::open(candidate));
            }
            current = dir.parent();
        }

        Err(ReadError::RepoNotFound {
            start: start.to_path_buf(),
        })
    }

    pub fn gitdir(&self) -> &Path {
        &self.gitdir
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
