//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. The first two
//! characters select the storage subdirectory, the remaining 38 the file
//! name: `objects/<first-2-chars>/<remaining-38-chars>`.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_ID_LENGTH};
use crate::error::{ReadError, ReadResult};
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// A validated 40-character hexadecimal string that uniquely identifies an
/// object in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string.
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase.
    pub fn try_parse(id: &str) -> ReadResult<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ReadError::InvalidObjectId(id.to_string()));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Reconstruct the textual id from the 20 raw hash bytes found in tree
    /// entries.
    pub fn from_raw(raw: &[u8; RAW_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Convert to the relative file system path used for object storage.
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
