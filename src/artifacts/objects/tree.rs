//! Git tree object
//!
//! Trees are directory snapshots. Each body entry is
//! `<decimal-mode> <name>\0` followed by the child's 20 raw hash bytes,
//! repeated until the body is exhausted. Entries are kept in body order;
//! the producing system already sorted them and they are not re-sorted
//! here.

use crate::artifacts::objects::RAW_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{ReadError, ReadResult};
use derive_new::new;

/// Single tree entry: mode, name and child object id.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

/// Git tree object representing a directory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Decode a tree body. `id` is the tree's own object id, used for error
    /// context only.
    pub fn deserialize(id: &ObjectId, body: &[u8]) -> ReadResult<Self> {
        let mut entries = Vec::new();
        let mut rest = body;

        while !rest.is_empty() {
            let nul = rest
                .iter()
                .position(|&b| b == 0)
                .ok_or_else(|| ReadError::malformed(id, "missing NUL terminator in tree entry"))?;
            let head = std::str::from_utf8(&rest[..nul])
                .map_err(|_| ReadError::malformed(id, "tree entry name is not UTF-8"))?;

            let (mode_token, name) = head
                .split_once(' ')
                .ok_or_else(|| ReadError::malformed(id, "missing space between mode and name"))?;
            let mode = EntryMode::from_tree_token(mode_token).ok_or_else(|| {
                ReadError::malformed(id, format!("unknown entry mode {mode_token:?}"))
            })?;

            let raw_id = rest
                .get(nul + 1..nul + 1 + RAW_ID_LENGTH)
                .ok_or_else(|| ReadError::malformed(id, "truncated object id in tree entry"))?;
            let mut raw = [0u8; RAW_ID_LENGTH];
            raw.copy_from_slice(raw_id);

            entries.push(TreeEntry::new(mode, name.to_owned(), ObjectId::from_raw(&raw)));
            rest = &rest[nul + 1 + RAW_ID_LENGTH..];
        }

        Ok(Tree { entries })
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// One `mode id name` line per entry, in body order.
    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} {} {}", entry.mode, entry.oid, entry.name))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
