//! Git commit object
//!
//! On disk a commit body is a run of `<field> <value>` header lines, one
//! blank line, then the message occupying the rest of the body verbatim.
//! `tree` and `parent` are pulled out structurally; every other field lands
//! in a generic map, last occurrence winning.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{ReadError, ReadResult};
use std::collections::HashMap;

/// Git commit object: a tree pointer, zero or more parents, metadata
/// headers and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: ObjectId,
    tree_oid: ObjectId,
    /// Parent commit IDs (empty for an initial commit, two or more for a
    /// merge), in encounter order.
    parents: Vec<ObjectId>,
    header_fields: HashMap<String, String>,
    message: String,
}

impl Commit {
    /// Decode a commit body. The id is supplied by the caller, who knows
    /// which object was requested.
    ///
    /// A body that never reaches the blank header/message separator is
    /// rejected.
    pub fn deserialize(id: ObjectId, body: &[u8]) -> ReadResult<Self> {
        let text = std::str::from_utf8(body)
            .map_err(|_| ReadError::malformed(&id, "commit body is not UTF-8"))?;

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut header_fields = HashMap::new();
        let mut rest = text;

        let message = loop {
            let Some((line, tail)) = rest.split_once('\n') else {
                return Err(ReadError::malformed(
                    &id,
                    "no blank line between headers and message",
                ));
            };
            if line.is_empty() {
                break tail.to_owned();
            }

            let (field, value) = line.split_once(' ').ok_or_else(|| {
                ReadError::malformed(&id, format!("header line without separator: {line:?}"))
            })?;
            match field {
                "tree" => tree_oid = Some(ObjectId::try_parse(value)?),
                "parent" => parents.push(ObjectId::try_parse(value)?),
                _ => {
                    header_fields.insert(field.to_owned(), value.to_owned());
                }
            }
            rest = tail;
        };

        let tree_oid =
            tree_oid.ok_or_else(|| ReadError::malformed(&id, "missing tree header"))?;

        Ok(Commit {
            id,
            tree_oid,
            parents,
            header_fields,
            message,
        })
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn header_field(&self, name: &str) -> Option<&str> {
        self.header_fields.get(name).map(String::as_str)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
