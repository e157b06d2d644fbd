use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_header::ObjectHeader;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::error::{ReadError, ReadResult};
use bytes::Bytes;
use derive_new::new;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read-only loose-object database.
///
/// Objects are small enough to read whole; there is no caching, so every
/// load re-opens, re-inflates and re-parses the file.
#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Path of the loose-object file holding `object_id`.
    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Load and inflate an object. The returned bytes still carry the
    /// `"<type> <size>\0"` header; callers strip it themselves.
    pub fn load(&self, object_id: &ObjectId) -> ReadResult<Bytes> {
        let object_path = self.object_path(object_id);
        let compressed = std::fs::read(&object_path).map_err(|source| {
            ReadError::ObjectNotFound {
                id: object_id.clone(),
                source,
            }
        })?;

        Self::decompress(object_id, compressed.into())
    }

    /// Load an object and split off its header.
    pub fn load_body(&self, object_id: &ObjectId) -> ReadResult<(ObjectHeader, Bytes)> {
        let data = self.load(object_id)?;
        ObjectHeader::parse(object_id, &data)
    }

    /// Load and decode a commit, failing if the object is of another type.
    pub fn parse_commit(&self, object_id: &ObjectId) -> ReadResult<Commit> {
        let body = self.typed_body(object_id, ObjectType::Commit)?;
        Commit::deserialize(object_id.clone(), &body)
    }

    /// Load and decode a tree, failing if the object is of another type.
    pub fn parse_tree(&self, object_id: &ObjectId) -> ReadResult<Tree> {
        let body = self.typed_body(object_id, ObjectType::Tree)?;
        Tree::deserialize(object_id, &body)
    }

    fn typed_body(&self, object_id: &ObjectId, expected: ObjectType) -> ReadResult<Bytes> {
        let (header, body) = self.load_body(object_id)?;
        if header.object_type != expected {
            return Err(ReadError::malformed(
                object_id,
                format!("expected a {expected}, found a {}", header.object_type),
            ));
        }
        Ok(body)
    }

    fn decompress(object_id: &ObjectId, data: Bytes) -> ReadResult<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|source| ReadError::Decode {
                id: object_id.clone(),
                source,
            })?;

        Ok(decompressed_content.into())
    }
}
