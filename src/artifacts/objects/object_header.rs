//! Loose-object header parsing
//!
//! Every decompressed object starts with `<type> <size>\0`: an ASCII type
//! token, one space, the body length in ASCII decimal, one NUL byte.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::{ReadError, ReadResult};
use bytes::Bytes;

/// Decoded object header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    pub declared_size: usize,
}

impl ObjectHeader {
    /// Split a decompressed object into its header and body.
    ///
    /// The declared size must match the body length exactly; a mismatch
    /// means the object is truncated or corrupt.
    pub fn parse(id: &ObjectId, data: &Bytes) -> ReadResult<(ObjectHeader, Bytes)> {
        let nul = data
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| ReadError::malformed(id, "missing NUL terminator in header"))?;
        let prefix = std::str::from_utf8(&data[..nul])
            .map_err(|_| ReadError::malformed(id, "header is not ASCII"))?;

        let (type_token, size_digits) = prefix
            .split_once(' ')
            .ok_or_else(|| ReadError::malformed(id, "missing space between type and size"))?;
        let object_type = ObjectType::from_token(type_token)
            .ok_or_else(|| ReadError::malformed(id, format!("unknown object type {type_token:?}")))?;
        let declared_size = size_digits
            .parse::<usize>()
            .map_err(|_| ReadError::malformed(id, format!("invalid size field {size_digits:?}")))?;

        let body = data.slice(nul + 1..);
        if body.len() != declared_size {
            return Err(ReadError::malformed(
                id,
                format!("declared size {declared_size} but body is {} bytes", body.len()),
            ));
        }

        Ok((
            ObjectHeader {
                object_type,
                declared_size,
            },
            body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::artifacts::objects::object_header::ObjectHeader;
    use crate::artifacts::objects::object_id::ObjectId;
    use crate::artifacts::objects::object_type::ObjectType;
    use bytes::Bytes;
    use proptest::prelude::*;

    fn test_oid() -> ObjectId {
        ObjectId::try_parse(&"ab".repeat(20)).unwrap()
    }

    proptest! {
        #[test]
        fn round_trips_any_body(
            body in proptest::collection::vec(any::<u8>(), 0..256),
            type_token in "blob|tree|commit|tag"
        ) {
            let mut data = format!("{} {}\0", type_token, body.len()).into_bytes();
            data.extend_from_slice(&body);

            let (header, rest) = ObjectHeader::parse(&test_oid(), &Bytes::from(data)).unwrap();
            assert_eq!(header.object_type.as_str(), type_token);
            assert_eq!(header.declared_size, body.len());
            assert_eq!(&rest[..], &body[..]);
        }
    }

    #[test]
    fn rejects_missing_nul() {
        let err = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"blob 4 abcd"));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_missing_space() {
        let err = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"blob4\0abcd"));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_unknown_type_token() {
        let err = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"blub 4\0abcd"));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_numeric_size() {
        let err = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"blob four\0abcd"));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_declared_size_mismatch() {
        let err = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"blob 3\0abcd"));
        assert!(err.is_err());
    }

    #[test]
    fn accepts_tag_headers() {
        let (header, _) = ObjectHeader::parse(&test_oid(), &Bytes::from_static(b"tag 0\0")).unwrap();
        assert_eq!(header.object_type, ObjectType::Tag);
    }
}
