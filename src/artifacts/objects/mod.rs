//! Git object types and decoding
//!
//! Git stores all content as objects identified by SHA-1 hashes. Every
//! loose object inflates to `<type> <size>\0<content>`; this module decodes
//! that header plus the two structured body grammars (tree, commit).

pub mod commit;
pub mod entry_mode;
pub mod object_header;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw binary format
pub const RAW_ID_LENGTH: usize = 20;
