//! Git data structures and algorithms
//!
//! - `log`: commit history traversal
//! - `objects`: git object types (tree, commit) and their decoding

pub mod log;
pub mod objects;
