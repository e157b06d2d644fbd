//! Commit history traversal
//!
//! - `rev_list`: depth-first ancestry walk from a starting commit

pub mod rev_list;
