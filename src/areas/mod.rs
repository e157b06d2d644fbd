//! Core repository components
//!
//! - `database`: read-side object database (locate, inflate, decode)
//! - `refs`: branch enumeration and commitish resolution
//! - `repository`: root discovery and component wiring

pub mod database;
pub mod refs;
pub mod repository;
