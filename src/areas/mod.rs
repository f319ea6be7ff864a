//! On-disk repository components
//!
//! - `database`: loose object storage under `.git/objects`
//! - `refs`: HEAD and branch references
//! - `repository`: both of the above behind one handle, readable as a commit source

pub mod database;
pub mod refs;
pub mod repository;
