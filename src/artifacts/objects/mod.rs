//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. A history
//! walk only ever needs commits, so that is the one object kind parsed here;
//! the other kinds are recognised so that a ref pointing at them can be
//! reported instead of misread.
//!
//! All objects use the Git object format: `<type> <size>\0<content>`

pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// ID of the tree with no entries, present in every git repository
pub const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
