//! Git data structures and the query engine built on them
//!
//! - `branch`: branch and symbolic ref names
//! - `filter`: commit filters, accumulators and combinators
//! - `log`: history traversal and the commit finder
//! - `objects`: object IDs and commits

pub mod branch;
pub mod filter;
pub mod log;
pub mod objects;
