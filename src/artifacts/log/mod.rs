//! Commit history traversal
//!
//! - `commit_source`: what a walk needs from storage
//! - `rev_list`: newest-first, deduplicated iteration over the commit graph
//! - `commit_finder`: runs a filter tree over a walk
//!
//! ## Algorithm
//!
//! The walk uses a priority queue ordered by committer timestamp, supporting:
//! - Several start points, interleaved newest-first
//! - Hidden start points whose ancestry is excluded (`start..end` ranges)
//! - Merge commits, with shared ancestors produced once

pub mod commit_finder;
pub mod commit_source;
pub mod rev_list;
