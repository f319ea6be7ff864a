//! Composable queries over the commit history of a git repository
//!
//! A [`CommitFinder`] walks the commit graph of a [`Repository`] newest-first
//! and evaluates a tree of [`CommitFilter`]s against every commit it visits.
//! Predicate filters decide which commits match, combinators arrange them,
//! and accumulator filters collect the matches (commits, identities, counts)
//! as a side effect of the walk.
//!
//! ```rust,ignore
//! use bitquery::prelude::*;
//!
//! let repository = Repository::open(".")?;
//! let mut commits = CommitListFilter::new();
//! CommitFinder::new(&repository)
//!     .with_filter(
//!         AndCommitFilter::new()
//!             .add(AuthorFilter::new(Some("Ann"), None)?)
//!             .add(ParentCountFilter::no_merges())
//!             .add(&mut commits),
//!     )
//!     .find()?;
//! ```

pub mod areas;
pub mod artifacts;
pub mod error;

pub use areas::repository::Repository;
pub use artifacts::filter::{CommitFilter, MatchResult};
pub use artifacts::log::commit_finder::CommitFinder;
pub use artifacts::log::commit_source::CommitSource;
pub use error::{FilterError, FindError};

pub mod prelude {
    pub use crate::areas::repository::Repository;
    pub use crate::artifacts::filter::*;
    pub use crate::artifacts::log::commit_finder::CommitFinder;
    pub use crate::artifacts::log::commit_source::CommitSource;
    pub use crate::artifacts::objects::commit::{Commit, Identity, Person};
    pub use crate::artifacts::objects::object_id::ObjectId;
    pub use crate::error::{FilterError, FindError};
}
