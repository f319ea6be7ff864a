//! Composable commit filters
//!
//! A history walk hands every commit it visits to one root [`CommitFilter`].
//! Filters come in four flavours:
//!
//! - **Predicates** decide on one attribute of a commit (author, message, date, ...)
//! - **Accumulators** always include the commit and record something about it
//!   (the commit itself, its author, a count)
//! - **Traversal control** filters end the walk early through the `stop` signal
//! - **Combinators** (`and`, `or`, `not`) arrange other filters into a tree
//!
//! Because [`AndCommitFilter`] stops at the first child that excludes a
//! commit, an accumulator placed after a predicate only records the commits
//! the predicate let through:
//!
//! ```rust,ignore
//! let mut commits = CommitListFilter::new();
//! CommitFinder::new(&repository)
//!     .with_filter(AndCommitFilter::new().add(author_filter).add(&mut commits))
//!     .find()?;
//! // commits.commits() now holds the matching commits, newest first
//! ```
//!
//! ## Clone and reset
//!
//! `clone_filter` (and `Clone` on every concrete filter) copies the
//! configuration of a filter tree but never its recorded results, so a tree
//! can be cloned once per concurrent walk. `reset` empties recorded results in
//! place. Running a walk twice over the same tree without `reset` adds to the
//! results of the first run.

pub mod all_commit_filter;
pub mod and_filter;
pub mod commit_count_filter;
pub mod commit_limit_filter;
pub mod commit_list_filter;
pub mod date_filter;
pub mod identity_histogram_filter;
pub mod marker_commit_filter;
pub mod message_filter;
pub mod not_filter;
pub mod or_filter;
pub mod parent_count_filter;
pub mod person_filter;
pub mod person_set_filter;

pub use all_commit_filter::AllCommitFilter;
pub use and_filter::AndCommitFilter;
pub use commit_count_filter::CommitCountFilter;
pub use commit_limit_filter::CommitLimitFilter;
pub use commit_list_filter::CommitListFilter;
pub use date_filter::{AuthorDateFilter, CommitterDateFilter};
pub use identity_histogram_filter::IdentityHistogramFilter;
pub use marker_commit_filter::{FirstCommitFilter, LastCommitFilter};
pub use message_filter::{MessageFilter, SignedOffByFilter};
pub use not_filter::NotCommitFilter;
pub use or_filter::OrCommitFilter;
pub use parent_count_filter::ParentCountFilter;
pub use person_filter::{AuthorFilter, CommitterFilter, IdentityMatcher, PersonField};
pub use person_set_filter::{AuthorSetFilter, CommitterSetFilter};

use crate::artifacts::objects::commit::Commit;

/// Verdict of a filter on one commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// The commit matches
    pub included: bool,
    /// The walk must end after this commit
    pub stop: bool,
}

impl MatchResult {
    pub const INCLUDE: MatchResult = MatchResult {
        included: true,
        stop: false,
    };

    pub const EXCLUDE: MatchResult = MatchResult {
        included: false,
        stop: false,
    };

    pub fn from_included(included: bool) -> Self {
        MatchResult {
            included,
            stop: false,
        }
    }

    pub fn with_stop(self) -> Self {
        MatchResult { stop: true, ..self }
    }
}

/// A unit of evaluation over a single commit
///
/// Filters are `Send` so that a cloned tree can be moved to another thread.
/// Evaluation never fails: anything that can go wrong with a filter is
/// rejected when it is constructed.
pub trait CommitFilter: Send {
    /// Inspect (and for accumulators, record) one commit
    fn evaluate(&mut self, commit: &Commit) -> MatchResult;

    /// A new instance of the same filter with the same configuration and no recorded results
    fn clone_filter(&self) -> Box<dyn CommitFilter>;

    /// Forget everything recorded so far, keeping the configuration
    fn reset(&mut self) {}
}

impl<F: CommitFilter + ?Sized> CommitFilter for &mut F {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        (**self).evaluate(commit)
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        (**self).clone_filter()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<F: CommitFilter + ?Sized> CommitFilter for Box<F> {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        (**self).evaluate(commit)
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        (**self).clone_filter()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
