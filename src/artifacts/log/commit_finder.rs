//! Filtered history walks
//!
//! A [`CommitFinder`] walks the commits reachable from a set of start points
//! (newest-first, each commit once) and hands every one of them to its root
//! filter. Results are read from the accumulators in the filter tree once the
//! walk is over; the finder itself produces nothing.
//!
//! ```rust,ignore
//! let mut authors = AuthorSetFilter::new();
//! CommitFinder::new(&repository).with_filter(&mut authors).find()?;
//! println!("{} authors", authors.persons().len());
//! ```
//!
//! A finder keeps its filter between calls, and running `find*` again without
//! resetting the filter adds to what the previous walk recorded.

use crate::artifacts::filter::CommitFilter;
use crate::artifacts::log::commit_source::CommitSource;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::FindError;

/// Counters of a single walk, for logging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct WalkSummary {
    visited: usize,
    included: usize,
    stopped: bool,
}

pub struct CommitFinder<'s, 'f> {
    source: &'s dyn CommitSource,
    filter: Option<Box<dyn CommitFilter + 'f>>,
}

impl<'s, 'f> CommitFinder<'s, 'f> {
    pub fn new(source: &'s dyn CommitSource) -> Self {
        CommitFinder {
            source,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl CommitFilter + 'f) -> Self {
        self.set_filter(filter);
        self
    }

    /// Bind the root filter, replacing any previous one
    pub fn set_filter(&mut self, filter: impl CommitFilter + 'f) -> &mut Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn filter_mut(&mut self) -> Option<&mut (dyn CommitFilter + 'f)> {
        self.filter.as_deref_mut()
    }

    pub fn take_filter(&mut self) -> Option<Box<dyn CommitFilter + 'f>> {
        self.filter.take()
    }

    /// Walk the history of every branch
    ///
    /// A repository without branches but with a detached HEAD is walked from
    /// HEAD. An empty repository visits nothing.
    pub fn find(&mut self) -> Result<&mut Self, FindError> {
        if self.filter.is_none() {
            return Err(FindError::FilterNotSet);
        }

        let starts = self.source.branch_heads()?;
        if starts.is_empty() {
            tracing::debug!("no branch heads to walk");
        }

        self.find_in(&starts, &[])
    }

    /// Walk the history of one commit
    pub fn find_from(&mut self, start: &ObjectId) -> Result<&mut Self, FindError> {
        self.find_in(std::slice::from_ref(start), &[])
    }

    /// Walk the commits reachable from `start` but not from `end`
    pub fn find_between(
        &mut self,
        start: &ObjectId,
        end: &ObjectId,
    ) -> Result<&mut Self, FindError> {
        self.find_in(std::slice::from_ref(start), std::slice::from_ref(end))
    }

    /// Walk the commits reachable from any of `starts` and from none of `hidden`
    pub fn find_in(
        &mut self,
        starts: &[ObjectId],
        hidden: &[ObjectId],
    ) -> Result<&mut Self, FindError> {
        let source = self.source;
        let filter = self.filter.as_mut().ok_or(FindError::FilterNotSet)?;

        tracing::debug!(
            starts = starts.len(),
            hidden = hidden.len(),
            "starting commit walk"
        );

        let mut summary = WalkSummary::default();
        if let Err(error) = Self::walk(source, filter, starts, hidden, &mut summary) {
            tracing::warn!(
                visited = summary.visited,
                error = %error,
                "commit walk aborted"
            );
            return Err(FindError::Traversal(error));
        }

        tracing::debug!(
            visited = summary.visited,
            included = summary.included,
            stopped = summary.stopped,
            "finished commit walk"
        );
        Ok(self)
    }

    fn walk(
        source: &dyn CommitSource,
        filter: &mut Box<dyn CommitFilter + 'f>,
        starts: &[ObjectId],
        hidden: &[ObjectId],
        summary: &mut WalkSummary,
    ) -> anyhow::Result<()> {
        let mut rev_list = RevList::new(source);
        for oid in hidden {
            rev_list.hide(oid)?;
        }
        for oid in starts {
            rev_list.push(oid)?;
        }

        for commit in rev_list {
            let commit = commit?;
            let result = filter.evaluate(&commit);

            summary.visited += 1;
            if result.included {
                summary.included += 1;
            }
            tracing::trace!(
                commit = %commit.oid(),
                included = result.included,
                stop = result.stop,
                "evaluated commit"
            );

            if result.stop {
                summary.stopped = true;
                break;
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for CommitFinder<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitFinder")
            .field("filter_set", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}
