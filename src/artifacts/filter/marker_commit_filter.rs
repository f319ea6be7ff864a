//! Filters that remember a single commit

use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Records the first commit it sees and ends the walk
///
/// The walk is newest-first, so behind a predicate this finds the most recent
/// matching commit without visiting the rest of the history.
#[derive(Debug, Default)]
pub struct FirstCommitFilter {
    commit: Option<Commit>,
}

impl FirstCommitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&self) -> Option<&Commit> {
        self.commit.as_ref()
    }
}

/// A clone has no recorded commit
impl Clone for FirstCommitFilter {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl CommitFilter for FirstCommitFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        if self.commit.is_none() {
            self.commit = Some(commit.clone());
        }

        MatchResult::INCLUDE.with_stop()
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.commit = None;
    }
}

/// Records every commit it sees, keeping only the latest one
///
/// After a full newest-first walk this holds the oldest matching commit.
#[derive(Debug, Default)]
pub struct LastCommitFilter {
    commit: Option<Commit>,
}

impl LastCommitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&self) -> Option<&Commit> {
        self.commit.as_ref()
    }
}

/// A clone has no recorded commit
impl Clone for LastCommitFilter {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl CommitFilter for LastCommitFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        self.commit = Some(commit.clone());
        MatchResult::INCLUDE
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.commit = None;
    }
}
