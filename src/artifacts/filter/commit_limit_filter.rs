use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;
use crate::error::FilterError;

/// Includes every commit and ends the walk once `limit` commits were evaluated
///
/// Counts evaluations, not matches: placed after a predicate inside an
/// [`AndCommitFilter`](crate::artifacts::filter::AndCommitFilter) it limits
/// the number of matching commits instead.
#[derive(Debug)]
pub struct CommitLimitFilter {
    limit: usize,
    seen: usize,
}

impl CommitLimitFilter {
    pub fn new(limit: usize) -> Result<Self, FilterError> {
        if limit == 0 {
            return Err(FilterError::ZeroLimit);
        }

        Ok(CommitLimitFilter { limit, seen: 0 })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

/// A clone keeps the limit and starts with nothing seen
impl Clone for CommitLimitFilter {
    fn clone(&self) -> Self {
        CommitLimitFilter {
            limit: self.limit,
            seen: 0,
        }
    }
}

impl CommitFilter for CommitLimitFilter {
    fn evaluate(&mut self, _commit: &Commit) -> MatchResult {
        self.seen += 1;

        if self.seen >= self.limit {
            MatchResult::INCLUDE.with_stop()
        } else {
            MatchResult::INCLUDE
        }
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.seen = 0;
    }
}
