use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Includes every commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllCommitFilter;

impl CommitFilter for AllCommitFilter {
    fn evaluate(&mut self, _commit: &Commit) -> MatchResult {
        MatchResult::INCLUDE
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(*self)
    }
}
