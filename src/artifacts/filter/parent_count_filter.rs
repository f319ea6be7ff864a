use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;
use crate::error::FilterError;

/// Includes commits whose number of parents falls in an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentCountFilter {
    min: usize,
    max: usize,
}

impl ParentCountFilter {
    pub fn new(min: usize, max: usize) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::EmptyParentRange { min, max });
        }

        Ok(ParentCountFilter { min, max })
    }

    /// Commits with two or more parents
    pub fn merges() -> Self {
        ParentCountFilter {
            min: 2,
            max: usize::MAX,
        }
    }

    /// Commits with at most one parent
    pub fn no_merges() -> Self {
        ParentCountFilter { min: 0, max: 1 }
    }

    /// Commits without parents
    pub fn roots() -> Self {
        ParentCountFilter { min: 0, max: 0 }
    }
}

impl CommitFilter for ParentCountFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        MatchResult::from_included((self.min..=self.max).contains(&commit.parents().len()))
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(*self)
    }
}
