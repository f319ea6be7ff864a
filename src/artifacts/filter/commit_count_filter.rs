use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Counts the commits it sees
#[derive(Debug, Default)]
pub struct CommitCountFilter {
    count: usize,
}

impl CommitCountFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// A clone starts counting from zero; the recorded count is not copied
impl Clone for CommitCountFilter {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl CommitFilter for CommitCountFilter {
    fn evaluate(&mut self, _commit: &Commit) -> MatchResult {
        self.count += 1;
        MatchResult::INCLUDE
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}
