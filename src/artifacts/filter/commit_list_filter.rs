use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Collects every commit it sees, in the order they were visited
#[derive(Debug, Default)]
pub struct CommitListFilter {
    commits: Vec<Commit>,
}

impl CommitListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn into_commits(self) -> Vec<Commit> {
        self.commits
    }
}

/// A clone starts with an empty list; recorded commits are not copied
impl Clone for CommitListFilter {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl CommitFilter for CommitListFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        self.commits.push(commit.clone());
        MatchResult::INCLUDE
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.commits.clear();
    }
}
