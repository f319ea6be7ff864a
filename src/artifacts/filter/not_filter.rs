use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Inverts whether its child includes a commit
///
/// The child's stop signal is passed through unchanged.
pub struct NotCommitFilter<'f> {
    child: Box<dyn CommitFilter + 'f>,
}

impl<'f> NotCommitFilter<'f> {
    pub fn new(child: impl CommitFilter + 'f) -> Self {
        NotCommitFilter {
            child: Box::new(child),
        }
    }
}

/// Clones the child through `clone_filter`; recorded results are not copied
impl Clone for NotCommitFilter<'_> {
    fn clone(&self) -> Self {
        NotCommitFilter {
            child: self.child.clone_filter(),
        }
    }
}

impl std::fmt::Debug for NotCommitFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotCommitFilter").finish_non_exhaustive()
    }
}

impl CommitFilter for NotCommitFilter<'_> {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        let result = self.child.evaluate(commit);

        MatchResult {
            included: !result.included,
            stop: result.stop,
        }
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(NotCommitFilter {
            child: self.child.clone_filter(),
        })
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}
