use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Includes a commit when every child does
///
/// Children are evaluated in the order they were added and evaluation ends at
/// the first child that excludes the commit, so later children (typically
/// accumulators) only see commits the earlier ones let through. A stop signal
/// from a child does not end evaluation. With no children every commit is
/// included.
#[derive(Default)]
pub struct AndCommitFilter<'f> {
    children: Vec<Box<dyn CommitFilter + 'f>>,
}

impl<'f> AndCommitFilter<'f> {
    pub fn new() -> Self {
        AndCommitFilter {
            children: Vec::new(),
        }
    }

    pub fn add(mut self, child: impl CommitFilter + 'f) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl CommitFilter + 'f) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Clones every child through `clone_filter`, so accumulators in the copy
/// start empty
impl Clone for AndCommitFilter<'_> {
    fn clone(&self) -> Self {
        AndCommitFilter {
            children: self
                .children
                .iter()
                .map(|child| child.clone_filter())
                .collect(),
        }
    }
}

impl std::fmt::Debug for AndCommitFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndCommitFilter")
            .field("children", &self.children.len())
            .finish()
    }
}

impl CommitFilter for AndCommitFilter<'_> {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        let mut stop = false;

        for child in &mut self.children {
            let result = child.evaluate(commit);
            stop |= result.stop;

            if !result.included {
                return MatchResult {
                    included: false,
                    stop,
                };
            }
        }

        MatchResult {
            included: true,
            stop,
        }
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(AndCommitFilter {
            children: self
                .children
                .iter()
                .map(|child| child.clone_filter())
                .collect(),
        })
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
    }
}
