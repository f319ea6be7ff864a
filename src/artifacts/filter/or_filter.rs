use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;

/// Includes a commit when any child does
///
/// Children are evaluated in order until one includes the commit. A stop
/// signal from a child does not end evaluation. With no children nothing is
/// included.
#[derive(Default)]
pub struct OrCommitFilter<'f> {
    children: Vec<Box<dyn CommitFilter + 'f>>,
}

impl<'f> OrCommitFilter<'f> {
    pub fn new() -> Self {
        OrCommitFilter {
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
impl Clone for OrCommitFilter<'_> {
    fn clone(&self) -> Self {
        OrCommitFilter {
            children: self
                .children
                .iter()
                .map(|child| child.clone_filter())
                .collect(),
        }
    }
}

impl std::fmt::Debug for OrCommitFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrCommitFilter")
            .field("children", &self.children.len())
            .finish()
    }
}

impl CommitFilter for OrCommitFilter<'_> {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        let mut stop = false;

        for child in &mut self.children {
            let result = child.evaluate(commit);
            stop |= result.stop;

            if result.included {
                return MatchResult {
                    included: true,
                    stop,
                };
            }
        }

        MatchResult {
            included: false,
            stop,
        }
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(OrCommitFilter {
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
