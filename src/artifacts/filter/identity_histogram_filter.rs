use crate::artifacts::filter::person_filter::PersonField;
use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::{Commit, Identity};
use std::collections::HashMap;

/// Counts commits per author or per committer
#[derive(Debug)]
pub struct IdentityHistogramFilter {
    field: PersonField,
    counts: HashMap<Identity, usize>,
}

impl IdentityHistogramFilter {
    pub fn new(field: PersonField) -> Self {
        IdentityHistogramFilter {
            field,
            counts: HashMap::new(),
        }
    }

    pub fn authors() -> Self {
        Self::new(PersonField::Author)
    }

    pub fn committers() -> Self {
        Self::new(PersonField::Committer)
    }

    pub fn field(&self) -> PersonField {
        self.field
    }

    pub fn counts(&self) -> &HashMap<Identity, usize> {
        &self.counts
    }

    pub fn count_for(&self, identity: &Identity) -> usize {
        self.counts.get(identity).copied().unwrap_or_default()
    }

    /// Identities by descending commit count, equal counts in identity order
    pub fn ranked(&self) -> Vec<(&Identity, usize)> {
        let mut ranked = self
            .counts
            .iter()
            .map(|(identity, count)| (identity, *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));

        ranked
    }
}

/// A clone keeps the counted field and drops the recorded counts
impl Clone for IdentityHistogramFilter {
    fn clone(&self) -> Self {
        Self::new(self.field)
    }
}

impl CommitFilter for IdentityHistogramFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        let identity = self.field.of(commit).identity();
        match self.counts.get_mut(identity) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(identity.clone(), 1);
            }
        }

        MatchResult::INCLUDE
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.counts.clear();
    }
}
