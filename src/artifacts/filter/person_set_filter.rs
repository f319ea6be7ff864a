use crate::artifacts::filter::person_filter::PersonField;
use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::{Commit, Identity};
use std::collections::HashSet;

macro_rules! person_set_filter {
    ($(#[$meta:meta])* $name:ident, $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            persons: HashSet<Identity>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Distinct identities seen so far
            pub fn persons(&self) -> &HashSet<Identity> {
                &self.persons
            }
        }

        /// Clones start with an empty set: recorded identities are not copied
        impl Clone for $name {
            fn clone(&self) -> Self {
                Self::new()
            }
        }

        impl CommitFilter for $name {
            fn evaluate(&mut self, commit: &Commit) -> MatchResult {
                let identity = $field.of(commit).identity();
                if !self.persons.contains(identity) {
                    self.persons.insert(identity.clone());
                }

                MatchResult::INCLUDE
            }

            fn clone_filter(&self) -> Box<dyn CommitFilter> {
                Box::new(self.clone())
            }

            fn reset(&mut self) {
                self.persons.clear();
            }
        }
    };
}

person_set_filter!(
    /// Collects the distinct authors of the commits it sees
    AuthorSetFilter,
    PersonField::Author
);

person_set_filter!(
    /// Collects the distinct committers of the commits it sees
    CommitterSetFilter,
    PersonField::Committer
);
