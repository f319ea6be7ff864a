use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::{Commit, Identity, Person};
use crate::error::FilterError;

/// Which of the two people recorded on a commit a filter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Author,
    Committer,
}

impl PersonField {
    pub fn of(self, commit: &Commit) -> &Person {
        match self {
            PersonField::Author => commit.author(),
            PersonField::Committer => commit.committer(),
        }
    }
}

/// Exact, case-sensitive match on a name, an email, or both
///
/// When both are configured both must match; a single configured field is
/// matched on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityMatcher {
    name: Option<String>,
    email: Option<String>,
}

impl IdentityMatcher {
    pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, FilterError> {
        if name.is_none() && email.is_none() {
            return Err(FilterError::EmptyIdentity);
        }

        Ok(IdentityMatcher {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn matches(&self, person: &Person) -> bool {
        let name_matches = self.name.as_deref().is_none_or(|name| name == person.name());
        let email_matches = self
            .email
            .as_deref()
            .is_none_or(|email| email == person.email());

        name_matches && email_matches
    }
}

impl From<&Identity> for IdentityMatcher {
    fn from(identity: &Identity) -> Self {
        IdentityMatcher {
            name: Some(identity.name().to_string()),
            email: Some(identity.email().to_string()),
        }
    }
}

impl From<&Person> for IdentityMatcher {
    fn from(person: &Person) -> Self {
        IdentityMatcher::from(person.identity())
    }
}

macro_rules! person_filter {
    ($(#[$meta:meta])* $name:ident, $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            matcher: IdentityMatcher,
        }

        impl $name {
            pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, FilterError> {
                Ok($name {
                    matcher: IdentityMatcher::new(name, email)?,
                })
            }

            pub fn matcher(&self) -> &IdentityMatcher {
                &self.matcher
            }
        }

        impl From<&Person> for $name {
            fn from(person: &Person) -> Self {
                $name {
                    matcher: IdentityMatcher::from(person),
                }
            }
        }

        impl From<&Identity> for $name {
            fn from(identity: &Identity) -> Self {
                $name {
                    matcher: IdentityMatcher::from(identity),
                }
            }
        }

        impl CommitFilter for $name {
            fn evaluate(&mut self, commit: &Commit) -> MatchResult {
                MatchResult::from_included(self.matcher.matches($field.of(commit)))
            }

            fn clone_filter(&self) -> Box<dyn CommitFilter> {
                Box::new(self.clone())
            }
        }
    };
}

person_filter!(
    /// Includes commits whose author matches
    AuthorFilter,
    PersonField::Author
);

person_filter!(
    /// Includes commits whose committer matches
    CommitterFilter,
    PersonField::Committer
);
