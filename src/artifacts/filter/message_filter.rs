use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::{Commit, Identity, Person};
use crate::error::FilterError;
use regex::Regex;

#[derive(Debug, Clone)]
enum Pattern {
    Regex(Regex),
    Literal(String),
}

/// Includes commits whose full message contains a match of a pattern
#[derive(Debug, Clone)]
pub struct MessageFilter {
    pattern: Pattern,
}

impl MessageFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        Ok(MessageFilter {
            pattern: Pattern::Regex(Regex::new(pattern)?),
        })
    }

    /// Match `text` as a plain substring
    pub fn literal(text: &str) -> Self {
        MessageFilter {
            pattern: Pattern::Literal(text.to_string()),
        }
    }

    /// The regular expression, or the plain text of a literal filter
    pub fn pattern(&self) -> &str {
        match &self.pattern {
            Pattern::Regex(regex) => regex.as_str(),
            Pattern::Literal(text) => text,
        }
    }
}

impl CommitFilter for MessageFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        let message = commit.message();
        MatchResult::from_included(match &self.pattern {
            Pattern::Regex(regex) => regex.is_match(message),
            Pattern::Literal(text) => message.contains(text.as_str()),
        })
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }
}

/// Includes commits signed off by one identity
///
/// Looks for a `Signed-off-by: Name <email>` line anywhere in the message.
/// Trailing blanks on that line are ignored.
#[derive(Debug, Clone)]
pub struct SignedOffByFilter {
    identity: Identity,
    trailer: String,
}

impl SignedOffByFilter {
    pub fn new(identity: Identity) -> Self {
        let trailer = format!("Signed-off-by: {}", identity);

        SignedOffByFilter { identity, trailer }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl From<&Person> for SignedOffByFilter {
    fn from(person: &Person) -> Self {
        SignedOffByFilter::new(person.identity().clone())
    }
}

impl CommitFilter for SignedOffByFilter {
    fn evaluate(&mut self, commit: &Commit) -> MatchResult {
        MatchResult::from_included(
            commit
                .message()
                .split('\n')
                .any(|line| line.trim_end_matches([' ', '\t']) == self.trailer),
        )
    }

    fn clone_filter(&self) -> Box<dyn CommitFilter> {
        Box::new(self.clone())
    }
}
