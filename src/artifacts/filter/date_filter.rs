//! Date range filters over author and committer timestamps
//!
//! Both bounds are inclusive. The walk visits commits newest-first by
//! committer time, so with [`CommitterDateFilter::stop_when_older`] the first
//! commit older than `since` ends the walk: nothing after it can match.
//! Author time does not follow the walk order, so stopping on author dates may
//! skip older-committed commits that were authored inside the range.

use crate::artifacts::filter::person_filter::PersonField;
use crate::artifacts::filter::{CommitFilter, MatchResult};
use crate::artifacts::objects::commit::Commit;
use crate::error::FilterError;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateRange {
    since: Option<DateTime<FixedOffset>>,
    until: Option<DateTime<FixedOffset>>,
    stop_when_older: bool,
}

impl DateRange {
    fn evaluate(&self, timestamp: DateTime<FixedOffset>) -> MatchResult {
        if let Some(since) = self.since
            && timestamp < since
        {
            return if self.stop_when_older {
                MatchResult::EXCLUDE.with_stop()
            } else {
                MatchResult::EXCLUDE
            };
        }

        MatchResult::from_included(self.until.is_none_or(|until| timestamp <= until))
    }
}

macro_rules! date_filter {
    ($(#[$meta:meta])* $name:ident, $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            range: DateRange,
        }

        impl $name {
            /// Commits at or after `since`
            pub fn since(since: DateTime<FixedOffset>) -> Self {
                $name {
                    range: DateRange {
                        since: Some(since),
                        until: None,
                        stop_when_older: false,
                    },
                }
            }

            /// Commits at or before `until`
            pub fn until(until: DateTime<FixedOffset>) -> Self {
                $name {
                    range: DateRange {
                        since: None,
                        until: Some(until),
                        stop_when_older: false,
                    },
                }
            }

            pub fn between(
                since: DateTime<FixedOffset>,
                until: DateTime<FixedOffset>,
            ) -> Result<Self, FilterError> {
                if since > until {
                    return Err(FilterError::EmptyDateRange { since, until });
                }

                Ok($name {
                    range: DateRange {
                        since: Some(since),
                        until: Some(until),
                        stop_when_older: false,
                    },
                })
            }

            /// Signal stop on the first commit older than `since`
            pub fn stop_when_older(self) -> Self {
                $name {
                    range: DateRange {
                        stop_when_older: true,
                        ..self.range
                    },
                }
            }
        }

        impl CommitFilter for $name {
            fn evaluate(&mut self, commit: &Commit) -> MatchResult {
                self.range.evaluate($field.of(commit).timestamp())
            }

            fn clone_filter(&self) -> Box<dyn CommitFilter> {
                Box::new(*self)
            }
        }
    };
}

date_filter!(
    /// Includes commits authored inside a date range
    AuthorDateFilter,
    PersonField::Author
);

date_filter!(
    /// Includes commits committed inside a date range
    CommitterDateFilter,
    PersonField::Committer
);
