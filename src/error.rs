//! Error types for filter construction and history traversal

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// A filter was configured with arguments it cannot work with
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("identity matcher needs a name, an email, or both")]
    EmptyIdentity,

    #[error("invalid message pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("empty date range: {since} is after {until}")]
    EmptyDateRange {
        since: DateTime<FixedOffset>,
        until: DateTime<FixedOffset>,
    },

    #[error("empty parent count range: {min} is greater than {max}")]
    EmptyParentRange { min: usize, max: usize },

    #[error("commit limit must be greater than zero")]
    ZeroLimit,
}

/// A history walk could not be started or was aborted
#[derive(Debug, Error)]
pub enum FindError {
    /// `find` was called before a root filter was bound to the finder
    #[error("no filter is bound to the commit finder")]
    FilterNotSet,

    /// The repository could not be read while walking the history
    #[error(transparent)]
    Traversal(#[from] anyhow::Error),
}
