//! Error types shared by every component in the crate.

use crate::locale::Text;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the paginator and its collaborators.
///
/// The paginator itself only fails on configuration. Everything else
/// (empty filter results, out-of-range pages) degrades gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A page size of zero was requested.
    #[error("invalid configuration: per_page must be positive, got {per_page}")]
    InvalidConfiguration {
        /// The rejected page size.
        per_page: usize,
    },

    /// A page size attribute could not be parsed.
    #[error("invalid per-page value: {value:?}")]
    InvalidPerPage {
        /// The raw attribute text.
        value: String,
    },

    /// A date field did not hold a `YYYY-MM-DD` date.
    #[error("invalid date: {value:?}")]
    InvalidDate {
        /// The raw field text.
        value: String,
    },

    /// A date range starts after it ends.
    #[error("start date {begin} is after end date {end}")]
    StartAfterEnd {
        /// First day of the range.
        begin: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// A submitted request came back as a failure.
    #[error("request failed: {message}")]
    Request {
        /// Display message extracted from the failure response.
        message: String,
    },
}

impl Error {
    /// The translatable message a form should show for this error, if any.
    pub fn text(&self) -> Option<Text> {
        match self {
            Error::StartAfterEnd { .. } => Some(Text::StartAfterEnd),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
