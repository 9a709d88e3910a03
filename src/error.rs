use chrono::NaiveDate;
use thiserror::Error;

/// Raised when a form value does not name a known choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    #[error("unknown product: {0:?}")]
    UnknownProduct(String),

    #[error("unknown rating code: {0:?}")]
    UnknownRating(String),

    #[error("expected \"Yes\" or \"No\", got {0:?}")]
    UnknownYesNo(String),
}

/// Raised by the date picker when typed or selected text cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("cannot read {0:?} as a date (expected YYYY-MM-DD or MM/dd/yyyy)")]
    Malformed(String),

    #[error("{date} is before the earliest allowed date {min}")]
    BeforeMinimum { date: NaiveDate, min: NaiveDate },

    #[error("{date} is in the future (latest allowed date is {max})")]
    AfterMaximum { date: NaiveDate, max: NaiveDate },
}
