//! Default submission check used when the host does not supply its own.

use crate::models::{AnswerRecord, DateBounds};
use chrono::NaiveDate;

/// A record is valid once every question is answered and the purchase date
/// falls inside today's picker window.
pub fn validate(record: &AnswerRecord) -> bool {
    validate_as_of(record, DateBounds::today().max)
}

pub fn validate_as_of(record: &AnswerRecord, today: NaiveDate) -> bool {
    let bounds = DateBounds::as_of(today);
    record.is_complete() && record.date.is_some_and(|date| bounds.contains(date))
}
