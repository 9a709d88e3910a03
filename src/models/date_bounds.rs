//! Range of purchase dates the date picker lets a respondent choose.

use crate::error::DateInputError;
use chrono::{Local, NaiveDate};

/// Format the keyboard picker displays and accepts.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y";
/// Format of `<input type="date">` values.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// The earliest purchase date the survey accepts.
pub fn earliest_purchase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 6, 1).expect("2019-06-01 is a valid date")
}

/// Inclusive `[min, max]` window for selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Window from the earliest purchase date up to `today`.
    pub fn as_of(today: NaiveDate) -> Self {
        Self {
            min: earliest_purchase_date(),
            max: today,
        }
    }

    /// Window ending on the local calendar date.
    pub fn today() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate, DateInputError> {
        if date < self.min {
            Err(DateInputError::BeforeMinimum {
                date,
                min: self.min,
            })
        } else if date > self.max {
            Err(DateInputError::AfterMaximum {
                date,
                max: self.max,
            })
        } else {
            Ok(date)
        }
    }

    /// Parses picker text and checks it against the window.
    ///
    /// `Ok(None)` means the picker was cleared.
    pub fn accept(&self, text: &str) -> Result<Option<NaiveDate>, DateInputError> {
        match parse_date_input(text)? {
            Some(date) => self.check(date).map(Some),
            None => Ok(None),
        }
    }
}

/// Reads a native date input value or a keyboard-typed `MM/dd/yyyy` date.
pub fn parse_date_input(text: &str) -> Result<Option<NaiveDate>, DateInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, INPUT_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(text, DISPLAY_FORMAT))
        .map(Some)
        .map_err(|_| DateInputError::Malformed(text.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Value for the `value`/`min`/`max` attributes of `<input type="date">`.
pub fn input_value(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}
