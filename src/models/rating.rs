use crate::error::ParseFieldError;
use std::fmt;
use std::str::FromStr;

/// Satisfaction levels, ordered from best to worst.
///
/// The discriminant is the wire code used in form values and JSON snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    VerySatisfied = 1,
    SomewhatSatisfied = 2,
    NeitherSatisfiedNorDissatisfied = 3,
    SomewhatDissatisfied = 4,
    VeryDissatisfied = 5,
}

impl Rating {
    /// Display order of the radio buttons.
    pub const ALL: [Rating; 5] = [
        Rating::VerySatisfied,
        Rating::SomewhatSatisfied,
        Rating::NeitherSatisfiedNorDissatisfied,
        Rating::SomewhatDissatisfied,
        Rating::VeryDissatisfied,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Rating::ALL.into_iter().find(|rating| rating.code() == code)
    }

    /// Human readable label shown next to the radio button.
    pub fn text(self) -> &'static str {
        match self {
            Rating::VerySatisfied => "Very satisfied",
            Rating::SomewhatSatisfied => "Somewhat satisfied",
            Rating::NeitherSatisfiedNorDissatisfied => "Neither satisfied nor dissatisfied",
            Rating::SomewhatDissatisfied => "Somewhat dissatisfied",
            Rating::VeryDissatisfied => "Very dissatisfied",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Rating {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Rating::from_code)
            .ok_or_else(|| ParseFieldError::UnknownRating(s.to_string()))
    }
}
