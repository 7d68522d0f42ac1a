use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Starting month of a trip, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TravelMonth(u8);

impl TryFrom<u8> for TravelMonth {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (1..=12).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ValidationError::InvalidMonth {
                input: n.to_string(),
            })
        }
    }
}

impl From<TravelMonth> for u8 {
    fn from(m: TravelMonth) -> Self {
        m.0
    }
}

impl TravelMonth {
    pub fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.0 - 1)]
    }
}

impl fmt::Display for TravelMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TravelMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MONTH_NAMES
            .iter()
            .position(|m| m.to_lowercase() == wanted)
            .map(|i| Self(i as u8 + 1))
            .ok_or_else(|| ValidationError::InvalidMonth {
                input: s.to_string(),
            })
    }
}
