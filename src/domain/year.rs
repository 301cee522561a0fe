//! Publication year constrained to four digits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Year {0} is outside the range {}..={}", Year::MIN, Year::MAX)]
pub struct YearOutOfRange(pub i64);

/// A year in the inclusive range [1000, 9999].
///
/// Serialized as a plain JSON integer. Deserializing an out-of-range value
/// fails, so a collection file holding one is reported as corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(u16);

impl Year {
    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 9999;

    /// Clamp any integer into the valid range.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Year(clamped as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        Year(Self::MIN)
    }
}

impl TryFrom<i64> for Year {
    type Error = YearOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Year(value as u16))
        } else {
            Err(YearOutOfRange(value))
        }
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        i64::from(year.0)
    }
}

impl FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid year: '{}'. Expected an integer", s))?;
        Year::try_from(value).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
