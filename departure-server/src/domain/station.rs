//! Station types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Maximum length of a station code.
const MAX_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A station code as used by the departure information system (e.g. "UT", "asd").
///
/// Codes are 1 to 8 ASCII letters or digits. Feeds are not consistent about
/// casing, so the original spelling is kept for output while equality and
/// hashing ignore ASCII case.
///
/// # Examples
///
/// ```
/// use departure_server::domain::StationCode;
///
/// let ut = StationCode::parse("UT").unwrap();
/// assert_eq!(ut.as_str(), "UT");
/// assert_eq!(ut, StationCode::parse("ut").unwrap());
/// assert!(ut.matches("Ut"));
///
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("U T").is_err());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_CODE_LEN {
            return Err(InvalidStationCode {
                reason: "must be at most 8 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStationCode {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw code from another feed.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for StationCode {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for StationCode {}

impl Hash for StationCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl TryFrom<String> for StationCode {
    type Error = InvalidStationCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationCode::parse(&value)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station with its display names.
///
/// Displays pick the name length that fits: long names for destinations,
/// middle names for via routes and rolling stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub code: StationCode,
    pub short_name: String,
    pub middle_name: String,
    pub long_name: String,
}

impl Station {
    /// Create a station that uses the same name at every length.
    pub fn new(code: StationCode, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code,
            short_name: name.clone(),
            middle_name: name.clone(),
            long_name: name,
        }
    }
}
