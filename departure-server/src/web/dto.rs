//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::config::parse_bool;
use crate::domain::Language;
use crate::feed::{FeedOptions, TrainRecord};

/// Query parameters shared by the feed endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    /// Language code ("nl" or "en"); Dutch when absent
    pub taal: Option<String>,

    /// Include rolling-stock composition
    pub materieel: Option<String>,

    /// Include stop lists
    pub stopstations: Option<String>,
}

impl FeedQuery {
    /// Requested language.
    pub fn language(&self) -> Language {
        self.taal
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }

    /// Requested optional record parts.
    ///
    /// Returns the name of the first parameter that is not a boolean.
    pub fn options(&self) -> Result<FeedOptions, &'static str> {
        Ok(FeedOptions {
            rolling_stock: flag(self.materieel.as_deref()).ok_or("materieel")?,
            stops: flag(self.stopstations.as_deref()).ok_or("stopstations")?,
        })
    }
}

/// An absent flag is off; a present one must parse.
fn flag(value: Option<&str>) -> Option<bool> {
    match value {
        None => Some(false),
        Some(value) => parse_bool(value),
    }
}

/// Departures from one station.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub result: &'static str,

    #[serde(rename = "vertrektijden")]
    pub departures: Vec<TrainRecord>,
}

impl StationResponse {
    pub fn new(departures: Vec<TrainRecord>) -> Self {
        Self {
            result: "OK",
            departures,
        }
    }
}

/// A single train.
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub result: &'static str,

    #[serde(rename = "trein")]
    pub train: TrainRecord,
}

impl TrainResponse {
    pub fn new(train: TrainRecord) -> Self {
        Self {
            result: "OK",
            train,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(taal: Option<&str>, materieel: Option<&str>, stopstations: Option<&str>) -> FeedQuery {
        FeedQuery {
            taal: taal.map(String::from),
            materieel: materieel.map(String::from),
            stopstations: stopstations.map(String::from),
        }
    }

    #[test]
    fn defaults() {
        let q = FeedQuery::default();
        assert_eq!(q.language(), Language::Dutch);
        assert_eq!(q.options(), Ok(FeedOptions::default()));
    }

    #[test]
    fn parses_flags_and_language() {
        let q = query(Some("en"), Some("true"), Some("1"));
        assert_eq!(q.language(), Language::English);
        assert_eq!(
            q.options(),
            Ok(FeedOptions {
                rolling_stock: true,
                stops: true
            })
        );
    }

    #[test]
    fn rejects_bad_flag() {
        assert_eq!(query(None, Some("ja"), None).options(), Err("materieel"));
        assert_eq!(query(None, None, Some("")).options(), Err("stopstations"));
    }
}
