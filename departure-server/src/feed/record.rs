//! Feed records sent to passenger information displays.
//!
//! Field names on the wire are the ones the display clients were built
//! against, hence the Dutch renames.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

use crate::serviceinfo::ServiceStop;

/// One departure on a station feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainRecord {
    #[serde(rename = "treinNr")]
    pub train_number: String,

    /// Scheduled departure (ISO-8601, station local time)
    #[serde(rename = "vertrek")]
    pub departure: DateTime<FixedOffset>,

    /// Destination, "/"-joined when wings run to different places
    #[serde(rename = "bestemming")]
    pub destination: String,

    #[serde(rename = "soort")]
    pub category: String,

    #[serde(rename = "soortAfk")]
    pub category_code: String,

    /// Delay in whole minutes
    #[serde(rename = "vertraging")]
    pub delay_mins: i64,

    /// Departure platform(s), `null` for cancelled trains
    #[serde(rename = "spoor")]
    pub platform: Option<String>,

    #[serde(rename = "sprWijziging")]
    pub platform_changed: bool,

    #[serde(rename = "opmerkingen")]
    pub remarks: Vec<String>,

    pub tips: Vec<String>,

    #[serde(rename = "opgeheven")]
    pub cancelled: bool,

    pub status: u8,

    #[serde(rename = "vervoerder")]
    pub carrier: String,

    /// Planned destination; only sent when the destination changed
    #[serde(
        rename = "bestemmingOrigineel",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_destination: Option<String>,

    pub via: Option<String>,

    #[serde(rename = "vleugels")]
    pub wings: Vec<WingRecord>,
}

/// One wing of a departing train.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WingRecord {
    #[serde(rename = "bestemming")]
    pub destination: String,

    /// (unit type, destination) per rolling-stock unit, when requested
    #[serde(rename = "mat", skip_serializing_if = "Option::is_none")]
    pub rolling_stock: Option<Vec<(String, String)>>,

    #[serde(rename = "stopstations", skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<StopRecord>>,
}

/// One stop of a wing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRecord {
    pub code: String,

    #[serde(rename = "naam")]
    pub name: String,

    /// Present only when service-info knew this stop
    #[serde(flatten)]
    pub enrichment: Option<StopEnrichment>,
}

/// Per-stop data taken from service-info.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopEnrichment {
    #[serde(rename = "sprWijziging")]
    pub platform_changed: bool,

    #[serde(rename = "aankomstspoor")]
    pub arrival_platform: Option<String>,

    #[serde(rename = "vertrekspoor")]
    pub departure_platform: Option<String>,

    /// Times and delays exactly as service-info sent them
    #[serde(rename = "aankomst")]
    pub arrival: Option<Value>,

    #[serde(rename = "vertrek")]
    pub departure: Option<Value>,

    #[serde(rename = "vertragingAankomst")]
    pub arrival_delay: Option<Value>,

    #[serde(rename = "vertragingVertrek")]
    pub departure_delay: Option<Value>,
}

impl StopEnrichment {
    /// Derive display data from a service-info stop.
    ///
    /// Each side shows the actual platform when one is known and differs
    /// from the scheduled one; either side changing sets the change flag.
    pub fn from_stop(stop: &ServiceStop) -> Self {
        let (arrival_platform, arrival_changed) = effective_platform(
            &stop.scheduled_arrival_platform,
            &stop.actual_arrival_platform,
        );
        let (departure_platform, departure_changed) = effective_platform(
            &stop.scheduled_departure_platform,
            &stop.actual_departure_platform,
        );

        Self {
            platform_changed: arrival_changed || departure_changed,
            arrival_platform,
            departure_platform,
            arrival: stop.arrival_time.clone(),
            departure: stop.departure_time.clone(),
            arrival_delay: stop.arrival_delay.clone(),
            departure_delay: stop.departure_delay.clone(),
        }
    }
}

fn effective_platform(
    scheduled: &Option<String>,
    actual: &Option<String>,
) -> (Option<String>, bool) {
    match actual {
        Some(actual) if scheduled.as_ref() != Some(actual) => (Some(actual.clone()), true),
        _ => (scheduled.clone(), false),
    }
}
