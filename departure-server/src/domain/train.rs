//! Train journey input model.
//!
//! A `Train` is one departure of one train from one station, as delivered by
//! the upstream departure information feed. Fields are read-only snapshots;
//! nothing in this crate mutates them.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{LocalizedText, Platform, Station};

/// Minutes a cancelled train stays on the board after its scheduled departure.
pub const CANCELLED_GRACE_MINS: i64 = 2;

/// One train departure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Train {
    /// Train number (e.g. "3041")
    pub number: String,

    /// Scheduled departure, in station local time
    pub departure: DateTime<FixedOffset>,

    /// Operating day of the train run
    pub service_date: NaiveDate,

    /// Destination(s) as originally planned. Split trains have two.
    #[serde(default)]
    pub destination: Vec<Station>,

    /// Destination(s) currently in effect.
    #[serde(default)]
    pub destination_actual: Vec<Station>,

    /// Category name (e.g. "Intercity")
    pub category: String,

    /// Category code (e.g. "IC")
    pub category_code: String,

    /// Departure delay in seconds
    #[serde(default)]
    pub delay_secs: i64,

    /// Scheduled departure platform(s)
    #[serde(default)]
    pub platform: Vec<Platform>,

    /// Departure platform(s) currently in effect
    #[serde(default)]
    pub platform_actual: Vec<Platform>,

    /// Change messages, already localized
    #[serde(default)]
    pub remarks: Vec<LocalizedText>,

    /// Travel tips, already localized
    #[serde(default)]
    pub tips: Vec<LocalizedText>,

    #[serde(default)]
    pub cancelled: bool,

    /// Upstream status code
    #[serde(default)]
    pub status: u8,

    /// Operating company (e.g. "NS")
    pub carrier: String,

    /// Planned shortened route shown under the destination
    #[serde(default)]
    pub via: Vec<Station>,

    /// Shortened route currently in effect
    #[serde(default)]
    pub via_actual: Vec<Station>,

    #[serde(default)]
    pub wings: Vec<Wing>,

    /// Set when the departure comes from the timetable only, without real-time updates
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Marketing name of the train (e.g. "Thalys")
    #[serde(default)]
    pub name: Option<String>,
}

impl Train {
    /// Whether a cancelled train has dropped out of its grace window.
    pub fn is_past_cancelled_grace(&self, now: DateTime<FixedOffset>) -> bool {
        self.departure + Duration::minutes(CANCELLED_GRACE_MINS) < now
    }
}

/// A physically coupled part of a train with its own destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wing {
    pub destination_actual: Station,
    #[serde(default)]
    pub rolling_stock: Vec<RollingStock>,
    /// Stops still served, in order
    #[serde(default)]
    pub stops_actual: Vec<Station>,
}

/// One rolling-stock unit in a wing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingStock {
    /// Material series (e.g. "VIRM", "SLT")
    pub series: String,
    /// Number of carriages, when known
    #[serde(default)]
    pub length: Option<u8>,
    pub destination_actual: Station,
}

impl RollingStock {
    /// Unit type as shown on platform displays, e.g. "VIRM-6".
    pub fn unit_type(&self) -> String {
        match self.length {
            Some(length) => format!("{}-{}", self.series, length),
            None => self.series.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::StationCode;

    pub fn station(code: &str, name: &str) -> Station {
        Station::new(StationCode::parse(code).unwrap(), name)
    }

    pub fn time(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    /// An on-time Intercity from Utrecht to Amsterdam via Amsterdam Amstel.
    pub fn intercity() -> Train {
        let asd = station("ASD", "Amsterdam Centraal");
        Train {
            number: "3041".into(),
            departure: time("2026-10-19T10:15:00+02:00"),
            service_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            destination: vec![asd.clone()],
            destination_actual: vec![asd.clone()],
            category: "Intercity".into(),
            category_code: "IC".into(),
            delay_secs: 0,
            platform: vec![Platform::new("5")],
            platform_actual: vec![Platform::new("5")],
            remarks: Vec::new(),
            tips: Vec::new(),
            cancelled: false,
            status: 2,
            carrier: "NS".into(),
            via: vec![station("ASA", "Amsterdam Amstel")],
            via_actual: vec![station("ASA", "Amsterdam Amstel")],
            wings: vec![Wing {
                destination_actual: asd.clone(),
                rolling_stock: vec![RollingStock {
                    series: "VIRM".into(),
                    length: Some(6),
                    destination_actual: asd.clone(),
                }],
                stops_actual: vec![
                    station("UT", "Utrecht Centraal"),
                    station("ASA", "Amsterdam Amstel"),
                    asd,
                ],
            }],
            is_static: false,
            name: None,
        }
    }
}
