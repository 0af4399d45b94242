//! Service-info API response DTOs.
//!
//! These types map directly to the JSON returned by
//! `GET <base>service/<date>/<train-number>`. Everything except the station
//! code is optional: first and last stops have no arrival or departure side,
//! and platforms are often unknown.
//!
//! Times and delays are passed on to the feed untouched, so they are kept as
//! raw JSON values. A stop field of an unexpected type never rejects the
//! whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a service lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInfoResponse {
    /// Services running under the requested train number; absent when unknown.
    #[serde(default)]
    pub services: Option<Vec<Service>>,
}

/// One service run, usually one per wing of a split train.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub service_number: Option<String>,

    #[serde(default)]
    pub stops: Vec<ServiceStop>,
}

/// Per-stop timing and platform data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceStop {
    /// Station code, in whatever casing the service uses.
    pub station: String,

    #[serde(default, deserialize_with = "lenient_platform")]
    pub scheduled_arrival_platform: Option<String>,

    #[serde(default, deserialize_with = "lenient_platform")]
    pub actual_arrival_platform: Option<String>,

    #[serde(default, deserialize_with = "lenient_platform")]
    pub scheduled_departure_platform: Option<String>,

    #[serde(default, deserialize_with = "lenient_platform")]
    pub actual_departure_platform: Option<String>,

    #[serde(default)]
    pub arrival_time: Option<Value>,

    #[serde(default)]
    pub departure_time: Option<Value>,

    /// Arrival delay in minutes
    #[serde(default)]
    pub arrival_delay: Option<Value>,

    /// Departure delay in minutes
    #[serde(default)]
    pub departure_delay: Option<Value>,
}

/// Platforms are compared as text; numbers are taken as their digits and
/// anything else counts as unknown.
fn lenient_platform<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(platform)) => Some(platform),
        Some(Value::Number(platform)) => Some(platform.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_lookup() {
        let json = r#"{
            "services": [{
                "service_number": "3041",
                "stops": [
                    {
                        "station": "ut",
                        "scheduled_arrival_platform": null,
                        "actual_arrival_platform": null,
                        "scheduled_departure_platform": "5",
                        "actual_departure_platform": "7",
                        "arrival_time": null,
                        "departure_time": "2026-10-19T10:15:00+02:00",
                        "arrival_delay": null,
                        "departure_delay": 3
                    },
                    {"station": "asd", "arrival_time": "2026-10-19T10:41:00+02:00"}
                ]
            }]
        }"#;

        let response: ServiceInfoResponse = serde_json::from_str(json).unwrap();
        let services = response.services.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].service_number.as_deref(), Some("3041"));

        let first = &services[0].stops[0];
        assert_eq!(first.station, "ut");
        assert_eq!(first.actual_departure_platform.as_deref(), Some("7"));
        assert_eq!(first.departure_delay, Some(Value::from(3)));
        assert!(first.arrival_time.is_none());

        let last = &services[0].stops[1];
        assert!(last.arrival_time.is_some());
        assert!(last.scheduled_departure_platform.is_none());
    }

    #[test]
    fn missing_services_field() {
        let response: ServiceInfoResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(response.services.is_none());
    }

    #[test]
    fn odd_fields_stay_local_to_their_stop() {
        let json = r#"{
            "services": [{
                "stops": [
                    {
                        "station": "ut",
                        "scheduled_departure_platform": "5",
                        "actual_departure_platform": "7",
                        "departure_time": "2026-10-19T10:15:00Z",
                        "departure_delay": 3
                    },
                    {
                        "station": "asa",
                        "arrival_time": "10:30",
                        "arrival_delay": 1.5,
                        "actual_arrival_platform": 4,
                        "scheduled_departure_platform": {"track": "4"}
                    }
                ]
            }]
        }"#;

        let response: ServiceInfoResponse = serde_json::from_str(json).unwrap();
        let stops = &response.services.unwrap()[0].stops;

        assert_eq!(stops[0].actual_departure_platform.as_deref(), Some("7"));
        assert_eq!(
            stops[0].departure_time,
            Some(Value::from("2026-10-19T10:15:00Z"))
        );
        assert_eq!(stops[0].departure_delay, Some(Value::from(3)));

        assert_eq!(stops[1].arrival_time, Some(Value::from("10:30")));
        assert_eq!(stops[1].arrival_delay, Some(Value::from(1.5)));
        assert_eq!(stops[1].actual_arrival_platform.as_deref(), Some("4"));
        assert_eq!(stops[1].scheduled_departure_platform, None);
    }
}
