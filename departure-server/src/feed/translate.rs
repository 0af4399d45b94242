//! Translation of trains into feed records.
//!
//! All display rules live here: which destination to show for split or
//! diverted trains, how delays round, when a platform counts as changed and
//! how long a cancelled train stays on the board.

use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::debug;

use crate::domain::{Language, Station, Train, Wing, join_platforms};
use crate::serviceinfo::{Service, ServiceInfoSource, ServiceStop};

use super::record::{StopEnrichment, StopRecord, TrainRecord, WingRecord};

/// Optional parts of a feed record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedOptions {
    /// Include the rolling-stock composition of each wing
    pub rolling_stock: bool,
    /// Include the stop list of each wing
    pub stops: bool,
}

/// Translate a train into a feed record.
///
/// Returns `None` when the train should be left out of the feed: cancelled
/// trains are shown until two minutes after their scheduled departure.
pub async fn train_to_record<S: ServiceInfoSource>(
    train: &Train,
    language: Language,
    now: DateTime<FixedOffset>,
    options: FeedOptions,
    serviceinfo: &S,
) -> Option<TrainRecord> {
    if train.cancelled && train.is_past_cancelled_grace(now) {
        debug!(train = %train.number, departure = %train.departure, "dropping cancelled train");
        return None;
    }

    let planned_destination = join_long_names(&train.destination);

    let scheduled_platform = join_platforms(&train.platform);
    let actual_platform = join_platforms(&train.platform_actual);
    let platform_changed = scheduled_platform != actual_platform;

    let (destination, platform, delay_mins, original_destination) = if train.cancelled {
        (planned_destination, None, 0, None)
    } else {
        let current = current_destination(&train.destination_actual);
        let original = (current != planned_destination).then_some(planned_destination);
        (
            current,
            Some(actual_platform),
            delay_minutes(train.delay_secs),
            original,
        )
    };

    let mut remarks: Vec<String> = train
        .remarks
        .iter()
        .map(|r| r.get(language).to_string())
        .collect();
    if train.is_static {
        remarks.push(language.no_realtime_notice().to_string());
    }

    let mut tips: Vec<String> = train
        .tips
        .iter()
        .map(|t| t.get(language).to_string())
        .collect();
    if let Some(name) = &train.name {
        tips.push(language.train_name_notice(name));
    }

    let via_route = if train.cancelled {
        &train.via
    } else {
        &train.via_actual
    };
    let via = (!via_route.is_empty()).then(|| {
        via_route
            .iter()
            .map(|s| s.middle_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    });

    let mut wings = Vec::with_capacity(train.wings.len());
    for wing in &train.wings {
        wings.push(wing_to_record(wing, train, options, serviceinfo).await);
    }

    Some(TrainRecord {
        train_number: train.number.clone(),
        departure: train.departure,
        destination,
        category: train.category.clone(),
        category_code: train.category_code.clone(),
        delay_mins,
        platform,
        platform_changed,
        remarks,
        tips,
        cancelled: train.cancelled,
        status: train.status,
        carrier: train.carrier.clone(),
        original_destination,
        via,
        wings,
    })
}

async fn wing_to_record<S: ServiceInfoSource>(
    wing: &Wing,
    train: &Train,
    options: FeedOptions,
    serviceinfo: &S,
) -> WingRecord {
    let rolling_stock = options.rolling_stock.then(|| {
        wing.rolling_stock
            .iter()
            .map(|unit| {
                (
                    unit.unit_type(),
                    unit.destination_actual.middle_name.clone(),
                )
            })
            .collect()
    });

    let stops = if options.stops {
        Some(
            stops_to_list(
                &wing.stops_actual,
                &train.number,
                train.service_date,
                serviceinfo,
            )
            .await,
        )
    } else {
        None
    };

    WingRecord {
        destination: wing.destination_actual.long_name.clone(),
        rolling_stock,
        stops,
    }
}

/// Build the stop list of one wing.
///
/// Service-info is consulted once per call. A stop gets enrichment fields
/// when any returned service has a stop with the same station code
/// (ignoring case); the first such stop wins.
pub async fn stops_to_list<S: ServiceInfoSource>(
    stops: &[Station],
    train_number: &str,
    service_date: NaiveDate,
    serviceinfo: &S,
) -> Vec<StopRecord> {
    let services = serviceinfo.lookup(train_number, service_date).await;

    stops
        .iter()
        .map(|station| StopRecord {
            code: station.code.as_str().to_string(),
            name: station.long_name.clone(),
            enrichment: services
                .as_deref()
                .and_then(|services| find_stop(services, station))
                .map(StopEnrichment::from_stop),
        })
        .collect()
}

fn find_stop<'a>(services: &'a [Service], station: &Station) -> Option<&'a ServiceStop> {
    services
        .iter()
        .flat_map(|service| &service.stops)
        .find(|stop| station.code.matches(&stop.station))
}

/// Destination to display for the current destination list.
///
/// Split trains carry two destinations; they are only both shown when the
/// wings really go to different places.
pub fn current_destination(destinations: &[Station]) -> String {
    match destinations {
        [only] => only.long_name.clone(),
        [first, second, ..] if first.long_name == second.long_name => first.long_name.clone(),
        _ => join_long_names(destinations),
    }
}

/// Delay in whole minutes, rounded to the nearest minute (halves away from zero).
pub fn delay_minutes(delay_secs: i64) -> i64 {
    (delay_secs as f64 / 60.0).round() as i64
}

fn join_long_names(stations: &[Station]) -> String {
    stations
        .iter()
        .map(|s| s.long_name.as_str())
        .collect::<Vec<_>>()
        .join("/")
}
