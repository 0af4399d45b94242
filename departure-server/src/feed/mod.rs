//! Departure feed records.
//!
//! Turns domain `Train`s into the JSON records served to passenger
//! information displays, optionally enriching stop lists with service-info.

mod record;
mod translate;

pub use record::{StopEnrichment, StopRecord, TrainRecord, WingRecord};
pub use translate::{
    FeedOptions, current_destination, delay_minutes, stops_to_list, train_to_record,
};
