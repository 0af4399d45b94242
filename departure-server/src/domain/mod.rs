//! Domain types for the departure feed.
//!
//! This module contains the typed model of the upstream departure data:
//! trains, their wings and rolling stock, stations and platforms. Validated
//! values (such as `StationCode`) enforce their invariants at construction
//! time, including when deserialized.

mod language;
mod platform;
mod station;
mod train;

pub use language::{Language, LocalizedText};
pub use platform::{Platform, join_platforms};
pub use station::{InvalidStationCode, Station, StationCode};
pub use train::{CANCELLED_GRACE_MINS, RollingStock, Train, Wing};

#[cfg(test)]
pub(crate) use train::fixtures;
