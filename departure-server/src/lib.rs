//! Departure feed server.
//!
//! Serves train departures as JSON records for passenger information
//! displays, with stop lists optionally enriched from a service-info API.

pub mod config;
pub mod domain;
pub mod feed;
pub mod serviceinfo;
pub mod store;
pub mod web;
