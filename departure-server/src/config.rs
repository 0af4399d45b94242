//! Server configuration.
//!
//! Read from environment variables:
//!
//! - `DVS_BIND`: listen address (default `127.0.0.1:3000`)
//! - `DVS_DATA_DIR`: departures directory (default `data/departures`)
//! - `SERVICEINFO_URL`: service-info base URL; enrichment is off when unset
//! - `SERVICEINFO_ENABLED`: set to `false` or `0` to switch enrichment off
//!   while keeping the URL configured
//! - `DVS_REPLAY_TIME`: RFC 3339 timestamp to evaluate the snapshot at,
//!   instead of the wall clock

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::serviceinfo::ServiceInfoConfig;

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_DATA_DIR: &str = "data/departures";

/// Errors reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the departure server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub serviceinfo: Option<ServiceInfoConfig>,
    pub replay_time: Option<DateTime<FixedOffset>>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("DVS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind.parse().map_err(|_| ConfigError::Invalid {
            var: "DVS_BIND",
            value: bind.clone(),
        })?;

        let data_dir = lookup("DVS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let enabled = match lookup("SERVICEINFO_ENABLED") {
            None => true,
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "SERVICEINFO_ENABLED",
                value,
            })?,
        };

        let serviceinfo = lookup("SERVICEINFO_URL")
            .filter(|url| !url.is_empty())
            .map(with_trailing_slash)
            .map(|url| ServiceInfoConfig::new(url).with_enabled(enabled));

        let replay_time = lookup("DVS_REPLAY_TIME")
            .map(|value| {
                DateTime::parse_from_rfc3339(&value).map_err(|_| ConfigError::Invalid {
                    var: "DVS_REPLAY_TIME",
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            bind,
            data_dir,
            serviceinfo,
            replay_time,
        })
    }
}

/// Parse a boolean flag as accepted in query strings and the environment.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
