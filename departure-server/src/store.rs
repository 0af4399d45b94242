//! In-memory departure snapshot.
//!
//! Departures are read from a directory of JSON files, one per station,
//! named after the station code (e.g. `UT.json`, `asd.json`). Each file holds
//! a JSON array of trains departing from that station.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::{StationCode, Train};

/// Errors loading a departure snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read departures directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid station code in filename {path:?}")]
    InvalidFilename { path: PathBuf },
}

/// Departures per station, sorted by scheduled departure.
#[derive(Debug, Default)]
pub struct DepartureStore {
    stations: HashMap<StationCode, Vec<Train>>,
}

impl DepartureStore {
    /// Load every `*.json` file in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        let mut stations = Vec::new();

        let entries = std::fs::read_dir(dir).map_err(|source| StoreError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| StoreError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let code = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| StationCode::parse(s).ok())
                .ok_or_else(|| StoreError::InvalidFilename { path: path.clone() })?;

            let json = std::fs::read_to_string(&path).map_err(|source| StoreError::ReadFile {
                path: path.clone(),
                source,
            })?;

            let trains: Vec<Train> =
                serde_json::from_str(&json).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?;

            stations.push((code, trains));
        }

        let store = Self::from_trains(stations);

        if store.is_empty() {
            warn!(dir = %dir.display(), "no departure files found");
        } else {
            info!(
                stations = store.len(),
                trains = store.train_count(),
                "loaded departures"
            );
        }

        Ok(store)
    }

    /// Build a store from departures per station.
    ///
    /// Lists for the same station (in any casing) are merged.
    pub fn from_trains(stations: impl IntoIterator<Item = (StationCode, Vec<Train>)>) -> Self {
        let mut map: HashMap<StationCode, Vec<Train>> = HashMap::new();
        for (code, trains) in stations {
            map.entry(code).or_default().extend(trains);
        }
        for trains in map.values_mut() {
            trains.sort_by_key(|t| t.departure);
        }
        Self { stations: map }
    }

    /// Departures from a station, or `None` for an unknown station.
    pub fn departures(&self, station: &StationCode) -> Option<&[Train]> {
        self.stations.get(station).map(Vec::as_slice)
    }

    /// Find one train run departing from a station.
    pub fn find_train(
        &self,
        station: &StationCode,
        service_date: NaiveDate,
        number: &str,
    ) -> Option<&Train> {
        self.departures(station)?
            .iter()
            .find(|t| t.service_date == service_date && t.number == number)
    }

    /// Stations with a departure list.
    pub fn stations(&self) -> impl Iterator<Item = &StationCode> {
        self.stations.keys()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of departures over all stations.
    pub fn train_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }
}
