//! Departure platform type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A departure platform: a number plus an optional phase letter
/// marking a section of a long platform (e.g. "14b").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub number: String,
    #[serde(default)]
    pub phase: Option<String>,
}

impl Platform {
    /// A platform without a phase letter.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            phase: None,
        }
    }

    /// A platform section such as "5a".
    pub fn with_phase(number: impl Into<String>, phase: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            phase: Some(phase.into()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)?;
        if let Some(phase) = &self.phase {
            f.write_str(phase)?;
        }
        Ok(())
    }
}

/// Render a platform list the way displays show it: "5/7" for a train
/// departing from two platforms.
pub fn join_platforms(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
