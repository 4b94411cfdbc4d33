//! Station samples: one row of measured concentrations plus where and when
//! it was taken.

use crate::indices::Concentrations;
use serde::{Deserialize, Serialize};

/// Sampling site metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Concentrations measured at one station, in ppb
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSample {
    pub station: String,
    #[serde(default)]
    pub metadata: StationMetadata,
    pub concentrations: Concentrations,
}

impl StationSample {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: StationMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_concentration(mut self, symbol: impl Into<String>, value: f64) -> Self {
        self.concentrations.insert(symbol.into(), value);
        self
    }
}
