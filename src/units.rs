//! Concentration unit conversion.
//!
//! All standards are in ppb (µg/L), so measurements are converted before
//! they reach the calculators.

use crate::errors::{Error, Result};
use crate::indices::Concentrations;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    MgPerL,
    Ppm,
    #[default]
    UgPerL,
    Ppb,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::MgPerL, Unit::Ppm, Unit::UgPerL, Unit::Ppb];

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::MgPerL => "mg/L",
            Unit::Ppm => "ppm",
            Unit::UgPerL => "µg/L",
            Unit::Ppb => "ppb",
        }
    }

    /// Multiplier to ppb
    pub fn factor(&self) -> f64 {
        match self {
            Unit::MgPerL | Unit::Ppm => 1000.0,
            Unit::UgPerL | Unit::Ppb => 1.0,
        }
    }

    pub fn to_ppb(&self, value: f64) -> f64 {
        value * self.factor()
    }

    fn valid_units() -> String {
        ["mg/L", "ppm", "µg/L", "ug/L", "ppb"].join(", ")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "mg/L" => Ok(Unit::MgPerL),
            "ppm" => Ok(Unit::Ppm),
            "µg/L" | "ug/L" => Ok(Unit::UgPerL),
            "ppb" => Ok(Unit::Ppb),
            other => Err(Error::UnknownUnit {
                unit: other.to_string(),
                valid: Unit::valid_units(),
            }),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

pub fn convert_to_ppb(value: f64, unit: Unit) -> f64 {
    let converted = unit.to_ppb(value);
    log::trace!("Converted {} {} to {} ppb", value, unit, converted);
    converted
}

/// Convert every value of a row to ppb, skipping `exclude` and non-finite values
pub fn convert_row(row: &Concentrations, unit: Unit, exclude: &[&str]) -> Concentrations {
    row.iter()
        .filter(|(symbol, _)| !exclude.contains(&symbol.as_str()))
        .filter_map(|(symbol, &value)| {
            if value.is_finite() {
                Some((symbol.clone(), convert_to_ppb(value, unit)))
            } else {
                log::warn!("Could not convert value for {}: {}", symbol, value);
                None
            }
        })
        .collect()
}

pub fn validate_unit(unit: &str) -> bool {
    unit.parse::<Unit>().is_ok()
}

/// Human readable table of supported units
pub fn conversion_info() -> String {
    let mut info = String::from("Supported units and conversion factors to ppb:\n");
    for unit in Unit::ALL {
        info.push_str(&format!("  - {}: multiply by {}\n", unit, unit.factor()));
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("mg/L".parse::<Unit>().unwrap(), Unit::MgPerL);
        assert_eq!(" ppm ".parse::<Unit>().unwrap(), Unit::Ppm);
        assert_eq!("ug/L".parse::<Unit>().unwrap(), Unit::UgPerL);
        assert_eq!("µg/L".parse::<Unit>().unwrap(), Unit::UgPerL);
        assert!(matches!(
            "mg/l".parse::<Unit>(),
            Err(Error::UnknownUnit { unit, .. }) if unit == "mg/l"
        ));
        assert!(!validate_unit("g/L"));
    }

    #[test]
    fn test_conversion_factors() {
        assert_eq!(convert_to_ppb(0.05, Unit::MgPerL), 50.0);
        assert_eq!(convert_to_ppb(1.5, Unit::Ppm), 1500.0);
        assert_eq!(convert_to_ppb(12.0, Unit::Ppb), 12.0);
    }

    #[test]
    fn test_convert_row_skips_excluded_and_nan() {
        let row: Concentrations = [
            ("As".to_string(), 0.02),
            ("Year".to_string(), 2024.0),
            ("Pb".to_string(), f64::NAN),
        ]
        .into_iter()
        .collect();
        let converted = convert_row(&row, Unit::MgPerL, &["Year"]);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted["As"], 20.0);
    }

    #[test]
    fn test_unit_serde_uses_symbol() {
        let json = serde_json::to_string(&Unit::MgPerL).unwrap();
        assert_eq!(json, r#""mg/L""#);
        let unit: Unit = serde_json::from_str(r#""ppb""#).unwrap();
        assert_eq!(unit, Unit::Ppb);
        assert!(serde_json::from_str::<Unit>(r#""grains""#).is_err());
    }

    #[test]
    fn test_conversion_info_lists_units() {
        let info = conversion_info();
        assert!(info.contains("mg/L: multiply by 1000"));
        assert!(info.contains("ppb: multiply by 1"));
    }
}
