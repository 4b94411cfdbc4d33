//! Built-in classification scales.
//!
//! Every scale is lower-bound inclusive and upper-bound exclusive, with the
//! top class unbounded.

use serde::{Deserialize, Serialize};

/// Metal Index classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MiClass {
    VeryPure,
    Pure,
    SlightlyAffected,
    ModeratelyAffected,
    StronglyAffected,
    SeriouslyAffected,
}

impl MiClass {
    pub fn from_value(mi: f64) -> Self {
        match mi {
            v if v < 0.3 => MiClass::VeryPure,
            v if v < 1.0 => MiClass::Pure,
            v if v < 2.0 => MiClass::SlightlyAffected,
            v if v < 4.0 => MiClass::ModeratelyAffected,
            v if v < 6.0 => MiClass::StronglyAffected,
            _ => MiClass::SeriouslyAffected,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MiClass::VeryPure => "Very Pure",
            MiClass::Pure => "Pure",
            MiClass::SlightlyAffected => "Slightly Affected",
            MiClass::ModeratelyAffected => "Moderately Affected",
            MiClass::StronglyAffected => "Strongly Affected",
            MiClass::SeriouslyAffected => "Seriously Affected",
        }
    }

    pub fn numeral(&self) -> &'static str {
        roman(self.risk_level())
    }

    pub fn risk_level(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn color(&self) -> &'static str {
        PALETTE[*self as usize]
    }
}

/// Heavy-metal Pollution Index classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HpiClass {
    Excellent,
    Good,
    Poor,
    VeryPoor,
    Unsuitable,
}

impl HpiClass {
    pub fn from_value(hpi: f64) -> Self {
        match hpi {
            v if v < 25.0 => HpiClass::Excellent,
            v if v < 50.0 => HpiClass::Good,
            v if v < 75.0 => HpiClass::Poor,
            v if v < 100.0 => HpiClass::VeryPoor,
            _ => HpiClass::Unsuitable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HpiClass::Excellent => "Excellent",
            HpiClass::Good => "Good",
            HpiClass::Poor => "Poor",
            HpiClass::VeryPoor => "Very Poor",
            HpiClass::Unsuitable => "Unsuitable",
        }
    }

    pub fn risk_level(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Water Quality Index classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WqiClass {
    Excellent,
    Good,
    Poor,
    VeryPoor,
}

impl WqiClass {
    pub fn from_value(wqi: f64) -> Self {
        match wqi {
            v if v < 50.0 => WqiClass::Excellent,
            v if v < 100.0 => WqiClass::Good,
            v if v < 200.0 => WqiClass::Poor,
            _ => WqiClass::VeryPoor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WqiClass::Excellent => "Excellent",
            WqiClass::Good => "Good",
            WqiClass::Poor => "Poor",
            WqiClass::VeryPoor => "Very Poor",
        }
    }

    pub fn risk_level(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Three-step contamination scale shared by HEI and Cdeg
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContaminationClass {
    Low,
    Medium,
    High,
}

impl ContaminationClass {
    /// HEI: < 10 low, < 20 medium
    pub fn from_hei(hei: f64) -> Self {
        Self::from_thresholds(hei, 10.0, 20.0)
    }

    /// Cdeg: < 1 low, < 3 medium
    pub fn from_cdeg(cdeg: f64) -> Self {
        Self::from_thresholds(cdeg, 1.0, 3.0)
    }

    fn from_thresholds(value: f64, low_below: f64, medium_below: f64) -> Self {
        if value < low_below {
            ContaminationClass::Low
        } else if value < medium_below {
            ContaminationClass::Medium
        } else {
            ContaminationClass::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContaminationClass::Low => "Low contamination",
            ContaminationClass::Medium => "Medium contamination",
            ContaminationClass::High => "High contamination",
        }
    }

    pub fn risk_level(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Pollution Index of Groundwater classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PigClass {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl PigClass {
    pub fn from_value(pig: f64) -> Self {
        match pig {
            v if v < 1.0 => PigClass::Low,
            v if v < 2.0 => PigClass::Moderate,
            v if v < 5.0 => PigClass::High,
            _ => PigClass::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PigClass::Low => "Low pollution",
            PigClass::Moderate => "Moderate pollution",
            PigClass::High => "High pollution",
            PigClass::VeryHigh => "Very high pollution",
        }
    }

    pub fn risk_level(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Green to red, one entry per MI class
pub(crate) const PALETTE: [&str; 6] = [
    "#1a9850", "#91cf60", "#d9ef8b", "#fee08b", "#fc8d59", "#d73027",
];

/// Palette entry for ordinal `ordinal` (1-based) of a scale with `levels` classes
pub(crate) fn scaled_color(ordinal: u8, levels: u8) -> &'static str {
    if levels <= 1 {
        return PALETTE[0];
    }
    let position = ordinal.clamp(1, levels) - 1;
    let last = (PALETTE.len() - 1) as f64;
    let index = (position as f64 * last / (levels - 1) as f64).round() as usize;
    PALETTE[index.min(PALETTE.len() - 1)]
}

pub(crate) fn roman(ordinal: u8) -> &'static str {
    const NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
    match ordinal {
        1..=10 => NUMERALS[ordinal as usize - 1],
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mi_boundaries() {
        assert_eq!(MiClass::from_value(0.29999).label(), "Very Pure");
        assert_eq!(MiClass::from_value(0.3).label(), "Pure");
        assert_eq!(MiClass::from_value(1.0).label(), "Slightly Affected");
        assert_eq!(MiClass::from_value(2.0).label(), "Moderately Affected");
        assert_eq!(MiClass::from_value(4.0).label(), "Strongly Affected");
        assert_eq!(MiClass::from_value(5.9999).label(), "Strongly Affected");
        assert_eq!(MiClass::from_value(6.0).label(), "Seriously Affected");
        assert_eq!(MiClass::from_value(1e9).label(), "Seriously Affected");
    }

    #[test]
    fn test_mi_class_metadata() {
        let class = MiClass::SlightlyAffected;
        assert_eq!(class.numeral(), "III");
        assert_eq!(class.risk_level(), 3);
        assert_eq!(MiClass::VeryPure.color(), "#1a9850");
        assert_eq!(MiClass::SeriouslyAffected.color(), "#d73027");
    }

    #[test]
    fn test_hpi_boundaries() {
        assert_eq!(HpiClass::from_value(24.99), HpiClass::Excellent);
        assert_eq!(HpiClass::from_value(25.0), HpiClass::Good);
        assert_eq!(HpiClass::from_value(50.0), HpiClass::Poor);
        assert_eq!(HpiClass::from_value(75.0), HpiClass::VeryPoor);
        assert_eq!(HpiClass::from_value(100.0), HpiClass::Unsuitable);
    }

    #[test]
    fn test_wqi_boundaries() {
        assert_eq!(WqiClass::from_value(49.9), WqiClass::Excellent);
        assert_eq!(WqiClass::from_value(50.0), WqiClass::Good);
        assert_eq!(WqiClass::from_value(199.9), WqiClass::Poor);
        assert_eq!(WqiClass::from_value(200.0), WqiClass::VeryPoor);
    }

    #[test]
    fn test_contamination_thresholds_differ_per_index() {
        assert_eq!(ContaminationClass::from_hei(5.0), ContaminationClass::Low);
        assert_eq!(ContaminationClass::from_cdeg(5.0), ContaminationClass::High);
        assert_eq!(ContaminationClass::from_hei(10.0), ContaminationClass::Medium);
        assert_eq!(ContaminationClass::from_cdeg(1.0), ContaminationClass::Medium);
    }

    #[test]
    fn test_pig_boundaries() {
        assert_eq!(PigClass::from_value(0.99), PigClass::Low);
        assert_eq!(PigClass::from_value(1.0), PigClass::Moderate);
        assert_eq!(PigClass::from_value(2.0), PigClass::High);
        assert_eq!(PigClass::from_value(5.0), PigClass::VeryHigh);
    }

    #[test]
    fn test_scaled_color_spans_palette() {
        assert_eq!(scaled_color(1, 4), PALETTE[0]);
        assert_eq!(scaled_color(4, 4), PALETTE[5]);
        assert_eq!(scaled_color(1, 1), PALETTE[0]);
        assert_eq!(scaled_color(9, 3), PALETTE[5]);
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(6), "VI");
        assert_eq!(roman(0), "-");
    }
}
