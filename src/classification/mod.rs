//! Mapping index values to named quality classes.
//!
//! Each index has a built-in scale in [`scales`]. A [`ClassificationScales`]
//! can replace any of them with a custom [`RangeClassifier`].

pub mod ranges;
pub mod scales;

use crate::indices::IndexKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use ranges::{ClassRange, RangeClassifier};
pub use scales::{ContaminationClass, HpiClass, MiClass, PigClass, WqiClass};

/// Class assigned to one index value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub label: String,
    /// 1-based position on the scale
    pub class_ordinal: u8,
    pub class_numeral: String,
    pub risk_level: u8,
    /// Presentation color (hex)
    pub color: String,
}

impl Classification {
    fn from_ordinal(label: &str, ordinal: u8, risk_level: u8, levels: u8) -> Self {
        Self {
            label: label.to_string(),
            class_ordinal: ordinal,
            class_numeral: scales::roman(ordinal).to_string(),
            risk_level,
            color: scales::scaled_color(ordinal, levels).to_string(),
        }
    }
}

/// Classify against the built-in scale for `kind`
pub fn classify_builtin(kind: IndexKind, value: f64) -> Classification {
    match kind {
        IndexKind::Mi => {
            let class = MiClass::from_value(value);
            Classification {
                label: class.label().to_string(),
                class_ordinal: class.risk_level(),
                class_numeral: class.numeral().to_string(),
                risk_level: class.risk_level(),
                color: class.color().to_string(),
            }
        }
        IndexKind::Hpi => {
            let class = HpiClass::from_value(value);
            Classification::from_ordinal(class.label(), class.risk_level(), class.risk_level(), 5)
        }
        IndexKind::Wqi => {
            let class = WqiClass::from_value(value);
            Classification::from_ordinal(class.label(), class.risk_level(), class.risk_level(), 4)
        }
        IndexKind::Hei => {
            let class = ContaminationClass::from_hei(value);
            Classification::from_ordinal(class.label(), class.risk_level(), class.risk_level(), 3)
        }
        IndexKind::Cdeg => {
            let class = ContaminationClass::from_cdeg(value);
            Classification::from_ordinal(class.label(), class.risk_level(), class.risk_level(), 3)
        }
        IndexKind::Pig => {
            let class = PigClass::from_value(value);
            Classification::from_ordinal(class.label(), class.risk_level(), class.risk_level(), 4)
        }
    }
}

/// Built-in scales with optional per-index custom ranges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationScales {
    custom: BTreeMap<IndexKind, RangeClassifier>,
}

impl ClassificationScales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scale for `kind`. Empty range sets are ignored.
    pub fn with_custom(mut self, kind: IndexKind, classifier: RangeClassifier) -> Self {
        if classifier.is_empty() {
            log::warn!("Ignoring empty custom scale for {}", kind);
        } else {
            self.custom.insert(kind, classifier);
        }
        self
    }

    pub fn custom(&self, kind: IndexKind) -> Option<&RangeClassifier> {
        self.custom.get(&kind)
    }

    pub fn classify(&self, kind: IndexKind, value: f64) -> Classification {
        let Some(classifier) = self.custom.get(&kind) else {
            return classify_builtin(kind, value);
        };
        let levels = classifier.ranges().len().min(u8::MAX as usize) as u8;
        match classifier.classify_indexed(value) {
            Some((position, range)) => {
                let ordinal = (position + 1).min(u8::MAX as usize) as u8;
                Classification::from_ordinal(&range.label, ordinal, range.severity, levels)
            }
            None => classify_builtin(kind, value),
        }
    }
}
