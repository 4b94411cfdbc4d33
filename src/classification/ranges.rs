//! Generic range classifier.
//!
//! Ranges are sorted ascending by their lower bound (a missing lower bound is
//! negative infinity) and scanned in order. Both bounds are inclusive, so when
//! two adjacent ranges share a boundary value the lower range wins. A value
//! that matches no range falls back to the last range in sorted order.

use serde::{Deserialize, Serialize};

/// One labelled band of a classification scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub label: String,
    #[serde(default)]
    pub severity: u8,
}

impl ClassRange {
    pub fn new(min: Option<f64>, max: Option<f64>, label: impl Into<String>, severity: u8) -> Self {
        Self {
            min,
            max,
            label: label.into(),
            severity,
        }
    }

    /// Range with no bounds; matches every value
    pub fn unbounded(label: impl Into<String>, severity: u8) -> Self {
        Self::new(None, None, label, severity)
    }

    pub fn effective_min(&self) -> f64 {
        self.min.unwrap_or(f64::NEG_INFINITY)
    }

    pub fn effective_max(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.effective_min() <= value && value <= self.effective_max()
    }
}

/// Classifier over a sorted set of [`ClassRange`]s
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeClassifier {
    ranges: Vec<ClassRange>,
}

impl RangeClassifier {
    /// Build a classifier; input order does not matter
    pub fn new(mut ranges: Vec<ClassRange>) -> Self {
        // Stable sort: ranges with equal lower bounds keep submission order.
        ranges.sort_by(|a, b| a.effective_min().total_cmp(&b.effective_min()));
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Matching range and its position in sorted order.
    ///
    /// Returns `None` only when the classifier has no ranges.
    pub fn classify_indexed(&self, value: f64) -> Option<(usize, &ClassRange)> {
        self.ranges
            .iter()
            .enumerate()
            .find(|(_, range)| range.contains(value))
            .or_else(|| self.ranges.iter().enumerate().last())
    }

    pub fn classify(&self, value: f64) -> Option<&ClassRange> {
        self.classify_indexed(value).map(|(_, range)| range)
    }

    pub fn label(&self, value: f64) -> Option<&str> {
        self.classify(value).map(|range| range.label.as_str())
    }

    /// Problems that make a range set suspicious but still usable
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for range in &self.ranges {
            if range.label.trim().is_empty() {
                problems.push("range label must not be empty".to_string());
            }
            if range.effective_min() > range.effective_max() {
                problems.push(format!(
                    "range '{}' has min {} greater than max {}",
                    range.label,
                    range.effective_min(),
                    range.effective_max()
                ));
            }
        }
        problems
    }
}
