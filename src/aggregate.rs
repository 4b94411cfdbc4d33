//! Batch statistics over station assessments.

use crate::engine::{IndexOutcome, SampleAssessment};
use crate::indices::IndexKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution of one index across a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatistics {
    pub index: IndexKind,
    /// Results with at least one contributing parameter
    pub count: usize,
    /// Results computed over zero parameters
    pub vacuous_count: usize,
    pub failed_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// label -> number of stations
    pub distribution: BTreeMap<String, usize>,
    pub worst_station: Option<String>,
}

impl IndexStatistics {
    fn empty(index: IndexKind) -> Self {
        Self {
            index,
            count: 0,
            vacuous_count: 0,
            failed_count: 0,
            min: None,
            max: None,
            mean: None,
            distribution: BTreeMap::new(),
            worst_station: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub station_count: usize,
    pub indices: Vec<IndexStatistics>,
}

impl BatchSummary {
    pub fn get(&self, kind: IndexKind) -> Option<&IndexStatistics> {
        self.indices.iter().find(|stats| stats.index == kind)
    }
}

fn index_statistics(kind: IndexKind, assessments: &[SampleAssessment]) -> IndexStatistics {
    let mut stats = IndexStatistics::empty(kind);
    let mut sum = 0.0;
    let mut worst: Option<(f64, &str)> = None;

    for assessment in assessments {
        let result = match assessment.get(kind) {
            Some(IndexOutcome::Computed(result)) => result,
            Some(IndexOutcome::Failed { .. }) => {
                stats.failed_count += 1;
                continue;
            }
            None => continue,
        };
        if result.is_vacuous() {
            stats.vacuous_count += 1;
            continue;
        }

        let value = result.value;
        stats.count += 1;
        sum += value;
        stats.min = Some(stats.min.map_or(value, |m| m.min(value)));
        stats.max = Some(stats.max.map_or(value, |m| m.max(value)));
        *stats
            .distribution
            .entry(result.classification.label.clone())
            .or_insert(0) += 1;
        // First station wins ties.
        if worst.is_none_or(|(w, _)| value > w) {
            worst = Some((value, assessment.station.as_str()));
        }
    }

    if stats.count > 0 {
        stats.mean = Some(sum / stats.count as f64);
    }
    stats.worst_station = worst.map(|(_, station)| station.to_string());
    stats
}

/// Per-index statistics across all assessments
pub fn summarize(assessments: &[SampleAssessment]) -> BatchSummary {
    BatchSummary {
        station_count: assessments.len(),
        indices: IndexKind::ALL
            .iter()
            .map(|&kind| index_statistics(kind, assessments))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::IndexEngine;
    use crate::sample::StationSample;
    use crate::standards::StandardsRegistry;

    fn assessments() -> Vec<SampleAssessment> {
        let registry = StandardsRegistry::builtin();
        let engine = IndexEngine::new(&registry).unwrap();
        let samples = vec![
            StationSample::new("Clean").with_concentration("Zn", 3000.0),
            StationSample::new("Dirty")
                .with_concentration("As", 400.0)
                .with_concentration("Pb", 120.0),
            StationSample::new("Empty"),
        ];
        engine.evaluate_batch(&samples)
    }

    #[test]
    fn test_summary_counts_and_extremes() {
        let summary = summarize(&assessments());
        assert_eq!(summary.station_count, 3);

        let mi = summary.get(IndexKind::Mi).unwrap();
        assert_eq!(mi.count, 2);
        assert_eq!(mi.vacuous_count, 1);
        assert!((mi.min.unwrap() - 0.2).abs() < 1e-12);
        assert!((mi.max.unwrap() - 10.4).abs() < 1e-9);
        assert!((mi.mean.unwrap() - 5.3).abs() < 1e-9);
        assert_eq!(mi.worst_station.as_deref(), Some("Dirty"));
        assert_eq!(mi.distribution["Very Pure"], 1);
        assert_eq!(mi.distribution["Seriously Affected"], 1);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = summarize(&[]);
        assert_eq!(summary.station_count, 0);
        for stats in &summary.indices {
            assert_eq!(stats.count, 0);
            assert!(stats.mean.is_none());
            assert!(stats.worst_station.is_none());
        }
    }
}
