//! Index engine: the composition of a standards registry and classification
//! scales that evaluates concentration mappings.
//!
//! The engine borrows its registry, so one registry built at startup can
//! serve any number of engines and threads.

use crate::classification::ClassificationScales;
use crate::errors::{Error, Result};
use crate::indices::{
    cdeg, hei, hpi, mi, pig, resolve, wqi, Computation, Concentrations, IndexDetail, IndexKind,
    IndexResult, MetalSample,
};
use crate::sample::{StationMetadata, StationSample};
use crate::standards::StandardsRegistry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of one index for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IndexOutcome {
    Computed(IndexResult),
    Failed { index: IndexKind, error: String },
}

impl IndexOutcome {
    pub fn index(&self) -> IndexKind {
        match self {
            IndexOutcome::Computed(result) => result.index,
            IndexOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn result(&self) -> Option<&IndexResult> {
        match self {
            IndexOutcome::Computed(result) => Some(result),
            IndexOutcome::Failed { .. } => None,
        }
    }
}

/// Every index evaluated for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAssessment {
    pub station: String,
    #[serde(default)]
    pub metadata: StationMetadata,
    pub indices: Vec<IndexOutcome>,
}

impl SampleAssessment {
    pub fn get(&self, kind: IndexKind) -> Option<&IndexOutcome> {
        self.indices.iter().find(|outcome| outcome.index() == kind)
    }

    pub fn result(&self, kind: IndexKind) -> Option<&IndexResult> {
        self.get(kind).and_then(IndexOutcome::result)
    }
}

/// Named result of a single-index batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResult {
    pub station: String,
    pub result: IndexResult,
}

/// Detailed breakdowns for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDetails {
    pub station: String,
    pub details: Vec<IndexDetail>,
}

#[derive(Debug, Clone)]
pub struct IndexEngine<'a> {
    registry: &'a StandardsRegistry,
    scales: ClassificationScales,
}

impl<'a> IndexEngine<'a> {
    /// Engine over `registry`; an empty registry is a hard error
    pub fn new(registry: &'a StandardsRegistry) -> Result<Self> {
        if registry.is_empty() {
            return Err(Error::NoStandards);
        }
        Ok(Self {
            registry,
            scales: ClassificationScales::default(),
        })
    }

    pub fn with_scales(mut self, scales: ClassificationScales) -> Self {
        self.scales = scales;
        self
    }

    pub fn registry(&self) -> &StandardsRegistry {
        self.registry
    }

    pub fn scales(&self) -> &ClassificationScales {
        &self.scales
    }

    fn resolved_with(
        &self,
        kind: IndexKind,
        concentrations: &Concentrations,
        calculator: fn(&[MetalSample]) -> Computation,
    ) -> Computation {
        let (samples, excluded) = resolve(self.registry, concentrations, kind);
        calculator(&samples).with_prior_exclusions(excluded)
    }

    fn compute(&self, kind: IndexKind, concentrations: &Concentrations) -> Result<Computation> {
        match kind {
            IndexKind::Mi => Ok(self.resolved_with(kind, concentrations, mi::compute)),
            IndexKind::Wqi => Ok(self.resolved_with(kind, concentrations, wqi::compute)),
            IndexKind::Hei => Ok(self.resolved_with(kind, concentrations, hei::compute)),
            IndexKind::Cdeg => Ok(self.resolved_with(kind, concentrations, cdeg::compute)),
            IndexKind::Hpi => {
                let (samples, excluded) = resolve(self.registry, concentrations, kind);
                Ok(hpi::compute(&samples)?.with_prior_exclusions(excluded))
            }
            IndexKind::Pig => {
                let hpi = self.hpi(concentrations)?;
                let hei = self.hei(concentrations);
                Ok(pig::compute(&hpi, &hei))
            }
        }
    }

    fn classified(&self, kind: IndexKind, computation: &Computation) -> IndexResult {
        IndexResult::from_computation(
            kind,
            computation,
            self.scales.classify(kind, computation.value),
        )
    }

    /// Any index by kind
    pub fn calculate(&self, kind: IndexKind, concentrations: &Concentrations) -> Result<IndexResult> {
        let computation = self.compute(kind, concentrations)?;
        Ok(self.classified(kind, &computation))
    }

    pub fn mi(&self, concentrations: &Concentrations) -> IndexResult {
        let computation = self.resolved_with(IndexKind::Mi, concentrations, mi::compute);
        self.classified(IndexKind::Mi, &computation)
    }

    pub fn hpi(&self, concentrations: &Concentrations) -> Result<IndexResult> {
        self.calculate(IndexKind::Hpi, concentrations)
    }

    pub fn wqi(&self, concentrations: &Concentrations) -> IndexResult {
        let computation = self.resolved_with(IndexKind::Wqi, concentrations, wqi::compute);
        self.classified(IndexKind::Wqi, &computation)
    }

    pub fn hei(&self, concentrations: &Concentrations) -> IndexResult {
        let computation = self.resolved_with(IndexKind::Hei, concentrations, hei::compute);
        self.classified(IndexKind::Hei, &computation)
    }

    pub fn cdeg(&self, concentrations: &Concentrations) -> IndexResult {
        let computation = self.resolved_with(IndexKind::Cdeg, concentrations, cdeg::compute);
        self.classified(IndexKind::Cdeg, &computation)
    }

    pub fn pig(&self, concentrations: &Concentrations) -> Result<IndexResult> {
        self.calculate(IndexKind::Pig, concentrations)
    }

    /// Result together with formula and per-parameter rows
    pub fn detailed(&self, kind: IndexKind, concentrations: &Concentrations) -> Result<IndexDetail> {
        let computation = self.compute(kind, concentrations)?;
        let result = self.classified(kind, &computation);
        Ok(IndexDetail::new(kind, &computation, result))
    }

    /// All indices for one station. A failing index does not affect the others.
    pub fn evaluate(&self, sample: &StationSample) -> SampleAssessment {
        let hpi = self.hpi(&sample.concentrations);
        let hei = self.hei(&sample.concentrations);

        let pig = match &hpi {
            Ok(hpi) => IndexOutcome::Computed(
                self.classified(IndexKind::Pig, &pig::compute(hpi, &hei)),
            ),
            Err(e) => IndexOutcome::Failed {
                index: IndexKind::Pig,
                error: format!("HPI unavailable: {}", e),
            },
        };
        let hpi = match hpi {
            Ok(result) => IndexOutcome::Computed(result),
            Err(e) => {
                log::warn!("{}: {}", sample.station, e);
                IndexOutcome::Failed {
                    index: IndexKind::Hpi,
                    error: e.to_string(),
                }
            }
        };

        SampleAssessment {
            station: sample.station.clone(),
            metadata: sample.metadata.clone(),
            indices: vec![
                hpi,
                IndexOutcome::Computed(self.mi(&sample.concentrations)),
                IndexOutcome::Computed(self.wqi(&sample.concentrations)),
                IndexOutcome::Computed(hei),
                IndexOutcome::Computed(self.cdeg(&sample.concentrations)),
                pig,
            ],
        }
    }

    /// Evaluate stations in parallel; output order follows input order
    pub fn evaluate_batch(&self, samples: &[StationSample]) -> Vec<SampleAssessment> {
        log::info!("Evaluating {} stations", samples.len());
        samples
            .par_iter()
            .map(|sample| self.evaluate(sample))
            .collect()
    }

    /// MI for many stations, one result per station in input order
    pub fn mi_batch(&self, samples: &[StationSample]) -> Vec<StationResult> {
        samples
            .par_iter()
            .map(|sample| StationResult {
                station: sample.station.clone(),
                result: self.mi(&sample.concentrations),
            })
            .collect()
    }

    /// Detailed breakdowns of every index that can be computed, per station
    pub fn detail_batch(&self, samples: &[StationSample]) -> Vec<StationDetails> {
        samples
            .par_iter()
            .map(|sample| StationDetails {
                station: sample.station.clone(),
                details: IndexKind::ALL
                    .iter()
                    .filter_map(|&kind| match self.detailed(kind, &sample.concentrations) {
                        Ok(detail) => Some(detail),
                        Err(e) => {
                            log::debug!("{}: no {} detail ({})", sample.station, kind, e);
                            None
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
