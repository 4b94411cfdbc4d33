//! Pollution index calculators.
//!
//! Each calculator takes resolved [`MetalSample`]s and produces an
//! [`IndexResult`]. Calculators are pure: identical inputs give identical
//! results, and nothing is shared between calls.
//!
//! | Index | Formula | Bad standard |
//! |-------|---------|--------------|
//! | MI    | Σ Ci/MACi | skipped |
//! | HPI   | Σ(Wi·Qi)/ΣWi, Wi = 1/Si, Qi = \|Mi−Ii\|/(Si−Ii)·100 | error |
//! | WQI   | Σ(Wi·qi)/ΣWi, Wi = k/Si | skipped |
//! | HEI   | Σ Ci/Si | skipped |
//! | Cdeg  | Σ (Ci/Si − 1) | skipped |
//! | PIG   | √((HPI/100)² + HEI²)/√2 | from HPI |

pub mod cdeg;
pub mod hei;
pub mod hpi;
pub mod mi;
pub mod pig;
pub mod wqi;

use crate::classification::{classify_builtin, Classification};
use crate::errors::Error;
use crate::standards::{ParameterCategory, StandardEntry, StandardsRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use cdeg::calculate_cdeg;
pub use hei::calculate_hei;
pub use hpi::calculate_hpi;
pub use mi::{calculate_mi, calculate_ratio};
pub use pig::{calculate_pig, pig_result};
pub use wqi::calculate_wqi;

/// Measured concentrations keyed by parameter symbol, in ppb
pub type Concentrations = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Hpi,
    Mi,
    Wqi,
    Hei,
    Cdeg,
    Pig,
}

impl IndexKind {
    pub const ALL: [IndexKind; 6] = [
        IndexKind::Hpi,
        IndexKind::Mi,
        IndexKind::Wqi,
        IndexKind::Hei,
        IndexKind::Cdeg,
        IndexKind::Pig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "HPI",
            IndexKind::Mi => "MI",
            IndexKind::Wqi => "WQI",
            IndexKind::Hei => "HEI",
            IndexKind::Cdeg => "Cdeg",
            IndexKind::Pig => "PIG",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "Heavy-metal Pollution Index",
            IndexKind::Mi => "Metal Index",
            IndexKind::Wqi => "Water Quality Index",
            IndexKind::Hei => "Heavy-metal Evaluation Index",
            IndexKind::Cdeg => "Degree of Contamination",
            IndexKind::Pig => "Pollution Index of Groundwater",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "HPI = Σ(Wi × Qi) / ΣWi; Wi = 1/Si; Qi = |Mi − Ii| / (Si − Ii) × 100",
            IndexKind::Mi => "MI = Σ(Ci / MACi)",
            IndexKind::Wqi => {
                "WQI = Σ(Wi × qi) / ΣWi; Wi = k/Si; k = 1/Σ(1/Si); qi = (Vi − Ii) / (Si − Ii) × 100"
            }
            IndexKind::Hei => "HEI = Σ(Ci / Si)",
            IndexKind::Cdeg => "Cdeg = Σ(Ci / Si − 1)",
            IndexKind::Pig => "PIG = √((HPI/100)² + HEI²) / √2",
        }
    }

    /// Whether a parameter of `category` takes part in this index
    pub fn accepts(&self, category: ParameterCategory) -> bool {
        match self {
            IndexKind::Hpi | IndexKind::Hei | IndexKind::Cdeg | IndexKind::Pig => {
                category == ParameterCategory::HeavyMetal
            }
            IndexKind::Mi => category.is_metal(),
            IndexKind::Wqi => true,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hpi" => Ok(IndexKind::Hpi),
            "mi" => Ok(IndexKind::Mi),
            "wqi" => Ok(IndexKind::Wqi),
            "hei" => Ok(IndexKind::Hei),
            "cdeg" => Ok(IndexKind::Cdeg),
            "pig" => Ok(IndexKind::Pig),
            _ => Err(Error::UnknownIndex(s.to_string())),
        }
    }
}

/// One measured parameter paired with the standard it is judged against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalSample {
    pub symbol: String,
    /// Ci, ppb
    pub concentration: f64,
    pub standard: StandardEntry,
}

impl MetalSample {
    pub fn new(standard: StandardEntry, concentration: f64) -> Self {
        Self {
            symbol: standard.symbol.clone(),
            concentration,
            standard,
        }
    }

    /// Sample carrying only a MAC, as used by MI
    pub fn with_mac(symbol: impl Into<String>, concentration: f64, mac: f64) -> Self {
        let symbol = symbol.into();
        let standard = StandardEntry::new(
            symbol.clone(),
            symbol.clone(),
            ParameterCategory::HeavyMetal,
            0.0,
            mac,
            mac,
        );
        Self {
            symbol,
            concentration,
            standard,
        }
    }

    /// Sample carrying Si and Ii, as used by HPI and WQI
    pub fn with_limits(
        symbol: impl Into<String>,
        concentration: f64,
        permissible_limit: f64,
        ideal_value: f64,
    ) -> Self {
        let symbol = symbol.into();
        let standard = StandardEntry::new(
            symbol.clone(),
            symbol.clone(),
            ParameterCategory::HeavyMetal,
            ideal_value,
            permissible_limit,
            permissible_limit,
        );
        Self {
            symbol,
            concentration,
            standard,
        }
    }
}

/// Why a parameter did not contribute to an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    UnknownSymbol,
    InvalidStandard { limit: f64 },
    InvalidConcentration,
    /// Term or running total would overflow to a non-finite value
    NonFiniteContribution,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::UnknownSymbol => f.write_str("no standard found"),
            ExclusionReason::InvalidStandard { limit } => {
                write!(f, "standard limit {} is not positive", limit)
            }
            ExclusionReason::InvalidConcentration => f.write_str("concentration is not finite"),
            ExclusionReason::NonFiniteContribution => {
                f.write_str("contribution overflows to a non-finite value")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub symbol: String,
    pub reason: ExclusionReason,
}

impl Exclusion {
    pub(crate) fn new(index: IndexKind, symbol: &str, reason: ExclusionReason) -> Self {
        log::warn!("{}: skipping {} ({})", index, symbol, reason);
        Self {
            symbol: symbol.to_string(),
            reason,
        }
    }
}

/// Per-parameter line of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub symbol: String,
    pub concentration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissible_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowable_concentration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Ratio, sub-index or contamination factor, depending on the index
    pub contribution: f64,
}

/// Raw outcome of a calculator before classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Computation {
    pub value: f64,
    pub rows: Vec<DetailRow>,
    pub excluded: Vec<Exclusion>,
}

impl Computation {
    pub(crate) fn with_prior_exclusions(mut self, mut prior: Vec<Exclusion>) -> Self {
        prior.append(&mut self.excluded);
        self.excluded = prior;
        self
    }
}

/// Classified index value with its per-parameter breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResult {
    pub index: IndexKind,
    pub value: f64,
    pub classification: Classification,
    /// symbol -> ratio / sub-index
    pub breakdown: BTreeMap<String, f64>,
    /// symbol -> Ci snapshot
    pub concentrations: BTreeMap<String, f64>,
    /// Parameters that actually contributed
    pub metal_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<Exclusion>,
}

impl IndexResult {
    pub(crate) fn from_computation(
        index: IndexKind,
        computation: &Computation,
        classification: Classification,
    ) -> Self {
        Self {
            index,
            value: computation.value,
            classification,
            breakdown: computation
                .rows
                .iter()
                .map(|row| (row.symbol.clone(), row.contribution))
                .collect(),
            concentrations: computation
                .rows
                .iter()
                .map(|row| (row.symbol.clone(), row.concentration))
                .collect(),
            metal_count: computation.rows.len(),
            excluded: computation.excluded.clone(),
        }
    }

    pub(crate) fn with_builtin_scale(index: IndexKind, computation: &Computation) -> Self {
        Self::from_computation(index, computation, classify_builtin(index, computation.value))
    }

    /// True when no parameter contributed, so the value carries no measurement
    pub fn is_vacuous(&self) -> bool {
        self.metal_count == 0
    }
}

/// Result plus the formula and rows behind it, for report generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDetail {
    pub index: IndexKind,
    pub name: String,
    pub formula: String,
    pub rows: Vec<DetailRow>,
    pub result: IndexResult,
}

impl IndexDetail {
    pub(crate) fn new(index: IndexKind, computation: &Computation, result: IndexResult) -> Self {
        Self {
            index,
            name: index.full_name().to_string(),
            formula: index.formula().to_string(),
            rows: computation.rows.clone(),
            result,
        }
    }
}

/// Pair concentrations with standards for `index`.
///
/// Unknown symbols and non-finite values become exclusions. Known parameters
/// of a category the index does not use are left out silently.
pub(crate) fn resolve(
    registry: &StandardsRegistry,
    concentrations: &Concentrations,
    index: IndexKind,
) -> (Vec<MetalSample>, Vec<Exclusion>) {
    let mut samples = Vec::new();
    let mut excluded = Vec::new();

    for (symbol, &value) in concentrations {
        let Some(standard) = registry.lookup(symbol) else {
            excluded.push(Exclusion::new(index, symbol, ExclusionReason::UnknownSymbol));
            continue;
        };
        if !index.accepts(standard.category) {
            continue;
        }
        if !value.is_finite() {
            excluded.push(Exclusion::new(
                index,
                symbol,
                ExclusionReason::InvalidConcentration,
            ));
            continue;
        }
        samples.push(MetalSample::new(standard.clone(), value));
    }

    (samples, excluded)
}

/// Add `term` to `total` only if both stay finite
pub(crate) fn try_accumulate(total: &mut f64, term: f64) -> bool {
    let next = *total + term;
    if term.is_finite() && next.is_finite() {
        *total = next;
        true
    } else {
        false
    }
}

/// Split off samples whose concentration is not a finite number
pub(crate) fn partition_finite(
    index: IndexKind,
    samples: &[MetalSample],
) -> (Vec<&MetalSample>, Vec<Exclusion>) {
    let mut usable = Vec::with_capacity(samples.len());
    let mut excluded = Vec::new();
    for sample in samples {
        if sample.concentration.is_finite() {
            usable.push(sample);
        } else {
            excluded.push(Exclusion::new(
                index,
                &sample.symbol,
                ExclusionReason::InvalidConcentration,
            ));
        }
    }
    (usable, excluded)
}
