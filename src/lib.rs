//! Heavy-metal pollution and water quality indices.
//!
//! A [`StandardsRegistry`] holds the reference limits for every parameter.
//! An [`IndexEngine`] resolves station concentrations against it, runs the
//! index calculators and classifies the values, and [`summarize`] reduces a
//! batch of assessments to per-index statistics.

// Export modules for library usage
pub mod aggregate;
pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod indices;
pub mod io;
pub mod sample;
pub mod standards;
pub mod units;

// Re-export commonly used types
pub use crate::aggregate::{summarize, BatchSummary, IndexStatistics};
pub use crate::classification::{
    classify_builtin, ClassRange, Classification, ClassificationScales, RangeClassifier,
};
pub use crate::engine::{
    IndexEngine, IndexOutcome, SampleAssessment, StationDetails, StationResult,
};
pub use crate::errors::{Error, Result};
pub use crate::indices::{
    calculate_cdeg, calculate_hei, calculate_hpi, calculate_mi, calculate_pig, calculate_ratio,
    calculate_wqi, Concentrations, DetailRow, Exclusion, ExclusionReason, IndexDetail, IndexKind,
    IndexResult, MetalSample,
};
pub use crate::io::output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};
pub use crate::sample::{StationMetadata, StationSample};
pub use crate::standards::{default_standards, ParameterCategory, StandardEntry, StandardsRegistry};
pub use crate::units::{convert_to_ppb, Unit};
