use crate::aggregate::{summarize, BatchSummary};
use crate::engine::{SampleAssessment, StationDetails};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::standards::StandardsRegistry;
use crate::units::Unit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Everything a `calculate` run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    /// Unit the input table was read in
    pub unit: Unit,
    pub assessments: Vec<SampleAssessment>,
    pub summary: BatchSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<StationDetails>,
}

impl AssessmentReport {
    pub fn new(unit: Unit, assessments: Vec<SampleAssessment>) -> Self {
        let summary = summarize(&assessments);
        Self {
            generated_at: Utc::now(),
            unit,
            assessments,
            summary,
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<StationDetails>) -> Self {
        self.details = details;
        self
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
    fn write_standards(&mut self, registry: &StandardsRegistry) -> anyhow::Result<()>;
}

/// Writer for `format` over `out`
pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    out: W,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

/// Value cell shared by the text writers
pub(crate) fn format_value(result: &crate::indices::IndexResult) -> String {
    if result.is_vacuous() {
        "n/a".to_string()
    } else {
        format!("{:.2}", result.value)
    }
}

pub(crate) fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
