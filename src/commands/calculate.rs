use super::{load_settings, with_writer};
use crate::cli::{configure_thread_pool, get_worker_count};
use crate::engine::IndexEngine;
use crate::io::input::read_samples_from_path;
use crate::io::output::{AssessmentReport, OutputFormat};
use crate::units::Unit;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CalculateConfig {
    pub input: PathBuf,
    pub unit: Option<Unit>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub detailed: bool,
}

/// Evaluate every station in the input table and write the report
pub fn calculate(config: CalculateConfig) -> Result<()> {
    let settings = load_settings(config.config.as_deref())?;

    let jobs = config.jobs.unwrap_or(settings.parallel.jobs);
    configure_thread_pool(jobs);
    log::debug!("Using {} worker threads", get_worker_count(jobs));

    let registry = settings
        .build_registry()
        .context("Failed to build standards registry")?;
    let engine = IndexEngine::new(&registry)?.with_scales(settings.classification_scales()?);

    let unit = config.unit.unwrap_or(settings.input.unit);
    let samples = read_samples_from_path(&config.input, unit)
        .with_context(|| format!("Failed to read samples from {}", config.input.display()))?;

    let mut report = AssessmentReport::new(unit, engine.evaluate_batch(&samples));
    if config.detailed || settings.output.detailed {
        report = report.with_details(engine.detail_batch(&samples));
    }

    let format = config.format.unwrap_or(settings.output.default_format);
    with_writer(format, config.output.as_deref(), |writer| {
        writer.write_report(&report)
    })
}
