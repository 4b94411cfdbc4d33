use super::load_settings;
use crate::classification::Classification;
use crate::indices::IndexKind;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Classify `value` on the configured (or built-in) scale for `index`
pub fn classify_value(index: IndexKind, value: f64, config: Option<&Path>) -> Result<Classification> {
    anyhow::ensure!(value.is_finite(), "Index value must be a finite number, got {}", value);
    let settings = load_settings(config)?;
    let scales = settings.classification_scales()?;
    Ok(scales.classify(index, value))
}

pub fn print_classification(index: IndexKind, value: f64, class: &Classification) {
    let label = match class.risk_level {
        0..=2 => class.label.as_str().green(),
        3..=4 => class.label.as_str().yellow(),
        _ => class.label.as_str().red(),
    };
    println!(
        "{} {}: Class {} {} (risk level {})",
        index.as_str().bold(),
        value,
        class.class_numeral,
        label,
        class.risk_level
    );
}
