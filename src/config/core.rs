use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classification::{ClassRange, ClassificationScales, RangeClassifier};
use crate::errors::{Error, Result};
use crate::indices::IndexKind;
use crate::io::output::OutputFormat;
use crate::standards::{ParameterCategory, StandardEntry, StandardsRegistry};
use crate::units::Unit;

/// Root configuration structure for wqindex
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WqConfig {
    /// Input handling
    #[serde(default)]
    pub input: InputConfig,

    /// Standards table configuration
    #[serde(default)]
    pub standards: StandardsConfig,

    /// Custom classification ranges keyed by index name (hpi, mi, wqi, ...)
    #[serde(default)]
    pub classification: BTreeMap<String, Vec<ClassRange>>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Parallel processing configuration
    #[serde(default)]
    pub parallel: ParallelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Unit of concentrations in input tables (default: µg/L)
    #[serde(default)]
    pub unit: Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsConfig {
    /// Start from the built-in table (default: true)
    #[serde(default = "default_include_defaults")]
    pub include_defaults: bool,

    /// Site specific standards keyed by symbol
    #[serde(default)]
    pub overrides: BTreeMap<String, StandardOverride>,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            include_defaults: default_include_defaults(),
            overrides: BTreeMap::new(),
        }
    }
}

fn default_include_defaults() -> bool {
    true
}

/// Partial standard; unset fields fall back to the default entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardOverride {
    pub name: Option<String>,
    pub category: Option<ParameterCategory>,
    pub ideal: Option<f64>,
    pub permissible: Option<f64>,
    pub mac: Option<f64>,
}

impl StandardOverride {
    /// Merge onto `base`, or build a new entry when there is no default
    pub fn apply(&self, symbol: &str, base: Option<&StandardEntry>) -> Result<StandardEntry> {
        if let Some(base) = base {
            return Ok(StandardEntry {
                symbol: symbol.to_string(),
                name: self.name.clone().unwrap_or_else(|| base.name.clone()),
                category: self.category.unwrap_or(base.category),
                ideal_value: self.ideal.unwrap_or(base.ideal_value),
                permissible_limit: self.permissible.unwrap_or(base.permissible_limit),
                max_allowable_concentration: self.mac.unwrap_or(base.max_allowable_concentration),
            });
        }

        let permissible = self.permissible.or(self.mac).ok_or_else(|| {
            Error::configuration(format!(
                "standard '{}' is not a built-in parameter and needs a permissible limit or mac",
                symbol
            ))
        })?;
        Ok(StandardEntry {
            symbol: symbol.to_string(),
            name: self.name.clone().unwrap_or_else(|| symbol.to_string()),
            category: self.category.unwrap_or(ParameterCategory::Metal),
            ideal_value: self.ideal.unwrap_or(0.0),
            permissible_limit: permissible,
            max_allowable_concentration: self.mac.unwrap_or(permissible),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Include formula and per-parameter rows (default: false)
    #[serde(default)]
    pub detailed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParallelConfig {
    /// Worker threads, 0 = all cores
    #[serde(default)]
    pub jobs: usize,
}

impl WqConfig {
    /// Registry from defaults (if enabled) plus overrides
    pub fn build_registry(&self) -> Result<StandardsRegistry> {
        let base = if self.standards.include_defaults {
            StandardsRegistry::builtin()
        } else {
            StandardsRegistry::empty()
        };

        let overrides = self
            .standards
            .overrides
            .iter()
            .map(|(symbol, custom)| custom.apply(symbol, base.lookup(symbol)))
            .collect::<Result<Vec<_>>>()?;
        let registry = base.with_overrides(overrides);

        if registry.is_empty() {
            return Err(Error::NoStandards);
        }
        Ok(registry)
    }

    /// Built-in scales with configured replacements
    pub fn classification_scales(&self) -> Result<ClassificationScales> {
        self.classification
            .iter()
            .try_fold(ClassificationScales::new(), |scales, (name, ranges)| {
                let kind: IndexKind = name.parse()?;
                Ok(scales.with_custom(kind, RangeClassifier::new(ranges.clone())))
            })
    }
}
