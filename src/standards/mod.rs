//! Water quality standards registry.
//!
//! A [`StandardsRegistry`] maps parameter symbols to their ideal value,
//! permissible limit and maximum allowable concentration. Lookups are exact
//! and case-sensitive. The registry is built once by the caller and handed
//! to the calculators; nothing here is global.

mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use defaults::default_standards;

/// Parameter family, used to decide which indices consider a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterCategory {
    HeavyMetal,
    Metal,
    Ion,
    Physical,
    Chemical,
}

impl ParameterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterCategory::HeavyMetal => "heavy_metal",
            ParameterCategory::Metal => "metal",
            ParameterCategory::Ion => "ion",
            ParameterCategory::Physical => "physical",
            ParameterCategory::Chemical => "chemical",
        }
    }

    pub fn is_metal(&self) -> bool {
        matches!(self, ParameterCategory::HeavyMetal | ParameterCategory::Metal)
    }
}

impl fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference limits for one parameter, all in ppb (µg/L)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEntry {
    pub symbol: String,
    pub name: String,
    pub category: ParameterCategory,
    /// Ii
    pub ideal_value: f64,
    /// Si
    pub permissible_limit: f64,
    /// MACi
    pub max_allowable_concentration: f64,
}

impl StandardEntry {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        category: ParameterCategory,
        ideal_value: f64,
        permissible_limit: f64,
        max_allowable_concentration: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            category,
            ideal_value,
            permissible_limit,
            max_allowable_concentration,
        }
    }

    pub fn has_valid_mac(&self) -> bool {
        self.max_allowable_concentration > 0.0
    }

    pub fn has_valid_permissible_limit(&self) -> bool {
        self.permissible_limit > 0.0
    }
}

/// Immutable symbol -> standard table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardsRegistry {
    entries: BTreeMap<String, StandardEntry>,
}

impl StandardsRegistry {
    /// Registry with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry loaded with the built-in BIS-derived table
    pub fn builtin() -> Self {
        Self::from_entries(default_standards())
    }

    pub fn from_entries(entries: impl IntoIterator<Item = StandardEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.symbol.clone(), entry))
                .collect(),
        }
    }

    /// Apply caller-supplied standards; they replace defaults with the same symbol
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = StandardEntry>) -> Self {
        for entry in overrides {
            if self.entries.contains_key(&entry.symbol) {
                log::debug!("Custom standard overrides default for {}", entry.symbol);
            }
            self.entries.insert(entry.symbol.clone(), entry);
        }
        self
    }

    pub fn lookup(&self, symbol: &str) -> Option<&StandardEntry> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in symbol order
    pub fn entries(&self) -> impl Iterator<Item = &StandardEntry> {
        self.entries.values()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn by_category(
        &self,
        category: ParameterCategory,
    ) -> impl Iterator<Item = &StandardEntry> + '_ {
        self.entries
            .values()
            .filter(move |entry| entry.category == category)
    }
}
