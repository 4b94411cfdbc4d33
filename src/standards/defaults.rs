use super::{ParameterCategory, StandardEntry};

use ParameterCategory::{Chemical, HeavyMetal, Ion, Metal, Physical};

// (symbol, name, category, Ii, Si, MACi), ppb
const DEFAULT_TABLE: &[(&str, &str, ParameterCategory, f64, f64, f64)] = &[
    ("As", "Arsenic", HeavyMetal, 10.0, 50.0, 50.0),
    ("Cd", "Cadmium", HeavyMetal, 3.0, 50.0, 50.0),
    ("Cr", "Chromium", HeavyMetal, 0.0, 50.0, 50.0),
    ("Cu", "Copper", HeavyMetal, 50.0, 1500.0, 1500.0),
    ("Fe", "Iron", HeavyMetal, 300.0, 1500.0, 1500.0),
    ("Hg", "Mercury", HeavyMetal, 0.0, 1.0, 1.0),
    ("Mn", "Manganese", HeavyMetal, 100.0, 300.0, 300.0),
    ("Ni", "Nickel", HeavyMetal, 0.0, 20.0, 20.0),
    ("Pb", "Lead", HeavyMetal, 10.0, 50.0, 50.0),
    ("Zn", "Zinc", HeavyMetal, 5000.0, 15000.0, 15000.0),
    ("Al", "Aluminium", Metal, 30.0, 200.0, 200.0),
    ("Ba", "Barium", Metal, 0.0, 700.0, 700.0),
    ("Ca", "Calcium", Metal, 75000.0, 200000.0, 200000.0),
    ("Mg", "Magnesium", Metal, 30000.0, 100000.0, 100000.0),
    ("Se", "Selenium", Metal, 0.0, 10.0, 10.0),
    ("Cl", "Chloride", Ion, 0.0, 250000.0, 1000000.0),
    ("F", "Fluoride", Ion, 0.0, 1000.0, 1500.0),
    ("NO3", "Nitrate", Ion, 0.0, 45000.0, 45000.0),
    ("SO4", "Sulphate", Ion, 0.0, 200000.0, 400000.0),
    ("TDS", "Total Dissolved Solids", Physical, 0.0, 500000.0, 2000000.0),
    ("TH", "Total Hardness", Chemical, 0.0, 200000.0, 600000.0),
];

/// Built-in drinking water standards (BIS 10500 derived)
pub fn default_standards() -> Vec<StandardEntry> {
    DEFAULT_TABLE
        .iter()
        .map(|&(symbol, name, category, ideal, permissible, mac)| {
            StandardEntry::new(symbol, name, category, ideal, permissible, mac)
        })
        .collect()
}
