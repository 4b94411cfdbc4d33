// Shared fixtures for wqindex integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wqindex::{Concentrations, MetalSample, StandardsRegistry};

/// Three stations in mg/L: one clean, one mine drainage, one without a location
pub const STATIONS_MG_PER_L: &str = "\
S.No,State,District,Location,Longitude,Latitude,Year,As,Pb,Cu,Zn
1,Tamil Nadu,Vellore,Clean Well,79.13,12.91,2023,,,,3
2,Tamil Nadu,Vellore,Mine Drain,79.15,12.93,2023,0.4,0.12,,
3,Tamil Nadu,Vellore,,79.17,12.95,2023,0.02,,1,
";

/// Fe, Zn, Cd, Cu, Pb readings used to check the HPI formula by hand
pub fn hpi_verification_samples() -> Vec<MetalSample> {
    vec![
        MetalSample::with_limits("Fe", 342.33, 1500.0, 300.0),
        MetalSample::with_limits("Zn", 106.53, 15000.0, 5000.0),
        MetalSample::with_limits("Cd", 1.32, 50.0, 3.0),
        MetalSample::with_limits("Cu", 105.39, 1500.0, 50.0),
        MetalSample::with_limits("Pb", 33.52, 50.0, 10.0),
    ]
}

/// Registry matching [`hpi_verification_samples`]
pub fn hpi_verification_registry() -> StandardsRegistry {
    StandardsRegistry::from_entries(
        hpi_verification_samples()
            .into_iter()
            .map(|sample| sample.standard),
    )
}

pub fn concentrations(samples: &[MetalSample]) -> Concentrations {
    samples
        .iter()
        .map(|sample| (sample.symbol.clone(), sample.concentration))
        .collect()
}

/// Write `contents` to `name` inside a fresh temp dir
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
