//! Pollution Index of Groundwater, a composite of HPI and HEI:
//! PIG = √((HPI/100)² + HEI²) / √2.

use super::{Computation, DetailRow, IndexKind, IndexResult};

pub fn calculate_pig(hpi: f64, hei: f64) -> f64 {
    // Scale before hypot so finite inputs cannot overflow.
    let scale = std::f64::consts::SQRT_2;
    let pig = (hpi / 100.0 / scale).hypot(hei / scale);
    log::debug!("PIG calculated: {:.4} (HPI={:.2}, HEI={:.2})", pig, hpi, hei);
    pig
}

pub(crate) fn compute(hpi: &IndexResult, hei: &IndexResult) -> Computation {
    let component = |symbol: &str, value: f64, contribution: f64| DetailRow {
        symbol: symbol.to_string(),
        concentration: value,
        ideal_value: None,
        permissible_limit: None,
        max_allowable_concentration: None,
        weight: None,
        contribution,
    };

    let rows = if hpi.is_vacuous() && hei.is_vacuous() {
        Vec::new()
    } else {
        vec![
            component("HEI", hei.value, hei.value),
            component("HPI", hpi.value, hpi.value / 100.0),
        ]
    };

    Computation {
        value: calculate_pig(hpi.value, hei.value),
        rows,
        excluded: Vec::new(),
    }
}

/// PIG from already computed HPI and HEI results, on the built-in scale
pub fn pig_result(hpi: &IndexResult, hei: &IndexResult) -> IndexResult {
    IndexResult::with_builtin_scale(IndexKind::Pig, &compute(hpi, hei))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::{calculate_hei, calculate_hpi, MetalSample};

    #[test]
    fn test_pig_formula() {
        let pig = calculate_pig(100.0, 1.0);
        assert!((pig - 1.0).abs() < 1e-12);
        assert_eq!(calculate_pig(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_pig_of_large_components_is_finite() {
        assert!(calculate_pig(1e308, 1e308).is_finite());
    }

    #[test]
    fn test_pig_result_from_components() {
        let samples = vec![
            MetalSample::with_limits("Pb", 33.52, 50.0, 10.0),
            MetalSample::with_limits("Cd", 1.32, 50.0, 3.0),
        ];
        let hpi = calculate_hpi(&samples).unwrap();
        let hei = calculate_hei(&samples);
        let pig = pig_result(&hpi, &hei);
        let expected = ((hpi.value / 100.0).powi(2) + hei.value.powi(2)).sqrt() / 2f64.sqrt();
        assert!((pig.value - expected).abs() < 1e-12);
        assert_eq!(pig.metal_count, 2);
        assert!((pig.breakdown["HPI"] - hpi.value / 100.0).abs() < 1e-12);
        assert_eq!(pig.classification.label, "Low pollution");
    }

    #[test]
    fn test_pig_of_vacuous_components_is_vacuous() {
        let hpi = calculate_hpi(&[]).unwrap();
        let hei = calculate_hei(&[]);
        assert!(pig_result(&hpi, &hei).is_vacuous());
    }
}
