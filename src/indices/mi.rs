//! Metal Index: MI = Σ(Ci / MACi).
//!
//! Metals whose MAC is not positive are skipped with a warning; the index is
//! summed over whatever remains.

use super::{
    partition_finite, try_accumulate, Computation, DetailRow, Exclusion, ExclusionReason,
    IndexKind, IndexResult, MetalSample,
};
use crate::errors::{Error, Result};

/// Ci / MACi
pub fn calculate_ratio(concentration: f64, mac: f64) -> Result<f64> {
    if mac <= 0.0 || mac.is_nan() {
        return Err(Error::InvalidRatio { mac });
    }
    Ok(concentration / mac)
}

pub(crate) fn compute(samples: &[MetalSample]) -> Computation {
    let (usable, mut excluded) = partition_finite(IndexKind::Mi, samples);
    let mut rows = Vec::with_capacity(usable.len());
    let mut mi = 0.0;

    for sample in usable {
        let mac = sample.standard.max_allowable_concentration;
        match calculate_ratio(sample.concentration, mac) {
            Ok(ratio) if !try_accumulate(&mut mi, ratio) => excluded.push(Exclusion::new(
                IndexKind::Mi,
                &sample.symbol,
                ExclusionReason::NonFiniteContribution,
            )),
            Ok(ratio) => {
                rows.push(DetailRow {
                    symbol: sample.symbol.clone(),
                    concentration: sample.concentration,
                    ideal_value: None,
                    permissible_limit: None,
                    max_allowable_concentration: Some(mac),
                    weight: None,
                    contribution: ratio,
                });
            }
            Err(_) => excluded.push(Exclusion::new(
                IndexKind::Mi,
                &sample.symbol,
                ExclusionReason::InvalidStandard { limit: mac },
            )),
        }
    }

    if rows.is_empty() {
        log::warn!("No valid metals processed for MI calculation");
    } else {
        log::debug!("MI calculated: {:.4} (processed {} metals)", mi, rows.len());
    }

    Computation {
        value: mi,
        rows,
        excluded,
    }
}

/// MI over explicit samples, classified on the built-in six-class scale
pub fn calculate_mi(samples: &[MetalSample]) -> IndexResult {
    IndexResult::with_builtin_scale(IndexKind::Mi, &compute(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ratio() {
        assert_eq!(calculate_ratio(20.0, 50.0).unwrap(), 0.4);
        assert!(matches!(
            calculate_ratio(5.0, 0.0),
            Err(Error::InvalidRatio { mac }) if mac == 0.0
        ));
        assert!(calculate_ratio(5.0, -1.0).is_err());
    }

    #[test]
    fn test_mi_sums_ratios() {
        let result = calculate_mi(&[
            MetalSample::with_mac("As", 20.0, 50.0),
            MetalSample::with_mac("Cu", 1000.0, 1500.0),
        ]);
        assert!((result.value - 1.0666666).abs() < 1e-6);
        assert_eq!(result.metal_count, 2);
        assert!((result.breakdown["As"] - 0.4).abs() < 1e-12);
        assert!((result.breakdown["Cu"] - 0.6666667).abs() < 1e-6);
        assert_eq!(result.concentrations["Cu"], 1000.0);
        assert_eq!(result.classification.label, "Slightly Affected");
        assert_eq!(result.classification.class_numeral, "III");
        assert_eq!(result.classification.risk_level, 3);
    }

    #[test]
    fn test_mi_skips_invalid_mac() {
        let result = calculate_mi(&[
            MetalSample::with_mac("Pb", 5.0, 0.0),
            MetalSample::with_mac("Zn", 3000.0, 15000.0),
        ]);
        assert!((result.value - 0.2).abs() < 1e-12);
        assert_eq!(result.metal_count, 1);
        assert!(!result.breakdown.contains_key("Pb"));
        assert_eq!(result.excluded.len(), 1);
        assert_eq!(
            result.excluded[0].reason,
            ExclusionReason::InvalidStandard { limit: 0.0 }
        );
        assert_eq!(result.classification.label, "Very Pure");
    }

    #[test]
    fn test_mi_excludes_overflowing_ratio() {
        let result = calculate_mi(&[
            MetalSample::with_mac("As", 1e308, 1e-3),
            MetalSample::with_mac("Zn", 3000.0, 15000.0),
        ]);
        assert!(result.value.is_finite());
        assert!((result.value - 0.2).abs() < 1e-12);
        assert_eq!(result.metal_count, 1);
        assert_eq!(result.excluded[0].symbol, "As");
        assert_eq!(
            result.excluded[0].reason,
            ExclusionReason::NonFiniteContribution
        );

        let json = serde_json::to_string(&result).unwrap();
        let restored: IndexResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn test_mi_empty_input_is_vacuous() {
        let result = calculate_mi(&[]);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.metal_count, 0);
        assert!(result.is_vacuous());
        assert_eq!(result.classification.label, "Very Pure");
    }

    #[test]
    fn test_mi_is_idempotent() {
        let samples = vec![
            MetalSample::with_mac("As", 20.0, 50.0),
            MetalSample::with_mac("Cu", 1000.0, 1500.0),
        ];
        let first = calculate_mi(&samples);
        let second = calculate_mi(&samples);
        assert_eq!(first, second);
        assert_eq!(first.value.to_bits(), second.value.to_bits());
    }
}
