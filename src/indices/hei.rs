//! Heavy-metal Evaluation Index: HEI = Σ(Ci / Si).

use super::{
    partition_finite, try_accumulate, Computation, DetailRow, Exclusion, ExclusionReason,
    IndexKind, IndexResult, MetalSample,
};

pub(crate) fn compute(samples: &[MetalSample]) -> Computation {
    let (usable, mut excluded) = partition_finite(IndexKind::Hei, samples);
    let mut rows = Vec::with_capacity(usable.len());
    let mut hei = 0.0;

    for sample in usable {
        let si = sample.standard.permissible_limit;
        if !sample.standard.has_valid_permissible_limit() {
            excluded.push(Exclusion::new(
                IndexKind::Hei,
                &sample.symbol,
                ExclusionReason::InvalidStandard { limit: si },
            ));
            continue;
        }
        let ratio = sample.concentration / si;
        if !try_accumulate(&mut hei, ratio) {
            excluded.push(Exclusion::new(
                IndexKind::Hei,
                &sample.symbol,
                ExclusionReason::NonFiniteContribution,
            ));
            continue;
        }
        rows.push(DetailRow {
            symbol: sample.symbol.clone(),
            concentration: sample.concentration,
            ideal_value: None,
            permissible_limit: Some(si),
            max_allowable_concentration: None,
            weight: None,
            contribution: ratio,
        });
    }

    log::debug!("HEI calculated: {:.2} (processed {} metals)", hei, rows.len());

    Computation {
        value: hei,
        rows,
        excluded,
    }
}

/// HEI over explicit samples, classified on the built-in scale
pub fn calculate_hei(samples: &[MetalSample]) -> IndexResult {
    IndexResult::with_builtin_scale(IndexKind::Hei, &compute(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hei_sums_against_permissible_limit() {
        let result = calculate_hei(&[
            MetalSample::with_limits("Pb", 100.0, 50.0, 10.0),
            MetalSample::with_limits("Cd", 25.0, 5.0, 3.0),
        ]);
        assert!((result.value - 7.0).abs() < 1e-12);
        assert_eq!(result.classification.label, "Low contamination");
    }

    #[test]
    fn test_hei_high_contamination() {
        let result = calculate_hei(&[MetalSample::with_limits("Hg", 21.0, 1.0, 0.0)]);
        assert_eq!(result.classification.label, "High contamination");
        assert_eq!(result.classification.risk_level, 3);
    }

    #[test]
    fn test_hei_running_total_stays_finite() {
        let result = calculate_hei(&[
            MetalSample::with_limits("Fe", 1.5e308, 1.0, 0.0),
            MetalSample::with_limits("Mn", 1.5e308, 1.0, 0.0),
        ]);
        assert!(result.value.is_finite());
        assert_eq!(result.metal_count, 1);
        assert_eq!(result.excluded.len(), 1);
        assert_eq!(
            result.excluded[0].reason,
            ExclusionReason::NonFiniteContribution
        );
    }

    #[test]
    fn test_hei_skips_zero_si() {
        let result = calculate_hei(&[
            MetalSample::with_limits("Pb", 100.0, 0.0, 0.0),
            MetalSample::with_limits("Cd", 10.0, 5.0, 3.0),
        ]);
        assert_eq!(result.metal_count, 1);
        assert!((result.value - 2.0).abs() < 1e-12);
    }
}
