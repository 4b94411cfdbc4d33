//! Degree of Contamination: Cdeg = Σ Cfi, Cfi = Ci / Si − 1.

use super::{
    partition_finite, try_accumulate, Computation, DetailRow, Exclusion, ExclusionReason,
    IndexKind, IndexResult, MetalSample,
};

pub(crate) fn compute(samples: &[MetalSample]) -> Computation {
    let (usable, mut excluded) = partition_finite(IndexKind::Cdeg, samples);
    let mut rows = Vec::with_capacity(usable.len());
    let mut cdeg = 0.0;

    for sample in usable {
        let si = sample.standard.permissible_limit;
        if !sample.standard.has_valid_permissible_limit() {
            excluded.push(Exclusion::new(
                IndexKind::Cdeg,
                &sample.symbol,
                ExclusionReason::InvalidStandard { limit: si },
            ));
            continue;
        }
        let factor = sample.concentration / si - 1.0;
        if !try_accumulate(&mut cdeg, factor) {
            excluded.push(Exclusion::new(
                IndexKind::Cdeg,
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
            contribution: factor,
        });
    }

    log::debug!("Cdeg calculated: {:.2} (processed {} metals)", cdeg, rows.len());

    Computation {
        value: cdeg,
        rows,
        excluded,
    }
}

/// Cdeg over explicit samples, classified on the built-in scale
pub fn calculate_cdeg(samples: &[MetalSample]) -> IndexResult {
    IndexResult::with_builtin_scale(IndexKind::Cdeg, &compute(samples))
}
