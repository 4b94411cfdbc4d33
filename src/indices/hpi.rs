//! Heavy-metal Pollution Index.
//!
//! Wi = 1 / Si, Qi = |Mi − Ii| / (Si − Ii) × 100, HPI = Σ(Wi·Qi) / ΣWi.
//!
//! The unit weight and the sub-index both divide by the standard, so a metal
//! with Si ≤ 0 or Si ≤ Ii invalidates the whole calculation.

use super::{
    partition_finite, try_accumulate, Computation, DetailRow, Exclusion, ExclusionReason,
    IndexKind, IndexResult, MetalSample,
};
use crate::errors::{Error, Result};

fn check_standard(sample: &MetalSample) -> Result<(f64, f64)> {
    let si = sample.standard.permissible_limit;
    let ii = sample.standard.ideal_value;
    if si.is_nan() || si <= 0.0 {
        return Err(Error::invalid_standard(
            IndexKind::Hpi,
            &sample.symbol,
            format!("permissible limit Si ({}) must be greater than zero", si),
        ));
    }
    if ii.is_nan() || si <= ii {
        return Err(Error::invalid_standard(
            IndexKind::Hpi,
            &sample.symbol,
            format!("permissible limit Si ({}) must exceed ideal value Ii ({})", si, ii),
        ));
    }
    Ok((si, ii))
}

pub(crate) fn compute(samples: &[MetalSample]) -> Result<Computation> {
    let (usable, mut excluded) = partition_finite(IndexKind::Hpi, samples);
    let mut rows = Vec::with_capacity(usable.len());
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for sample in usable {
        let (si, ii) = check_standard(sample)?;
        let wi = 1.0 / si;
        let qi = (sample.concentration - ii).abs() / (si - ii) * 100.0;

        if !wi.is_finite() || !try_accumulate(&mut weighted_sum, wi * qi) {
            excluded.push(Exclusion::new(
                IndexKind::Hpi,
                &sample.symbol,
                ExclusionReason::NonFiniteContribution,
            ));
            continue;
        }
        weight_sum += wi;
        rows.push(DetailRow {
            symbol: sample.symbol.clone(),
            concentration: sample.concentration,
            ideal_value: Some(ii),
            permissible_limit: Some(si),
            max_allowable_concentration: None,
            weight: Some(wi),
            contribution: qi,
        });
    }

    let hpi = if weight_sum > 0.0 {
        let hpi = weighted_sum / weight_sum;
        log::debug!("HPI calculated: {:.2} (processed {} metals)", hpi, rows.len());
        hpi
    } else {
        log::warn!("No valid metals processed for HPI calculation");
        0.0
    };

    Ok(Computation {
        value: hpi,
        rows,
        excluded,
    })
}

/// HPI over explicit samples, classified on the built-in scale
pub fn calculate_hpi(samples: &[MetalSample]) -> Result<IndexResult> {
    Ok(IndexResult::with_builtin_scale(
        IndexKind::Hpi,
        &compute(samples)?,
    ))
}
