//! Water Quality Index (weighted arithmetic).
//!
//! k = 1 / Σ(1/Si), Wi = k / Si, qi = (Vi − Ii) / (Si − Ii) × 100,
//! WQI = Σ(Wi·qi) / ΣWi. Parameters with Si ≤ 0 are skipped.

use super::{
    partition_finite, try_accumulate, Computation, DetailRow, Exclusion, ExclusionReason,
    IndexKind, IndexResult, MetalSample,
};

/// Quality rating; falls back to Vi/Si when Si equals Ii
fn quality_rating(vi: f64, si: f64, ii: f64) -> f64 {
    if si != ii {
        (vi - ii) / (si - ii) * 100.0
    } else {
        vi / si * 100.0
    }
}

pub(crate) fn compute(samples: &[MetalSample]) -> Computation {
    let (usable, mut excluded) = partition_finite(IndexKind::Wqi, samples);
    let mut valid = Vec::with_capacity(usable.len());
    for sample in usable {
        let si = sample.standard.permissible_limit;
        if sample.standard.has_valid_permissible_limit() {
            valid.push(sample);
        } else {
            excluded.push(Exclusion::new(
                IndexKind::Wqi,
                &sample.symbol,
                ExclusionReason::InvalidStandard { limit: si },
            ));
        }
    }

    let inverse_sum: f64 = valid
        .iter()
        .map(|sample| 1.0 / sample.standard.permissible_limit)
        .sum();
    if inverse_sum == 0.0 {
        log::warn!("No valid parameters processed for WQI calculation");
        return Computation {
            value: 0.0,
            rows: Vec::new(),
            excluded,
        };
    }
    let k = 1.0 / inverse_sum;

    let mut rows = Vec::with_capacity(valid.len());
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for sample in valid {
        let si = sample.standard.permissible_limit;
        let ii = sample.standard.ideal_value;
        let wi = k / si;
        let qi = quality_rating(sample.concentration, si, ii);

        if !wi.is_finite() || !try_accumulate(&mut weighted_sum, wi * qi) {
            excluded.push(Exclusion::new(
                IndexKind::Wqi,
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

    let wqi = if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    };
    log::debug!(
        "WQI calculated: {:.2} (processed {} parameters)",
        wqi,
        rows.len()
    );

    Computation {
        value: wqi,
        rows,
        excluded,
    }
}

/// WQI over explicit samples, classified on the built-in scale
pub fn calculate_wqi(samples: &[MetalSample]) -> IndexResult {
    IndexResult::with_builtin_scale(IndexKind::Wqi, &compute(samples))
}
