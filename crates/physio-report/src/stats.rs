use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use physio_core::models::result::AssessmentResult;

/// Progress statistics for one assessment item across a patient's history.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ItemStats {
    pub first: f64,
    pub latest: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// `(latest - first) / first * 100`. `None` when the first reading is
    /// zero — reported as "N/A", never infinity.
    pub percent_change: Option<f64>,
}

/// Per-item statistics over a patient's numeric results, keyed by
/// assessment slug. First/latest follow measurement date, then record
/// creation time for same-day entries.
pub fn summarize(results: &[AssessmentResult]) -> BTreeMap<String, ItemStats> {
    let mut ordered: Vec<&AssessmentResult> = results.iter().collect();
    ordered.sort_by_key(|r| (r.date, r.created_at));

    let mut series: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for result in ordered {
        if let Some(reading) = result.value.numeric() {
            series
                .entry(result.assessment_id.clone())
                .or_default()
                .push(reading);
        }
    }

    series
        .into_iter()
        .map(|(id, values)| {
            let first = values[0];
            let latest = *values.last().unwrap_or(&first);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let percent_change = if first == 0.0 {
                None
            } else {
                Some((latest - first) / first * 100.0)
            };
            (
                id,
                ItemStats {
                    first,
                    latest,
                    min,
                    max,
                    mean,
                    percent_change,
                },
            )
        })
        .collect()
}
