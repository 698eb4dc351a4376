use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use physio_core::models::result::AssessmentResult;

/// One chart point: a calendar date and the numeric reading per assessment
/// item on that date.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TimelinePoint {
    pub date: jiff::civil::Date,
    pub values: BTreeMap<String, f64>,
}

/// Group results into chartable points, ascending by calendar date.
///
/// Multiple readings of the same item on the same date are averaged into a
/// single value. Binary and free-text results carry no numeric reading and
/// are excluded.
pub fn timeline(results: &[AssessmentResult]) -> Vec<TimelinePoint> {
    let mut by_date: BTreeMap<jiff::civil::Date, BTreeMap<String, (f64, u32)>> = BTreeMap::new();

    for result in results {
        let Some(reading) = result.value.numeric() else {
            continue;
        };
        let entry = by_date
            .entry(result.date)
            .or_default()
            .entry(result.assessment_id.clone())
            .or_insert((0.0, 0));
        entry.0 += reading;
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, sums)| TimelinePoint {
            date,
            values: sums
                .into_iter()
                .map(|(id, (sum, count))| (id, sum / f64::from(count)))
                .collect(),
        })
        .collect()
}
