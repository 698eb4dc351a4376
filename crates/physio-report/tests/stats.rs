use jiff::civil::date;
use uuid::Uuid;

use physio_core::models::result::AssessmentResult;
use physio_core::models::value::{AssessmentValue, RangeFlag};
use physio_report::stats::summarize;

fn reading(assessment_id: &str, day: jiff::civil::Date, value: f64) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        assessment_id: assessment_id.to_string(),
        patient_id: Uuid::new_v4(),
        session_id: Uuid::new_v4(),
        evaluator_sub: "clinician-1".to_string(),
        value: AssessmentValue::Range(value),
        range_flag: RangeFlag::NotApplicable,
        notes: None,
        date: day,
        created_at: jiff::Timestamp::now(),
    }
}

#[test]
fn first_and_latest_follow_measurement_date() {
    // Deliberately unordered input.
    let results = [
        reading("shoulder-flexion", date(2024, 2, 1), 120.0),
        reading("shoulder-flexion", date(2024, 1, 10), 72.0),
        reading("shoulder-flexion", date(2024, 1, 20), 95.0),
    ];
    let stats = summarize(&results);
    let item = &stats["shoulder-flexion"];
    assert_eq!(item.first, 72.0);
    assert_eq!(item.latest, 120.0);
    assert_eq!(item.min, 72.0);
    assert_eq!(item.max, 120.0);
    assert!((item.mean - 95.666).abs() < 0.001);
}

#[test]
fn percent_change_from_first_to_latest() {
    let results = [
        reading("shoulder-flexion", date(2024, 1, 10), 80.0),
        reading("shoulder-flexion", date(2024, 2, 10), 120.0),
    ];
    let stats = summarize(&results);
    assert_eq!(stats["shoulder-flexion"].percent_change, Some(50.0));
}

#[test]
fn percent_change_is_none_when_first_is_zero() {
    let results = [
        reading("single-leg-stance", date(2024, 1, 10), 0.0),
        reading("single-leg-stance", date(2024, 2, 10), 12.0),
    ];
    let stats = summarize(&results);
    assert_eq!(stats["single-leg-stance"].percent_change, None);
}

#[test]
fn items_are_summarized_independently() {
    let results = [
        reading("shoulder-flexion", date(2024, 1, 10), 72.0),
        reading("lumbar-flexion", date(2024, 1, 10), 30.0),
    ];
    let stats = summarize(&results);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats["shoulder-flexion"].first, 72.0);
    assert_eq!(stats["lumbar-flexion"].first, 30.0);
}

#[test]
fn single_reading_has_zero_change() {
    let results = [reading("shoulder-flexion", date(2024, 1, 10), 72.0)];
    let stats = summarize(&results);
    let item = &stats["shoulder-flexion"];
    assert_eq!(item.first, item.latest);
    assert_eq!(item.percent_change, Some(0.0));
}
