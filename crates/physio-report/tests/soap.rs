use jiff::civil::date;
use uuid::Uuid;

use physio_catalog::find_diagnosis;
use physio_core::models::patient::{Gender, Patient};
use physio_core::models::result::AssessmentResult;
use physio_core::models::value::{AssessmentValue, BinaryOutcome, RangeFlag};
use physio_report::soap::assemble;

fn patient() -> Patient {
    Patient {
        id: Uuid::new_v4(),
        owner_sub: "clinician-1".to_string(),
        name: "Jane Doe".to_string(),
        gender: Gender::Female,
        birth_date: date(1985, 3, 14),
        phone_number: "010-0000-0000".to_string(),
        address: None,
        medical_history: None,
        medications: None,
        allergies: None,
        notes: None,
        diagnosis_id: Some("shoulder-impingement".to_string()),
        created_at: jiff::Timestamp::now(),
        updated_at: jiff::Timestamp::now(),
    }
}

fn result(assessment_id: &str, value: AssessmentValue) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        assessment_id: assessment_id.to_string(),
        patient_id: Uuid::new_v4(),
        session_id: Uuid::new_v4(),
        evaluator_sub: "clinician-1".to_string(),
        value,
        range_flag: RangeFlag::NotApplicable,
        notes: None,
        date: date(2024, 1, 10),
        created_at: jiff::Timestamp::now(),
    }
}

#[test]
fn note_has_exactly_four_sections() {
    let diagnosis = find_diagnosis("shoulder-impingement");
    let results = [result("shoulder-flexion", AssessmentValue::Range(72.0))];
    let note = assemble(&patient(), diagnosis, &results);

    let lines: Vec<&str> = note.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[S] "));
    assert!(lines[1].starts_with("[O] "));
    assert!(lines[2].starts_with("[A] "));
    assert!(lines[3].starts_with("[P] "));
}

#[test]
fn objective_joins_name_value_and_unit() {
    let diagnosis = find_diagnosis("shoulder-impingement");
    let results = [
        result("shoulder-flexion", AssessmentValue::Range(72.0)),
        result(
            "neer-test",
            AssessmentValue::Binary(BinaryOutcome::Positive),
        ),
        result("vas-pain", AssessmentValue::Vas(6)),
    ];
    let note = assemble(&patient(), diagnosis, &results);

    assert!(note.contains("Shoulder Flexion: 72 deg"));
    assert!(note.contains("Neer Impingement Test: positive"));
    assert!(note.contains("VAS Pain Rating: 6/10"));
}

#[test]
fn unresolvable_assessment_ids_contribute_nothing() {
    let diagnosis = find_diagnosis("shoulder-impingement");
    let results = [
        result("shoulder-flexion", AssessmentValue::Range(72.0)),
        result("retired-item", AssessmentValue::Range(1.0)),
    ];
    let note = assemble(&patient(), diagnosis, &results);

    assert!(note.contains("Shoulder Flexion: 72 deg"));
    assert!(!note.contains("retired-item"));
}

#[test]
fn empty_results_use_the_no_data_marker() {
    let note = assemble(&patient(), find_diagnosis("shoulder-impingement"), &[]);
    assert!(note.contains("[O] no assessment data recorded"));
}

#[test]
fn assessment_section_carries_icf_activity_codes() {
    let diagnosis = find_diagnosis("shoulder-impingement").unwrap();
    let note = assemble(&patient(), Some(diagnosis), &[]);
    assert!(note.contains("[A] Shoulder Impingement Syndrome, ICF: d4452, d4454"));
}

#[test]
fn missing_diagnosis_falls_back_to_the_patient_record() {
    let mut p = patient();
    p.diagnosis_id = Some("chronic shoulder pain".to_string());
    let note = assemble(&p, None, &[]);
    assert!(note.contains("chronic shoulder pain"));

    p.diagnosis_id = None;
    let note = assemble(&p, None, &[]);
    assert!(note.contains("an undiagnosed condition"));
}

#[test]
fn plan_is_the_constant_placeholder() {
    let note = assemble(&patient(), None, &[]);
    assert!(note.ends_with("[P] Re-evaluation planned after two weeks of rehabilitation."));
}
