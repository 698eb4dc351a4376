use physio_catalog::error::CatalogError;
use physio_catalog::find_assessment;
use physio_catalog::validate::{range_flag, validate_value, RawValue};
use physio_core::models::value::{AssessmentValue, BinaryOutcome, RangeFlag};

fn number(n: f64) -> RawValue {
    RawValue::Number(n)
}

fn text(s: &str) -> RawValue {
    RawValue::Text(s.to_string())
}

#[test]
fn grade_accepts_whole_range_in_both_forms() {
    let def = find_assessment("rotator-cuff-mmt").unwrap();
    for g in 0..=5u8 {
        assert_eq!(
            validate_value(def, &number(f64::from(g))).unwrap(),
            AssessmentValue::Grade(g)
        );
        assert_eq!(
            validate_value(def, &text(&g.to_string())).unwrap(),
            AssessmentValue::Grade(g)
        );
    }
}

#[test]
fn grade_rejects_out_of_range_and_fractional() {
    let def = find_assessment("rotator-cuff-mmt").unwrap();
    for raw in [number(6.0), number(-1.0), text("3.5"), text("strong")] {
        assert!(matches!(
            validate_value(def, &raw),
            Err(CatalogError::InvalidValue { .. })
        ));
    }
}

#[test]
fn vas_boundaries_are_inclusive() {
    let def = find_assessment("vas-pain").unwrap();
    assert_eq!(
        validate_value(def, &number(0.0)).unwrap(),
        AssessmentValue::Vas(0)
    );
    assert_eq!(
        validate_value(def, &number(10.0)).unwrap(),
        AssessmentValue::Vas(10)
    );
    assert!(validate_value(def, &number(11.0)).is_err());
    assert!(validate_value(def, &number(10.5)).is_err());
    assert!(validate_value(def, &number(-0.5)).is_err());
}

#[test]
fn binary_accepts_only_the_two_literals() {
    let def = find_assessment("neer-test").unwrap();
    assert_eq!(
        validate_value(def, &text("positive")).unwrap(),
        AssessmentValue::Binary(BinaryOutcome::Positive)
    );
    assert_eq!(
        validate_value(def, &text(" negative ")).unwrap(),
        AssessmentValue::Binary(BinaryOutcome::Negative)
    );
    assert!(validate_value(def, &text("maybe")).is_err());
    assert!(validate_value(def, &number(1.0)).is_err());
}

#[test]
fn range_parses_numeric_strings() {
    let def = find_assessment("shoulder-flexion").unwrap();
    assert_eq!(
        validate_value(def, &text("72")).unwrap(),
        AssessmentValue::Range(72.0)
    );
    assert!(validate_value(def, &text("seventy")).is_err());
}

#[test]
fn text_must_be_non_empty() {
    let def = find_assessment("posture-observation").unwrap();
    assert_eq!(
        validate_value(def, &text("forward head posture")).unwrap(),
        AssessmentValue::Text("forward head posture".to_string())
    );
    assert!(validate_value(def, &text("   ")).is_err());
    assert!(validate_value(def, &number(3.0)).is_err());
}

#[test]
fn out_of_range_values_are_flagged_not_rejected() {
    // Shoulder flexion, normal range 0-180.
    let def = find_assessment("shoulder-flexion").unwrap();

    let in_range = validate_value(def, &number(72.0)).unwrap();
    assert_eq!(range_flag(def, &in_range), RangeFlag::InRange);

    let out_of_range = validate_value(def, &number(200.0)).unwrap();
    assert_eq!(out_of_range, AssessmentValue::Range(200.0));
    assert_eq!(range_flag(def, &out_of_range), RangeFlag::OutOfRange);
}

#[test]
fn items_without_a_normal_range_are_not_applicable() {
    let balance = find_assessment("single-leg-stance").unwrap();
    let value = validate_value(balance, &number(25.0)).unwrap();
    assert_eq!(range_flag(balance, &value), RangeFlag::NotApplicable);

    let posture = find_assessment("posture-observation").unwrap();
    let value = validate_value(posture, &text("kyphotic")).unwrap();
    assert_eq!(range_flag(posture, &value), RangeFlag::NotApplicable);
}

#[test]
fn unknown_assessment_error_names_the_slug() {
    assert!(find_assessment("retired-item").is_none());

    let err = CatalogError::UnknownAssessment("retired-item".to_string());
    assert_eq!(err.to_string(), "unknown assessment: retired-item");
}
