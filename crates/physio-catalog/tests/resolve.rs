use physio_catalog::error::CatalogError;
use physio_catalog::resolve::resolve_recommendations;
use physio_catalog::{catalog, find_diagnosis};

#[test]
fn unknown_diagnosis_is_an_error() {
    let err = resolve_recommendations("frozen-elbow").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownDiagnosis(id) if id == "frozen-elbow"));
}

#[test]
fn resolved_ids_all_exist_in_the_catalog() {
    for diagnosis in physio_catalog::diagnoses::all() {
        let resolved = resolve_recommendations(&diagnosis.id).unwrap();
        for item in &resolved {
            assert!(
                catalog().iter().any(|c| c.id == item.id),
                "{} resolved to unknown item {}",
                diagnosis.id,
                item.id
            );
        }
    }
}

#[test]
fn unresolvable_slugs_are_dropped_not_errors() {
    // cervicogenic-headache recommends cervical-position-sense, which the
    // catalog does not ship.
    let diagnosis = find_diagnosis("cervicogenic-headache").unwrap();
    assert!(
        diagnosis
            .recommended_assessments
            .iter()
            .any(|s| s == "cervical-position-sense")
    );

    let resolved = resolve_recommendations("cervicogenic-headache").unwrap();
    assert!(!resolved.is_empty());
    assert!(resolved.iter().all(|a| a.id != "cervical-position-sense"));
}

#[test]
fn output_preserves_catalog_order() {
    let resolved = resolve_recommendations("shoulder-impingement").unwrap();
    let positions: Vec<usize> = resolved
        .iter()
        .map(|item| catalog().iter().position(|c| c.id == item.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn shoulder_impingement_includes_its_special_tests() {
    let resolved = resolve_recommendations("shoulder-impingement").unwrap();
    let ids: Vec<&str> = resolved.iter().map(|a| a.id.as_str()).collect();
    assert!(ids.contains(&"neer-test"));
    assert!(ids.contains(&"hawkins-kennedy-test"));
    assert!(ids.contains(&"spadi"));
}
