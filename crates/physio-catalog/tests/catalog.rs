use std::collections::HashSet;

use physio_catalog::defs::{AssessmentCategory, ValueType};
use physio_catalog::filter::{AssessmentFilter, DiagnosisFilter};
use physio_catalog::{catalog, diagnoses};

#[test]
fn catalog_slugs_are_unique() {
    let mut seen = HashSet::new();
    for item in catalog() {
        assert!(seen.insert(&item.id), "duplicate catalog slug: {}", item.id);
    }
}

#[test]
fn diagnosis_slugs_are_unique() {
    let mut seen = HashSet::new();
    for diagnosis in diagnoses::all() {
        assert!(seen.insert(&diagnosis.id), "duplicate diagnosis slug: {}", diagnosis.id);
    }
}

#[test]
fn rom_items_have_degree_ranges() {
    for item in catalog()
        .iter()
        .filter(|i| i.category == AssessmentCategory::Rom)
    {
        assert_eq!(item.value_type, ValueType::Range, "{}", item.id);
        assert!(item.normal_range.is_some(), "{} has no normal range", item.id);
    }
}

#[test]
fn category_filter_selects_only_that_category() {
    let filter = AssessmentFilter {
        category: Some(AssessmentCategory::SpecialTest),
        ..Default::default()
    };
    let matched: Vec<_> = catalog().iter().filter(|i| filter.matches(i)).collect();
    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|i| i.category == AssessmentCategory::SpecialTest));
}

#[test]
fn search_term_is_case_insensitive() {
    let filter = AssessmentFilter {
        q: Some("SHOULDER".to_string()),
        ..Default::default()
    };
    let matched: Vec<_> = catalog().iter().filter(|i| filter.matches(i)).collect();
    assert!(matched.iter().any(|i| i.id == "shoulder-flexion"));
}

#[test]
fn diagnosis_search_matches_description() {
    let filter = DiagnosisFilter {
        q: Some("subacromial".to_string()),
        ..Default::default()
    };
    let matched: Vec<_> = diagnoses::all().iter().filter(|d| filter.matches(d)).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "shoulder-impingement");
}

#[test]
fn empty_filter_matches_everything() {
    let filter = AssessmentFilter::default();
    assert_eq!(
        catalog().iter().filter(|i| filter.matches(i)).count(),
        catalog().len()
    );
}
