//! physio-catalog
//!
//! Static clinical reference data. Pure data and pure functions — no AWS
//! dependency. Defines the assessment item catalog (ROM, MMT, special
//! tests, functional scores, pain), the diagnosis catalog with its
//! recommended-assessment lists, the recommendation resolver, and
//! result-value validation.

pub mod defs;
pub mod diagnoses;
pub mod error;
pub mod filter;
pub mod items;
pub mod resolve;
pub mod validate;

use std::sync::LazyLock;

use defs::{AssessmentDef, DiagnosisDef};

/// The full assessment catalog, in canonical display order.
pub fn catalog() -> &'static [AssessmentDef] {
    static CATALOG: LazyLock<Vec<AssessmentDef>> = LazyLock::new(|| {
        let mut all = Vec::new();
        all.extend(items::rom::items().iter().cloned());
        all.extend(items::mmt::items().iter().cloned());
        all.extend(items::special_tests::items().iter().cloned());
        all.extend(items::functional::items().iter().cloned());
        all
    });
    &CATALOG
}

/// Look up an assessment definition by slug.
pub fn find_assessment(id: &str) -> Option<&'static AssessmentDef> {
    catalog().iter().find(|a| a.id == id)
}

/// Look up a diagnosis by slug.
pub fn find_diagnosis(id: &str) -> Option<&'static DiagnosisDef> {
    diagnoses::all().iter().find(|d| d.id == id)
}
