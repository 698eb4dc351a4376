//! Recommendation resolution: diagnosis slug → ordered assessment subset.

use crate::defs::AssessmentDef;
use crate::error::CatalogError;
use crate::{catalog, find_diagnosis};

/// Return the catalog entries recommended for a diagnosis, in catalog
/// order. Recommendation slugs that no longer resolve to a catalog entry
/// are dropped silently — a missing assessment must never block diagnosis
/// selection. Pure read, no side effects.
pub fn resolve_recommendations(
    diagnosis_id: &str,
) -> Result<Vec<&'static AssessmentDef>, CatalogError> {
    let diagnosis = find_diagnosis(diagnosis_id)
        .ok_or_else(|| CatalogError::UnknownDiagnosis(diagnosis_id.to_string()))?;

    Ok(catalog()
        .iter()
        .filter(|item| {
            diagnosis
                .recommended_assessments
                .iter()
                .any(|slug| slug == &item.id)
        })
        .collect())
}
