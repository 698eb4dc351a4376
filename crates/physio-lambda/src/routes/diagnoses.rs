use axum::extract::{Path, Query};
use axum::Json;

use physio_catalog::defs::{AssessmentDef, DiagnosisDef};
use physio_catalog::filter::DiagnosisFilter;
use physio_catalog::resolve::resolve_recommendations;
use physio_catalog::{diagnoses, find_diagnosis};

use crate::error::ApiError;

pub async fn list_diagnoses(Query(filter): Query<DiagnosisFilter>) -> Json<Vec<DiagnosisDef>> {
    let items: Vec<DiagnosisDef> = diagnoses::all()
        .iter()
        .filter(|d| filter.matches(d))
        .cloned()
        .collect();
    Json(items)
}

pub async fn get_diagnosis(Path(id): Path<String>) -> Result<Json<DiagnosisDef>, ApiError> {
    let diagnosis = find_diagnosis(&id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown diagnosis: {id}")))?;
    Ok(Json(diagnosis.clone()))
}

/// The recommendation resolver: the assessment catalog subset this
/// diagnosis calls for, in catalog order.
pub async fn get_recommendations(
    Path(id): Path<String>,
) -> Result<Json<Vec<AssessmentDef>>, ApiError> {
    let items = resolve_recommendations(&id)?;
    Ok(Json(items.into_iter().cloned().collect()))
}
