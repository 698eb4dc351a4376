use axum::extract::{Path, Query};
use axum::Json;

use physio_catalog::defs::AssessmentDef;
use physio_catalog::filter::AssessmentFilter;
use physio_catalog::{catalog, find_assessment};

use crate::error::ApiError;

pub async fn list_assessments(
    Query(filter): Query<AssessmentFilter>,
) -> Json<Vec<AssessmentDef>> {
    let items: Vec<AssessmentDef> = catalog()
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    Json(items)
}

pub async fn get_assessment(Path(id): Path<String>) -> Result<Json<AssessmentDef>, ApiError> {
    let item = find_assessment(&id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown assessment: {id}")))?;
    Ok(Json(item.clone()))
}
