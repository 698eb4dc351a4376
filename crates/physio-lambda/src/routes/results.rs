use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use physio_audit::events::AuditEvent;
use physio_catalog::error::CatalogError;
use physio_catalog::validate::{range_flag, validate_value, RawValue};
use physio_core::doc_keys;
use physio_core::models::patient::Patient;
use physio_core::models::result::AssessmentResult;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecordResultRequest {
    pub assessment_id: String,
    pub session_id: Uuid,
    pub value: RawValue,
    #[serde(default)]
    pub notes: Option<String>,
    /// Measurement date; defaults to today.
    #[serde(default)]
    pub date: Option<jiff::civil::Date>,
}

/// The result recorder: validate the submitted value against the catalog
/// definition and persist exactly one new immutable record.
pub async fn record_result(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Json<AssessmentResult>, ApiError> {
    // Ownership check: the patient document must exist under this clinician.
    state
        .store
        .get::<Patient>(&doc_keys::patient(&user.sub, patient_id))
        .await?;

    let def = physio_catalog::find_assessment(&req.assessment_id)
        .ok_or_else(|| CatalogError::UnknownAssessment(req.assessment_id.clone()))?;
    let value = validate_value(def, &req.value)?;
    let flag = range_flag(def, &value);

    let result = AssessmentResult {
        id: Uuid::new_v4(),
        assessment_id: def.id.clone(),
        patient_id,
        session_id: req.session_id,
        evaluator_sub: user.sub.clone(),
        value,
        range_flag: flag,
        notes: req.notes,
        date: req.date.unwrap_or_else(|| jiff::Zoned::now().date()),
        created_at: jiff::Timestamp::now(),
    };

    let key = doc_keys::result(patient_id, result.id);
    state.store.put(&key, &result).await?;

    AuditEvent::new("create", "assessment_result", result.id.to_string(), &user.sub)
        .with_details(serde_json::json!({ "assessment_id": def.id }))
        .emit();
    Ok(Json(result))
}

pub async fn list_results(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<AssessmentResult>>, ApiError> {
    state
        .store
        .get::<Patient>(&doc_keys::patient(&user.sub, patient_id))
        .await?;

    let mut results: Vec<AssessmentResult> = state
        .store
        .list_all(&doc_keys::results_prefix(patient_id))
        .await?;
    results.sort_by_key(|r| (r.date, r.created_at));
    Ok(Json(results))
}
