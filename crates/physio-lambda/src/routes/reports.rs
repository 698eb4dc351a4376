use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use physio_catalog::find_diagnosis;
use physio_core::doc_keys;
use physio_core::models::patient::Patient;
use physio_core::models::result::AssessmentResult;
use physio_report::soap;
use physio_report::stats::{summarize, ItemStats};
use physio_report::timeline::{timeline, TimelinePoint};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn load_patient_results(
    state: &AppState,
    user: &AuthUser,
    patient_id: Uuid,
) -> Result<(Patient, Vec<AssessmentResult>), ApiError> {
    let patient = state
        .store
        .get::<Patient>(&doc_keys::patient(&user.sub, patient_id))
        .await?
        .value;

    let mut results: Vec<AssessmentResult> = state
        .store
        .list_all(&doc_keys::results_prefix(patient_id))
        .await?;
    results.sort_by_key(|r| (r.date, r.created_at));

    Ok((patient, results))
}

/// Chart data: one point per calendar date with per-item averages.
pub async fn get_timeline(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<TimelinePoint>>, ApiError> {
    let (_, results) = load_patient_results(&state, &user, patient_id).await?;
    Ok(Json(timeline(&results)))
}

/// Per-item progress statistics across the patient's history.
pub async fn get_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<BTreeMap<String, ItemStats>>, ApiError> {
    let (_, results) = load_patient_results(&state, &user, patient_id).await?;
    Ok(Json(summarize(&results)))
}

#[derive(Serialize)]
pub struct SoapNote {
    pub text: String,
}

/// Draft a SOAP note from the stored record.
pub async fn get_soap(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<SoapNote>, ApiError> {
    let (patient, results) = load_patient_results(&state, &user, patient_id).await?;
    let diagnosis = patient.diagnosis_id.as_deref().and_then(find_diagnosis);

    let text = soap::assemble(&patient, diagnosis, &results);
    Ok(Json(SoapNote { text }))
}
