use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use physio_audit::events::AuditEvent;
use physio_core::doc_keys;
use physio_core::models::patient::{Gender, Patient};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Intake / edit form payload. Identity, ownership, and timestamps are
/// stamped server-side.
#[derive(Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub gender: Gender,
    pub birth_date: jiff::civil::Date,
    pub phone_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub diagnosis_id: Option<String>,
}

pub async fn list_patients(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let mut patients: Vec<Patient> = state
        .store
        .list_all(&doc_keys::patients_prefix(&user.sub))
        .await?;
    patients.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(patients))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<PatientForm>,
) -> Result<Json<Patient>, ApiError> {
    let now = jiff::Timestamp::now();
    let patient = Patient {
        id: Uuid::new_v4(),
        owner_sub: user.sub.clone(),
        name: form.name,
        gender: form.gender,
        birth_date: form.birth_date,
        phone_number: form.phone_number,
        address: form.address,
        medical_history: form.medical_history,
        medications: form.medications,
        allergies: form.allergies,
        notes: form.notes,
        diagnosis_id: form.diagnosis_id,
        created_at: now,
        updated_at: now,
    };

    let key = doc_keys::patient(&user.sub, patient.id);
    state.store.put(&key, &patient).await?;

    AuditEvent::new("create", "patient", patient.id.to_string(), &user.sub).emit();
    Ok(Json(patient))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, ApiError> {
    let key = doc_keys::patient(&user.sub, id);
    let doc = state.store.get::<Patient>(&key).await?;
    Ok(Json(doc.value))
}

pub async fn update_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<PatientForm>,
) -> Result<Json<Patient>, ApiError> {
    let key = doc_keys::patient(&user.sub, id);
    let existing = state.store.get::<Patient>(&key).await?.value;

    let patient = Patient {
        id,
        owner_sub: user.sub.clone(),
        name: form.name,
        gender: form.gender,
        birth_date: form.birth_date,
        phone_number: form.phone_number,
        address: form.address,
        medical_history: form.medical_history,
        medications: form.medications,
        allergies: form.allergies,
        notes: form.notes,
        diagnosis_id: form.diagnosis_id,
        created_at: existing.created_at,
        updated_at: jiff::Timestamp::now(),
    };
    state.store.put(&key, &patient).await?;

    AuditEvent::new("update", "patient", id.to_string(), &user.sub).emit();
    Ok(Json(patient))
}

pub async fn delete_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = doc_keys::patient(&user.sub, id);
    // Results and evaluations are soft-referenced and kept.
    state.store.delete(&key).await?;

    AuditEvent::new("delete", "patient", id.to_string(), &user.sub).emit();
    Ok(Json(()))
}
