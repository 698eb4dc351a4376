use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use physio_audit::events::AuditEvent;
use physio_core::doc_keys;
use physio_core::models::evaluation::{Evaluation, EvaluationKind, EvaluationStatus};
use physio_core::models::patient::Patient;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EvaluationForm {
    pub evaluator_name: String,
    pub kind: EvaluationKind,
    pub status: EvaluationStatus,
    #[serde(default)]
    pub next_evaluation_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

async fn require_patient(
    state: &AppState,
    user: &AuthUser,
    patient_id: Uuid,
) -> Result<(), ApiError> {
    state
        .store
        .get::<Patient>(&doc_keys::patient(&user.sub, patient_id))
        .await?;
    Ok(())
}

pub async fn list_evaluations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<Evaluation>>, ApiError> {
    require_patient(&state, &user, patient_id).await?;

    let mut evaluations: Vec<Evaluation> = state
        .store
        .list_all(&doc_keys::evaluations_prefix(patient_id))
        .await?;
    evaluations.sort_by_key(|e| e.created_at);
    Ok(Json(evaluations))
}

pub async fn create_evaluation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
    Json(form): Json<EvaluationForm>,
) -> Result<Json<Evaluation>, ApiError> {
    require_patient(&state, &user, patient_id).await?;

    let now = jiff::Timestamp::now();
    let evaluation = Evaluation {
        id: Uuid::new_v4(),
        patient_id,
        evaluator_sub: user.sub.clone(),
        evaluator_name: form.evaluator_name,
        kind: form.kind,
        status: form.status,
        next_evaluation_date: form.next_evaluation_date,
        notes: form.notes,
        recommendations: form.recommendations,
        created_at: now,
        updated_at: now,
    };

    let key = doc_keys::evaluation(patient_id, evaluation.id);
    state.store.put(&key, &evaluation).await?;

    AuditEvent::new("create", "evaluation", evaluation.id.to_string(), &user.sub).emit();
    Ok(Json(evaluation))
}

pub async fn get_evaluation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((patient_id, eval_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Evaluation>, ApiError> {
    require_patient(&state, &user, patient_id).await?;

    let key = doc_keys::evaluation(patient_id, eval_id);
    let doc = state.store.get::<Evaluation>(&key).await?;
    Ok(Json(doc.value))
}

pub async fn update_evaluation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((patient_id, eval_id)): Path<(Uuid, Uuid)>,
    Json(form): Json<EvaluationForm>,
) -> Result<Json<Evaluation>, ApiError> {
    require_patient(&state, &user, patient_id).await?;

    let key = doc_keys::evaluation(patient_id, eval_id);
    let existing = state.store.get::<Evaluation>(&key).await?.value;

    let evaluation = Evaluation {
        id: eval_id,
        patient_id,
        evaluator_sub: existing.evaluator_sub,
        evaluator_name: form.evaluator_name,
        kind: form.kind,
        status: form.status,
        next_evaluation_date: form.next_evaluation_date,
        notes: form.notes,
        recommendations: form.recommendations,
        created_at: existing.created_at,
        updated_at: jiff::Timestamp::now(),
    };
    state.store.put(&key, &evaluation).await?;

    AuditEvent::new("update", "evaluation", eval_id.to_string(), &user.sub).emit();
    Ok(Json(evaluation))
}

pub async fn delete_evaluation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((patient_id, eval_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<()>, ApiError> {
    require_patient(&state, &user, patient_id).await?;

    let key = doc_keys::evaluation(patient_id, eval_id);
    state.store.delete(&key).await?;

    AuditEvent::new("delete", "evaluation", eval_id.to_string(), &user.sub).emit();
    Ok(Json(()))
}
