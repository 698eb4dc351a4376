use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use physio_audit::events::AuditEvent;
use physio_core::doc_keys;
use physio_core::models::template::{EvaluationTemplate, TemplateField};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TemplateForm {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
}

pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<EvaluationTemplate>>, ApiError> {
    let mut templates: Vec<EvaluationTemplate> =
        state.store.list_all(doc_keys::TEMPLATES_PREFIX).await?;
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(templates))
}

pub async fn create_template(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<TemplateForm>,
) -> Result<Json<EvaluationTemplate>, ApiError> {
    let now = jiff::Timestamp::now();
    let template = EvaluationTemplate {
        id: Uuid::new_v4(),
        name: form.name,
        description: form.description,
        fields: form.fields,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .put(&doc_keys::template(template.id), &template)
        .await?;

    AuditEvent::new("create", "template", template.id.to_string(), &user.sub).emit();
    Ok(Json(template))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EvaluationTemplate>, ApiError> {
    let doc = state
        .store
        .get::<EvaluationTemplate>(&doc_keys::template(id))
        .await?;
    Ok(Json(doc.value))
}

/// Update a template. Honors an `If-Match` ETag header when the client
/// sends one, so two administrators editing the same template get a 412
/// instead of silently clobbering each other.
pub async fn update_template(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(form): Json<TemplateForm>,
) -> Result<Json<EvaluationTemplate>, ApiError> {
    let key = doc_keys::template(id);
    let existing = state.store.get::<EvaluationTemplate>(&key).await?.value;

    let template = EvaluationTemplate {
        id,
        name: form.name,
        description: form.description,
        fields: form.fields,
        created_at: existing.created_at,
        updated_at: jiff::Timestamp::now(),
    };

    let if_match = headers.get("if-match").and_then(|v| v.to_str().ok());
    match if_match {
        Some(etag) => {
            state.store.put_if_match(&key, &template, etag).await?;
        }
        None => {
            state.store.put(&key, &template).await?;
        }
    }

    AuditEvent::new("update", "template", id.to_string(), &user.sub).emit();
    Ok(Json(template))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete(&doc_keys::template(id)).await?;

    AuditEvent::new("delete", "template", id.to_string(), &user.sub).emit();
    Ok(Json(()))
}
