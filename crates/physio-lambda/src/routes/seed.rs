use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use physio_audit::events::AuditEvent;
use physio_catalog::{catalog, diagnoses};
use physio_core::doc_keys;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SeedSummary {
    pub assessments_written: usize,
    pub diagnoses_written: usize,
}

/// Write the static reference catalogs into the document store for
/// downstream consumers. Idempotent: documents that already exist are left
/// untouched, so re-running after a partial failure only fills the gaps.
pub async fn seed_catalogs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SeedSummary>, ApiError> {
    let mut assessments_written = 0;
    for item in catalog() {
        let key = doc_keys::assessment(&item.id);
        if !state.store.exists(&key).await? {
            state.store.put(&key, item).await?;
            assessments_written += 1;
        }
    }

    let mut diagnoses_written = 0;
    for diagnosis in diagnoses::all() {
        let key = doc_keys::diagnosis(&diagnosis.id);
        if !state.store.exists(&key).await? {
            state.store.put(&key, diagnosis).await?;
            diagnoses_written += 1;
        }
    }

    AuditEvent::new("seed", "catalog", "reference-data", &user.sub).emit();
    Ok(Json(SeedSummary {
        assessments_written,
        diagnoses_written,
    }))
}
