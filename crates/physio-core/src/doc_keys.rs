//! Document key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of JSON documents in the physio bucket. Patient documents are
//! keyed under the owning clinician's subject so a prefix list is
//! inherently owner-scoped.

use uuid::Uuid;

pub fn patient(owner_sub: &str, id: Uuid) -> String {
    format!("patients/{owner_sub}/{id}.json")
}

pub fn patients_prefix(owner_sub: &str) -> String {
    format!("patients/{owner_sub}/")
}

pub fn diagnosis(id: &str) -> String {
    format!("diagnoses/{id}.json")
}

pub fn assessment(id: &str) -> String {
    format!("assessments/{id}.json")
}

pub fn result(patient_id: Uuid, id: Uuid) -> String {
    format!("results/{patient_id}/{id}.json")
}

pub fn results_prefix(patient_id: Uuid) -> String {
    format!("results/{patient_id}/")
}

pub fn evaluation(patient_id: Uuid, id: Uuid) -> String {
    format!("evaluations/{patient_id}/{id}.json")
}

pub fn evaluations_prefix(patient_id: Uuid) -> String {
    format!("evaluations/{patient_id}/")
}

pub fn template(id: Uuid) -> String {
    format!("templates/{id}.json")
}

pub const TEMPLATES_PREFIX: &str = "templates/";
