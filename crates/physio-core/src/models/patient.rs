use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A patient record. Owned by exactly one clinician account; only ever
/// listed or returned for that owner.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    /// Cognito subject of the owning clinician.
    pub owner_sub: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: jiff::civil::Date,
    pub phone_number: String,
    pub address: Option<String>,
    pub medical_history: Option<String>,
    pub medications: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    /// Slug into the diagnosis catalog, once a diagnosis has been selected.
    pub diagnosis_id: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}
