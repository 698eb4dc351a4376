use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A clinician-defined evaluation form layout. Fields are ordered, so they
/// live in a `Vec` rather than a map.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationTemplate {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub fields: Vec<TemplateField>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateField {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub unit: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldType {
    Number,
    Text,
    Select,
}
