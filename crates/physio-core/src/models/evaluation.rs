use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A session grouping the results captured together, with its clinical
/// classification and completion status.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub evaluator_sub: String,
    pub evaluator_name: String,
    pub kind: EvaluationKind,
    pub status: EvaluationStatus,
    pub next_evaluation_date: Option<jiff::civil::Date>,
    pub notes: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationKind {
    Initial,
    Progress,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationStatus {
    Pending,
    Completed,
}
