use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::value::{AssessmentValue, RangeFlag};

/// One measurement taken during a session. Append-only: results are never
/// mutated after creation, so there is no `updated_at` — a correction is a
/// new record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    /// Slug into the assessment catalog.
    pub assessment_id: String,
    pub patient_id: Uuid,
    pub session_id: Uuid,
    pub evaluator_sub: String,
    pub value: AssessmentValue,
    pub range_flag: RangeFlag,
    pub notes: Option<String>,
    /// Calendar date the measurement was taken; charts group by this.
    pub date: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
}
