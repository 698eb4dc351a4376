use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown diagnosis: {0}")]
    UnknownDiagnosis(String),

    #[error("unknown assessment: {0}")]
    UnknownAssessment(String),

    #[error("invalid value for {assessment_id}: {reason}")]
    InvalidValue {
        assessment_id: String,
        reason: String,
    },
}
