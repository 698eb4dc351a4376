use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An entry in the assessment item catalog. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDef {
    /// Stable slug, referenced by diagnoses and results.
    pub id: String,
    pub name: String,
    pub category: AssessmentCategory,
    pub value_type: ValueType,
    pub unit: Option<Unit>,
    pub normal_range: Option<NormalRange>,
    pub description: Option<String>,
    /// Step-by-step administration instructions.
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentCategory {
    Rom,
    Mmt,
    SpecialTest,
    Functional,
    Pain,
    Posture,
    Balance,
    Gait,
    Other,
}

/// The shape a recorded value for this item must take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValueType {
    /// Finite number, e.g. a joint angle.
    Range,
    /// Ordinal MMT grade, integer 0–5.
    Grade,
    /// Special test outcome: positive or negative.
    Binary,
    /// Finite number, e.g. a questionnaire total.
    Score,
    /// Visual analog scale, integer 0–10.
    Vas,
    /// Non-empty free text.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Unit {
    Degree,
    Cm,
    Kg,
    Sec,
    Count,
    Points,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Degree => write!(f, "deg"),
            Unit::Cm => write!(f, "cm"),
            Unit::Kg => write!(f, "kg"),
            Unit::Sec => write!(f, "sec"),
            Unit::Count => write!(f, "reps"),
            Unit::Points => write!(f, "points"),
        }
    }
}

/// Advisory normal range for numeric items. Display-only: values outside
/// the range are flagged, never rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// An entry in the diagnosis catalog. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisDef {
    pub id: String,
    pub name: String,
    pub category: DiagnosisCategory,
    pub sub_category: Option<Region>,
    pub description: Option<String>,
    pub icf: IcfCodes,
    /// Ordered slugs into the assessment catalog. Slugs that no longer
    /// resolve are dropped at resolution time, never an error.
    pub recommended_assessments: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub yellow_flags: Vec<String>,
    pub evidence_level: Option<EvidenceLevel>,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisCategory {
    Msd,
    Neuro,
    Cardio,
    Geriatric,
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Region {
    Cervical,
    Thoracic,
    Lumbar,
    Shoulder,
    Elbow,
    WristHand,
    Hip,
    Knee,
    AnkleFoot,
}

/// International Classification of Functioning reference codes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IcfCodes {
    pub body_function: Vec<String>,
    pub body_structure: Vec<String>,
    pub activity: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvidenceLevel {
    A,
    B,
    C,
}
