use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A recorded measurement, shaped by the assessment definition's declared
/// value type. Replaces the loosely typed `string | number` field of the
/// web client with an exhaustively matchable union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentValue {
    /// Joint angle or distance reading (ROM).
    Range(f64),
    /// Manual muscle test grade, 0–5.
    Grade(u8),
    /// Special test outcome.
    Binary(BinaryOutcome),
    /// Functional score (Oswestry, SPADI, ...).
    Score(f64),
    /// Visual analog pain scale, 0–10.
    Vas(u8),
    /// Free-text observation.
    Text(String),
}

impl AssessmentValue {
    /// Numeric reading for charting and statistics. Binary and Text values
    /// are not chartable.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            AssessmentValue::Range(v) | AssessmentValue::Score(v) => Some(*v),
            AssessmentValue::Grade(g) => Some(f64::from(*g)),
            AssessmentValue::Vas(v) => Some(f64::from(*v)),
            AssessmentValue::Binary(_) | AssessmentValue::Text(_) => None,
        }
    }
}

impl fmt::Display for AssessmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentValue::Range(v) | AssessmentValue::Score(v) => {
                if v.fract() == 0.0 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            AssessmentValue::Grade(g) => write!(f, "{g}/5"),
            AssessmentValue::Binary(o) => write!(f, "{o}"),
            AssessmentValue::Vas(v) => write!(f, "{v}/10"),
            AssessmentValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Outcome of a binary special test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BinaryOutcome {
    Positive,
    Negative,
}

impl fmt::Display for BinaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOutcome::Positive => write!(f, "positive"),
            BinaryOutcome::Negative => write!(f, "negative"),
        }
    }
}

/// Advisory flag computed at record time against the definition's normal
/// range. Display-only — out-of-range values are stored, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RangeFlag {
    InRange,
    OutOfRange,
    NotApplicable,
}
