//! Result-value validation against the assessment definition's declared
//! value type, plus the advisory normal-range flag.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use physio_core::models::value::{AssessmentValue, BinaryOutcome, RangeFlag};

use crate::defs::{AssessmentDef, ValueType};
use crate::error::CatalogError;

/// A value as submitted by a form: a bare number or a string. Forms submit
/// both shapes for the same item (e.g. a grade arrives as `4` or `"4"`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Check a submitted value against the definition's declared type and
/// produce the typed value. Out-of-normal-range readings are not an error
/// here — the range is advisory and handled by [`range_flag`].
pub fn validate_value(
    def: &AssessmentDef,
    raw: &RawValue,
) -> Result<AssessmentValue, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidValue {
        assessment_id: def.id.clone(),
        reason: reason.to_string(),
    };

    match def.value_type {
        ValueType::Range => {
            let n = raw.as_number().ok_or_else(|| invalid("expected a number"))?;
            if !n.is_finite() {
                return Err(invalid("expected a finite number"));
            }
            Ok(AssessmentValue::Range(n))
        }
        ValueType::Score => {
            let n = raw.as_number().ok_or_else(|| invalid("expected a number"))?;
            if !n.is_finite() {
                return Err(invalid("expected a finite number"));
            }
            Ok(AssessmentValue::Score(n))
        }
        ValueType::Grade => {
            let n = raw
                .as_number()
                .ok_or_else(|| invalid("expected a grade 0-5"))?;
            if n.fract() != 0.0 || !(0.0..=5.0).contains(&n) {
                return Err(invalid("grade must be an integer 0-5"));
            }
            Ok(AssessmentValue::Grade(n as u8))
        }
        ValueType::Vas => {
            let n = raw
                .as_number()
                .ok_or_else(|| invalid("expected a rating 0-10"))?;
            if n.fract() != 0.0 || !(0.0..=10.0).contains(&n) {
                return Err(invalid("VAS rating must be an integer 0-10"));
            }
            Ok(AssessmentValue::Vas(n as u8))
        }
        ValueType::Binary => match raw {
            RawValue::Text(s) => match s.trim() {
                "positive" => Ok(AssessmentValue::Binary(BinaryOutcome::Positive)),
                "negative" => Ok(AssessmentValue::Binary(BinaryOutcome::Negative)),
                _ => Err(invalid("expected \"positive\" or \"negative\"")),
            },
            RawValue::Number(_) => Err(invalid("expected \"positive\" or \"negative\"")),
        },
        ValueType::Text => match raw {
            RawValue::Text(s) if !s.trim().is_empty() => {
                Ok(AssessmentValue::Text(s.trim().to_string()))
            }
            _ => Err(invalid("expected non-empty text")),
        },
    }
}

/// Advisory in/out-of-range flag for a validated value. Values without a
/// numeric reading, and definitions without a normal range, are
/// `NotApplicable`.
pub fn range_flag(def: &AssessmentDef, value: &AssessmentValue) -> RangeFlag {
    match (def.normal_range, value.numeric()) {
        (Some(range), Some(n)) => {
            if range.contains(n) {
                RangeFlag::InRange
            } else {
                RangeFlag::OutOfRange
            }
        }
        _ => RangeFlag::NotApplicable,
    }
}
