//! SOAP note drafting.
//!
//! Assembles the four fixed sections from the patient record, the selected
//! diagnosis, and the recorded results. Template substitution only — the
//! clinician edits the draft before it goes anywhere.

use physio_catalog::defs::DiagnosisDef;
use physio_catalog::find_assessment;
use physio_core::models::patient::Patient;
use physio_core::models::result::AssessmentResult;

const NO_DATA: &str = "no assessment data recorded";
const PLAN: &str = "Re-evaluation planned after two weeks of rehabilitation.";

/// Draft a SOAP note as four lines: `[S]`, `[O]`, `[A]`, `[P]`.
///
/// Results whose assessment slug no longer resolves contribute nothing to
/// the objective section.
pub fn assemble(
    patient: &Patient,
    diagnosis: Option<&DiagnosisDef>,
    results: &[AssessmentResult],
) -> String {
    let diagnosis_name = diagnosis
        .map(|d| d.name.clone())
        .or_else(|| patient.diagnosis_id.clone())
        .unwrap_or_else(|| "an undiagnosed condition".to_string());

    let subjective = format!(
        "Patient {} ({}) reports functional limitation due to {}.",
        patient.name, patient.gender, diagnosis_name
    );

    let findings: Vec<String> = results
        .iter()
        .filter_map(|result| {
            let def = find_assessment(&result.assessment_id)?;
            let entry = match def.unit {
                Some(unit) => format!("{}: {} {}", def.name, result.value, unit),
                None => format!("{}: {}", def.name, result.value),
            };
            Some(entry)
        })
        .collect();
    let objective = if findings.is_empty() {
        NO_DATA.to_string()
    } else {
        findings.join(", ")
    };

    let assessment = match diagnosis {
        Some(d) if !d.icf.activity.is_empty() => {
            format!("{}, ICF: {}", d.name, d.icf.activity.join(", "))
        }
        Some(d) => d.name.clone(),
        None => diagnosis_name,
    };

    format!("[S] {subjective}\n[O] {objective}\n[A] {assessment}\n[P] {PLAN}")
}
