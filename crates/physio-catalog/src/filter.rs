//! Catalog-side list filters, matching the search behavior of the list
//! screens: exact enum matches plus case-insensitive substring search over
//! name and description.

use serde::Deserialize;

use crate::defs::{
    AssessmentCategory, AssessmentDef, DiagnosisCategory, DiagnosisDef, EvidenceLevel, Region,
    ValueType,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentFilter {
    pub category: Option<AssessmentCategory>,
    pub value_type: Option<ValueType>,
    pub q: Option<String>,
}

impl AssessmentFilter {
    pub fn matches(&self, def: &AssessmentDef) -> bool {
        if let Some(category) = self.category
            && def.category != category
        {
            return false;
        }
        if let Some(value_type) = self.value_type
            && def.value_type != value_type
        {
            return false;
        }
        if let Some(term) = &self.q
            && !term.trim().is_empty()
        {
            return contains_term(term, &def.name, def.description.as_deref());
        }
        true
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosisFilter {
    pub category: Option<DiagnosisCategory>,
    pub sub_category: Option<Region>,
    pub evidence_level: Option<EvidenceLevel>,
    pub q: Option<String>,
}

impl DiagnosisFilter {
    pub fn matches(&self, def: &DiagnosisDef) -> bool {
        if let Some(category) = self.category
            && def.category != category
        {
            return false;
        }
        if let Some(sub_category) = self.sub_category
            && def.sub_category != Some(sub_category)
        {
            return false;
        }
        if let Some(level) = self.evidence_level
            && def.evidence_level != Some(level)
        {
            return false;
        }
        if let Some(term) = &self.q
            && !term.trim().is_empty()
        {
            return contains_term(term, &def.name, def.description.as_deref());
        }
        true
    }
}

fn contains_term(term: &str, name: &str, description: Option<&str>) -> bool {
    let term = term.trim().to_lowercase();
    name.to_lowercase().contains(&term)
        || description
            .map(|d| d.to_lowercase().contains(&term))
            .unwrap_or(false)
}
