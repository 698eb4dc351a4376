use std::sync::LazyLock;

use crate::defs::{AssessmentCategory, AssessmentDef, ValueType};

const MMT_REF: &str = "Hislop HJ, Avers D, Brown M. Daniels and Worthingham's \
Muscle Testing: Techniques of Manual Examination. 9th ed. St. Louis, MO: \
Elsevier Saunders; 2013.";

/// Manual muscle test items: ordinal 0–5 strength grades, no unit.
pub fn items() -> &'static [AssessmentDef] {
    static ITEMS: LazyLock<Vec<AssessmentDef>> = LazyLock::new(|| {
        let muscles = [
            ("deep-neck-flexor-mmt", "Deep Neck Flexor Strength", "Cranio-cervical flexion against resistance."),
            ("shoulder-abduction-mmt", "Shoulder Abduction Strength", "Middle deltoid and supraspinatus."),
            ("rotator-cuff-mmt", "Rotator Cuff Strength", "Resisted external rotation at neutral."),
            ("elbow-flexion-mmt", "Elbow Flexion Strength", "Biceps brachii in supination."),
            ("trunk-flexor-mmt", "Trunk Flexor Strength", "Graded curl-up."),
            ("hip-abduction-mmt", "Hip Abduction Strength", "Gluteus medius in side-lying."),
            ("knee-extension-mmt", "Knee Extension Strength", "Quadriceps in sitting."),
            ("ankle-evertor-mmt", "Ankle Evertor Strength", "Peroneals against resistance."),
        ];

        muscles
            .iter()
            .map(|&(id, name, description)| AssessmentDef {
                id: id.to_string(),
                name: name.to_string(),
                category: AssessmentCategory::Mmt,
                value_type: ValueType::Grade,
                unit: None,
                normal_range: None,
                description: Some(description.to_string()),
                instructions: vec![
                    "Place the segment in the test position.".to_string(),
                    "Apply resistance at the distal end of the segment.".to_string(),
                    "Grade 0 (no contraction) to 5 (normal strength).".to_string(),
                ],
                references: vec![MMT_REF.to_string()],
            })
            .collect()
    });
    &ITEMS
}
