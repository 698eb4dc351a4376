use std::sync::LazyLock;

use crate::defs::{AssessmentCategory, AssessmentDef, NormalRange, Unit, ValueType};

/// Functional scores, pain scales, and observational items.
pub fn items() -> &'static [AssessmentDef] {
    static ITEMS: LazyLock<Vec<AssessmentDef>> = LazyLock::new(|| {
        vec![
            AssessmentDef {
                id: "vas-pain".to_string(),
                name: "VAS Pain Rating".to_string(),
                category: AssessmentCategory::Pain,
                value_type: ValueType::Vas,
                unit: None,
                normal_range: None,
                description: Some("Subjective pain intensity, 0 (none) to 10 (worst imaginable).".to_string()),
                instructions: vec![
                    "Ask the patient to rate current pain from 0 to 10.".to_string(),
                ],
                references: Vec::new(),
            },
            AssessmentDef {
                id: "neck-disability-index".to_string(),
                name: "Neck Disability Index".to_string(),
                category: AssessmentCategory::Functional,
                value_type: ValueType::Score,
                unit: Some(Unit::Points),
                normal_range: Some(NormalRange { min: 0.0, max: 100.0 }),
                description: Some("Self-reported neck disability, percentage score.".to_string()),
                instructions: Vec::new(),
                references: vec![
                    "Vernon H, Mior S. The Neck Disability Index. J Manipulative Physiol Ther. 1991;14(7):409-415.".to_string(),
                ],
            },
            AssessmentDef {
                id: "oswestry-disability-index".to_string(),
                name: "Oswestry Disability Index".to_string(),
                category: AssessmentCategory::Functional,
                value_type: ValueType::Score,
                unit: Some(Unit::Points),
                normal_range: Some(NormalRange { min: 0.0, max: 100.0 }),
                description: Some("Self-reported low back disability, percentage score.".to_string()),
                instructions: Vec::new(),
                references: vec![
                    "Fairbank JC, Pynsent PB. The Oswestry Disability Index. Spine. 2000;25(22):2940-2952.".to_string(),
                ],
            },
            AssessmentDef {
                id: "spadi".to_string(),
                name: "Shoulder Pain and Disability Index".to_string(),
                category: AssessmentCategory::Functional,
                value_type: ValueType::Score,
                unit: Some(Unit::Points),
                normal_range: Some(NormalRange { min: 0.0, max: 100.0 }),
                description: Some("Shoulder pain and disability, percentage score.".to_string()),
                instructions: Vec::new(),
                references: vec![
                    "Roach KE, et al. Development of a shoulder pain and disability index. Arthritis Care Res. 1991;4(4):143-149.".to_string(),
                ],
            },
            AssessmentDef {
                id: "lower-extremity-functional-scale".to_string(),
                name: "Lower Extremity Functional Scale".to_string(),
                category: AssessmentCategory::Functional,
                value_type: ValueType::Score,
                unit: Some(Unit::Points),
                normal_range: Some(NormalRange { min: 0.0, max: 80.0 }),
                description: Some("Lower limb function, 0–80 points.".to_string()),
                instructions: Vec::new(),
                references: vec![
                    "Binkley JM, et al. The Lower Extremity Functional Scale. Phys Ther. 1999;79(4):371-383.".to_string(),
                ],
            },
            AssessmentDef {
                id: "single-leg-stance".to_string(),
                name: "Single Leg Stance Time".to_string(),
                category: AssessmentCategory::Balance,
                value_type: ValueType::Range,
                unit: Some(Unit::Sec),
                normal_range: None,
                description: Some("Timed single-leg standing balance, eyes open.".to_string()),
                instructions: vec![
                    "Stand on one leg, arms at the sides.".to_string(),
                    "Stop timing when the raised foot touches down.".to_string(),
                ],
                references: Vec::new(),
            },
            AssessmentDef {
                id: "posture-observation".to_string(),
                name: "Postural Observation".to_string(),
                category: AssessmentCategory::Posture,
                value_type: ValueType::Text,
                unit: None,
                normal_range: None,
                description: Some("Free-text postural findings in standing.".to_string()),
                instructions: Vec::new(),
                references: Vec::new(),
            },
            AssessmentDef {
                id: "gait-observation".to_string(),
                name: "Gait Observation".to_string(),
                category: AssessmentCategory::Gait,
                value_type: ValueType::Text,
                unit: None,
                normal_range: None,
                description: Some("Free-text gait pattern findings.".to_string()),
                instructions: Vec::new(),
                references: Vec::new(),
            },
        ]
    });
    &ITEMS
}
