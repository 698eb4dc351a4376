use std::sync::LazyLock;

use crate::defs::{AssessmentCategory, AssessmentDef, ValueType};

const ORTHO_REF: &str = "Magee DJ. Orthopedic Physical Assessment. 6th ed. \
St. Louis, MO: Elsevier Saunders; 2014.";

/// Special tests: binary positive/negative provocation tests.
pub fn items() -> &'static [AssessmentDef] {
    static ITEMS: LazyLock<Vec<AssessmentDef>> = LazyLock::new(|| {
        let tests: [(&str, &str, &str, &[&str]); 7] = [
            (
                "spurling-test",
                "Spurling Test",
                "Cervical radiculopathy provocation.",
                &[
                    "Seat the patient.",
                    "Extend the cervical spine, rotate and side-bend toward the affected side.",
                    "Apply axial compression through the head.",
                    "Reproduction of radiating arm pain is positive.",
                ],
            ),
            (
                "neer-test",
                "Neer Impingement Test",
                "Subacromial impingement provocation.",
                &[
                    "Seat the patient.",
                    "Stabilize the scapula and passively flex the arm overhead.",
                    "Pain in the subacromial region is positive.",
                ],
            ),
            (
                "hawkins-kennedy-test",
                "Hawkins-Kennedy Test",
                "Subacromial impingement provocation.",
                &[
                    "Flex the shoulder and elbow to 90 degrees.",
                    "Passively rotate the shoulder internally.",
                    "Pain during internal rotation is positive.",
                ],
            ),
            (
                "empty-can-test",
                "Empty Can Test",
                "Supraspinatus involvement.",
                &[
                    "Elevate the arms to 90 degrees in the scapular plane, thumbs down.",
                    "Apply downward resistance.",
                    "Weakness or pain is positive.",
                ],
            ),
            (
                "slr-test",
                "Straight Leg Raise Test",
                "Lumbar nerve root tension.",
                &[
                    "Position the patient supine.",
                    "Raise the extended leg slowly.",
                    "Radiating leg pain between 30 and 70 degrees is positive.",
                ],
            ),
            (
                "mcmurray-test",
                "McMurray Test",
                "Meniscal tear provocation.",
                &[
                    "Flex the knee fully, supine.",
                    "Rotate the tibia while extending the knee.",
                    "A palpable click or pain is positive.",
                ],
            ),
            (
                "anterior-drawer-test",
                "Anterior Drawer Test (Ankle)",
                "Anterior talofibular ligament laxity.",
                &[
                    "Slightly plantarflex the ankle.",
                    "Stabilize the tibia and draw the calcaneus forward.",
                    "Excessive anterior translation is positive.",
                ],
            ),
        ];

        tests
            .iter()
            .map(|&(id, name, description, steps)| AssessmentDef {
                id: id.to_string(),
                name: name.to_string(),
                category: AssessmentCategory::SpecialTest,
                value_type: ValueType::Binary,
                unit: None,
                normal_range: None,
                description: Some(description.to_string()),
                instructions: steps.iter().map(|s| s.to_string()).collect(),
                references: vec![ORTHO_REF.to_string()],
            })
            .collect()
    });
    &ITEMS
}
