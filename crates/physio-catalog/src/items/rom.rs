use std::sync::LazyLock;

use crate::defs::{AssessmentCategory, AssessmentDef, NormalRange, Unit, ValueType};

const GONIOMETRY_REF: &str = "Norkin CC, White DJ. Measurement of Joint Motion: \
A Guide to Goniometry. 5th ed. Philadelphia, PA: F.A. Davis; 2016.";

/// Range-of-motion items: goniometry readings in degrees with advisory
/// normal ranges.
pub fn items() -> &'static [AssessmentDef] {
    static ITEMS: LazyLock<Vec<AssessmentDef>> = LazyLock::new(|| {
        let movements = [
            ("cervical-flexion", "Cervical Flexion", 45.0, "Chin toward chest, measured seated."),
            ("cervical-extension", "Cervical Extension", 45.0, "Head tilted back, measured seated."),
            ("cervical-rotation", "Cervical Rotation", 80.0, "Head turned to each side, measured seated."),
            ("shoulder-flexion", "Shoulder Flexion", 180.0, "Arm raised forward and overhead."),
            ("shoulder-extension", "Shoulder Extension", 60.0, "Arm moved backward past the trunk."),
            ("shoulder-abduction", "Shoulder Abduction", 180.0, "Arm raised sideways and overhead."),
            ("shoulder-external-rotation", "Shoulder External Rotation", 90.0, "Forearm rotated outward, elbow at 90 degrees."),
            ("lumbar-flexion", "Lumbar Flexion", 60.0, "Trunk bent forward from standing."),
            ("lumbar-extension", "Lumbar Extension", 25.0, "Trunk bent backward from standing."),
            ("knee-flexion", "Knee Flexion", 135.0, "Heel drawn toward buttock, supine."),
            ("ankle-dorsiflexion", "Ankle Dorsiflexion", 20.0, "Foot drawn upward, knee extended."),
        ];

        movements
            .iter()
            .map(|&(id, name, max, description)| AssessmentDef {
                id: id.to_string(),
                name: name.to_string(),
                category: AssessmentCategory::Rom,
                value_type: ValueType::Range,
                unit: Some(Unit::Degree),
                normal_range: Some(NormalRange { min: 0.0, max }),
                description: Some(description.to_string()),
                instructions: vec![
                    "Position the patient and stabilize the proximal segment.".to_string(),
                    "Align the goniometer with the joint axis.".to_string(),
                    "Record the end-range angle in degrees.".to_string(),
                ],
                references: vec![GONIOMETRY_REF.to_string()],
            })
            .collect()
    });
    &ITEMS
}
