//! Diagnosis catalog seed data.
//!
//! Each entry carries ICF reference codes, screening flags, and an ordered
//! list of recommended assessment slugs. A few recommendation slugs point
//! at items the catalog does not ship (position sense, sensory testing);
//! the resolver drops those silently.

use std::sync::LazyLock;

use crate::defs::{DiagnosisCategory, DiagnosisDef, EvidenceLevel, IcfCodes, Region};

fn codes(body_function: &[&str], body_structure: &[&str], activity: &[&str]) -> IcfCodes {
    IcfCodes {
        body_function: body_function.iter().map(|s| s.to_string()).collect(),
        body_structure: body_structure.iter().map(|s| s.to_string()).collect(),
        activity: activity.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The full diagnosis catalog.
pub fn all() -> &'static [DiagnosisDef] {
    static DIAGNOSES: LazyLock<Vec<DiagnosisDef>> = LazyLock::new(|| {
        vec![
            DiagnosisDef {
                id: "cervicogenic-headache".to_string(),
                name: "Cervicogenic Headache".to_string(),
                category: DiagnosisCategory::Msd,
                sub_category: Some(Region::Cervical),
                description: Some(
                    "Headache arising from structural or functional disorders of the cervical spine.".to_string(),
                ),
                icf: codes(&["b28010", "b7101"], &["s7103", "s7104"], &["d4150", "d4154"]),
                recommended_assessments: strings(&[
                    "cervical-flexion",
                    "cervical-extension",
                    "cervical-rotation",
                    "deep-neck-flexor-mmt",
                    "neck-disability-index",
                    "vas-pain",
                    "cervical-position-sense",
                ]),
                red_flags: strings(&[
                    "Severe headache with vomiting",
                    "Visual disturbance or diplopia",
                    "Posterior neck pain with fever",
                    "Altered consciousness",
                ]),
                yellow_flags: strings(&[
                    "Stress or anxiety",
                    "Sleep disturbance",
                    "Work-related strain",
                ]),
                evidence_level: Some(EvidenceLevel::A),
                references: strings(&[
                    "Jull G, et al. (2019). Management of Neck Pain Disorders",
                    "IFOMPT Cervical Framework (2020)",
                ]),
            },
            DiagnosisDef {
                id: "lumbar-radiculopathy".to_string(),
                name: "Lumbar Radiculopathy".to_string(),
                category: DiagnosisCategory::Msd,
                sub_category: Some(Region::Lumbar),
                description: Some(
                    "Radiating leg pain from compression or irritation of a lumbar nerve root.".to_string(),
                ),
                icf: codes(
                    &["b28015", "b7101", "b7300"],
                    &["s7601", "s7602", "s1201"],
                    &["d4105", "d4153", "d4154"],
                ),
                recommended_assessments: strings(&[
                    "slr-test",
                    "lumbar-flexion",
                    "lumbar-extension",
                    "trunk-flexor-mmt",
                    "oswestry-disability-index",
                    "vas-pain",
                    "sensory-test",
                ]),
                red_flags: strings(&[
                    "Cauda equina symptoms",
                    "Progressive neurological deficit",
                    "Unexplained weight loss",
                    "Bladder or bowel dysfunction",
                ]),
                yellow_flags: strings(&[
                    "Fear-avoidance beliefs about pain",
                    "Low mood",
                    "Low job satisfaction",
                ]),
                evidence_level: Some(EvidenceLevel::A),
                references: strings(&[
                    "APTA Orthopaedic Section Clinical Practice Guidelines, Low Back Pain (2012)",
                    "NICE Guidelines for Low Back Pain and Sciatica (2020)",
                ]),
            },
            DiagnosisDef {
                id: "shoulder-impingement".to_string(),
                name: "Shoulder Impingement Syndrome".to_string(),
                category: DiagnosisCategory::Msd,
                sub_category: Some(Region::Shoulder),
                description: Some(
                    "Compression of the rotator cuff and biceps tendon within the subacromial space.".to_string(),
                ),
                icf: codes(
                    &["b28016", "b7100", "b7200"],
                    &["s7201", "s7208"],
                    &["d4452", "d4454"],
                ),
                recommended_assessments: strings(&[
                    "shoulder-flexion",
                    "shoulder-abduction",
                    "shoulder-external-rotation",
                    "rotator-cuff-mmt",
                    "neer-test",
                    "hawkins-kennedy-test",
                    "empty-can-test",
                    "spadi",
                    "vas-pain",
                ]),
                red_flags: strings(&[
                    "Persistent night pain",
                    "Unexplained weight loss",
                    "History of malignancy",
                ]),
                yellow_flags: strings(&[
                    "Overuse",
                    "Poor working posture",
                    "Stress",
                ]),
                evidence_level: Some(EvidenceLevel::B),
                references: strings(&[
                    "Shoulder Disorders Guideline (2013)",
                    "JOSPT Clinical Practice Guidelines (2018)",
                ]),
            },
            DiagnosisDef {
                id: "knee-osteoarthritis".to_string(),
                name: "Knee Osteoarthritis".to_string(),
                category: DiagnosisCategory::Msd,
                sub_category: Some(Region::Knee),
                description: Some(
                    "Degenerative joint disease of the tibiofemoral or patellofemoral compartments.".to_string(),
                ),
                icf: codes(&["b28016", "b7100", "b7300"], &["s7501", "s75011"], &["d4500", "d4551"]),
                recommended_assessments: strings(&[
                    "knee-flexion",
                    "knee-extension-mmt",
                    "mcmurray-test",
                    "lower-extremity-functional-scale",
                    "vas-pain",
                    "gait-observation",
                ]),
                red_flags: strings(&[
                    "Hot swollen joint with fever",
                    "Sudden inability to bear weight",
                ]),
                yellow_flags: strings(&[
                    "Activity avoidance from fear of damage",
                    "Obesity-related deconditioning",
                ]),
                evidence_level: Some(EvidenceLevel::A),
                references: strings(&[
                    "OARSI Guidelines for the Non-Surgical Management of Knee Osteoarthritis (2019)",
                ]),
            },
            DiagnosisDef {
                id: "lateral-ankle-sprain".to_string(),
                name: "Lateral Ankle Sprain".to_string(),
                category: DiagnosisCategory::Msd,
                sub_category: Some(Region::AnkleFoot),
                description: Some(
                    "Inversion injury of the lateral ligament complex, most often the anterior talofibular ligament.".to_string(),
                ),
                icf: codes(&["b28016", "b7100", "b7601"], &["s7502"], &["d4500", "d4502"]),
                recommended_assessments: strings(&[
                    "ankle-dorsiflexion",
                    "ankle-evertor-mmt",
                    "anterior-drawer-test",
                    "single-leg-stance",
                    "vas-pain",
                ]),
                red_flags: strings(&[
                    "Ottawa ankle rules positive (possible fracture)",
                    "Inability to bear weight for four steps",
                ]),
                yellow_flags: strings(&[
                    "Fear of re-injury",
                    "Early return to sport pressure",
                ]),
                evidence_level: Some(EvidenceLevel::B),
                references: strings(&[
                    "Vuurberg G, et al. Diagnosis, treatment and prevention of ankle sprains: update of an evidence-based clinical guideline. Br J Sports Med. 2018;52(15):956.",
                ]),
            },
        ]
    });
    &DIAGNOSES
}
