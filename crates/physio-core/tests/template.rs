use uuid::Uuid;

use physio_core::models::template::{EvaluationTemplate, FieldType, TemplateField};

fn field(key: &str, field_type: FieldType) -> TemplateField {
    TemplateField {
        key: key.to_string(),
        label: key.to_string(),
        field_type,
        unit: None,
        options: Vec::new(),
        required: false,
    }
}

#[test]
fn template_field_order_survives_a_serde_round_trip() {
    let template = EvaluationTemplate {
        id: Uuid::new_v4(),
        name: "Shoulder intake".to_string(),
        description: "Initial shoulder evaluation form".to_string(),
        fields: vec![
            field("pain_level", FieldType::Number),
            field("onset", FieldType::Text),
            field("dominant_side", FieldType::Select),
        ],
        created_at: jiff::Timestamp::now(),
        updated_at: jiff::Timestamp::now(),
    };

    let json = serde_json::to_string_pretty(&template).unwrap();
    let decoded: EvaluationTemplate = serde_json::from_str(&json).unwrap();

    let keys: Vec<&str> = decoded.fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["pain_level", "onset", "dominant_side"]);
    assert_eq!(decoded.fields[2].field_type, FieldType::Select);
}

#[test]
fn template_options_default_to_empty_when_missing() {
    let json = r#"{
        "key": "dominant_side",
        "label": "Dominant side",
        "field_type": "select",
        "unit": null,
        "required": true
    }"#;

    let decoded: TemplateField = serde_json::from_str(json).unwrap();
    assert!(decoded.options.is_empty());
    assert!(decoded.required);
}
