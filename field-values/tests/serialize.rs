#![cfg(feature = "serde")]

use trillium_field_values::{collect_http_quoted_string, values_of_header_field_value};

#[test]
fn field_values_serialization() {
    assert_eq!(
        serde_json::json!(["1", "\"5\"", "3"]),
        serde_json::to_value(values_of_header_field_value(r#"1,"5",3"#)).unwrap()
    );

    assert_eq!(
        serde_json::json!([]),
        serde_json::to_value(values_of_header_field_value("")).unwrap()
    );
}

#[test]
fn collect_result_serialization() {
    assert_eq!(
        serde_json::json!({ "collected": "Hello", "progression": 7 }),
        serde_json::to_value(collect_http_quoted_string(r#""Hello" World"#)).unwrap()
    );
}
