use super::*;

#[test]
fn user_deserializes_from_auth_payload() {
    let user: User = serde_json::from_str(r#"{"id":7,"email":"a@b.com"}"#).unwrap();
    assert_eq!(user, User { id: 7, email: "a@b.com".to_owned() });
}

#[test]
fn credentials_serialize_with_expected_keys() {
    let body = serde_json::to_value(Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn key_summary_ignores_extra_fields() {
    let keys: Vec<ApiKeySummary> = serde_json::from_str(r#"[{"id":1},{"id":2,"paid":5.0}]"#).unwrap();
    assert_eq!(keys, vec![ApiKeySummary { id: 1 }, ApiKeySummary { id: 2 }]);
}

#[test]
fn timed_value_accepts_missing_author() {
    let value: TimedValue = serde_json::from_str(r#"{"author":null,"timestamp":1700000000,"value":true}"#).unwrap();
    assert_eq!(value.author, None);
    assert_eq!(value.value, serde_json::Value::Bool(true));
}

#[test]
fn random_kind_endpoints() {
    assert_eq!(RandomKind::Unsigned.endpoint(), "/random/unsigned");
    assert_eq!(RandomKind::Signed.endpoint(), "/random/signed");
    assert_eq!(RandomKind::Boolean.endpoint(), "/random/boolean");
    assert_eq!(RandomKind::Color(ColorFormat::Hex).endpoint(), "/random/color?format=hex");
}

#[test]
fn random_kind_paths_drop_query() {
    assert_eq!(RandomKind::Color(ColorFormat::Rgb).path(), "/random/color");
    assert_eq!(RandomKind::Unsigned.path(), RandomKind::Unsigned.endpoint());
}

#[test]
fn display_value_unquotes_strings() {
    let hex: TimedValue = serde_json::from_str(r##"{"author":4,"timestamp":1,"value":"#A1B2C3"}"##).unwrap();
    assert_eq!(hex.display_value(), "#A1B2C3");
    let number: TimedValue = serde_json::from_str(r#"{"author":null,"timestamp":1,"value":4294967295}"#).unwrap();
    assert_eq!(number.display_value(), "4294967295");
}

#[test]
fn color_format_parse_rejects_unknown() {
    assert_eq!(ColorFormat::parse("rgb"), Some(ColorFormat::Rgb));
    assert_eq!(ColorFormat::parse("hsl"), None);
}
