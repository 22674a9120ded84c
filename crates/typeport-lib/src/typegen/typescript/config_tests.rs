use super::{CaseStyle, Config, NameFormatter, TypeMapper, TypeMappings};

#[test]
fn case_styles() {
    assert_eq!(CaseStyle::Unchanged.format_name("UserID"), "UserID");
    assert_eq!(CaseStyle::LowerFirst.format_name("UserID"), "userID");
    assert_eq!(CaseStyle::CamelCase.format_name("HTTPServer"), "httpServer");
    assert_eq!(CaseStyle::SnakeCase.format_name("UserID"), "user_id");
    assert_eq!(CaseStyle::PascalCase.format_name("user_id"), "UserId");
}

#[test]
fn case_style_from_str() {
    assert_eq!("camel".parse::<CaseStyle>(), Ok(CaseStyle::CamelCase));
    assert_eq!("lower-first".parse::<CaseStyle>(), Ok(CaseStyle::LowerFirst));
    assert_eq!(
        "kebab".parse::<CaseStyle>(),
        Err("unknown case style `kebab`".to_string())
    );
}

#[test]
fn case_style_serde_names() {
    let style: CaseStyle = serde_json::from_str("\"snake_case\"").expect("valid style");
    assert_eq!(style, CaseStyle::SnakeCase);
}

#[test]
fn mappings_extend_overrides() {
    let mut base = TypeMappings::from_iter([("time.Time", "Date"), ("uuid.UUID", "string")]);
    base.extend(TypeMappings::from_iter([("time.Time", "string")]));
    assert_eq!(base.len(), 2);
    assert_eq!(base.map_type("time.Time"), Some("string".to_string()));
    assert_eq!(base.map_type("missing"), None);
}

#[test]
fn mappings_deserialize_from_object() {
    let mappings: TypeMappings =
        serde_json::from_str(r#"{"json.RawMessage": "any", "big.Int": "bigint"}"#)
            .expect("valid mappings");
    assert_eq!(mappings.get("big.Int"), Some("bigint"));
}

#[test]
fn empty_start_modifier_clears() {
    let config = Config::new().start_modifier("export").start_modifier("");
    assert_eq!(config.start_modifier, None);
}

#[test]
fn debug_hides_trait_objects() {
    let config = Config::new().indent("\t").field_name_formatter(CaseStyle::CamelCase);
    insta::assert_snapshot!(
        format!("{config:?}"),
        @r#"Config { indent: "\t", start_modifier: None, field_name_formatter: true, method_name_formatter: false, max_depth: 128, .. }"#
    );
}

#[test]
fn config_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
}
