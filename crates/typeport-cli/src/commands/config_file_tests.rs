use typeport_lib::typegen::typescript::{CaseStyle, Generator, WriteOptions};
use typeport_core::TypeExpr;

use super::config_file::FileConfig;

#[test]
fn empty_object_is_default() {
    let config = FileConfig::from_json("{}").expect("valid config");
    assert_eq!(config.indent, None);
    assert_eq!(config.field_names, CaseStyle::Unchanged);
    assert!(config.type_mappings.is_empty());
    assert!(!config.dict_type);
}

#[test]
fn full_config() {
    let config = FileConfig::from_json(
        r#"{
            "indent": "\t",
            "start_modifier": "declare",
            "type_mappings": { "time.Time": "Date" },
            "field_names": "camel_case",
            "method_names": "lower_first",
            "heading": "declare var $app: any;",
            "dict_type": true
        }"#,
    )
    .expect("valid config");
    assert_eq!(config.indent.as_deref(), Some("\t"));
    assert_eq!(config.method_names, CaseStyle::LowerFirst);
    assert_eq!(config.type_mappings.get("time.Time"), Some("Date"));
    assert!(config.dict_type);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = FileConfig::from_json(r#"{ "indnet": "  " }"#).expect_err("unknown field");
    assert!(err.to_string().contains("unknown field `indnet`"));
}

#[test]
fn flags_override_file() {
    let mut config = FileConfig::from_json(
        r#"{ "indent": "\t", "type_mappings": { "time.Time": "Date", "big.Int": "bigint" } }"#,
    )
    .expect("valid config");
    config.apply_flags(
        &[("time.Time".to_string(), "string".to_string())],
        Some("  "),
        Some("export"),
    );

    let mut generator = Generator::new(config.to_config());
    let output = generator.emit_type(
        &TypeExpr::slice(TypeExpr::selector("time", "Time")),
        WriteOptions::NONE,
    );
    assert_eq!(output, "Array<string>");
    assert_eq!(config.indent.as_deref(), Some("  "));
    assert_eq!(config.start_modifier.as_deref(), Some("export"));
    assert_eq!(config.type_mappings.len(), 2);
}
