use indoc::indoc;
use typeport_core::{Declaration, TypeExpr};

use crate::{Error, load_json, parse};

#[test]
fn parse_returns_declarations() {
    let decls = parse("package a\n\ntype ID string\n").expect("valid Go");
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name(), "ID");
}

#[test]
fn parse_fails_on_errors() {
    let source = "type A struct {\n\tX int\n";
    let Err(Error::ParseFailed(diagnostics)) = parse(source) else {
        panic!("expected parse failure");
    };
    let count = diagnostics.error_count();
    assert!(count >= 1);
    assert_eq!(
        Error::ParseFailed(diagnostics).to_string(),
        format!("Go parsing failed with {count} errors")
    );
}

#[test]
fn load_json_declarations() {
    let json = indoc! {r#"
        [
          {
            "decl": "type",
            "name": "Tags",
            "type": { "kind": "array", "elem": { "kind": "ident", "name": "string" } }
          }
        ]
    "#};
    let decls = load_json(json).expect("valid JSON");
    let Declaration::Type(spec) = &decls[0] else {
        panic!("expected type declaration");
    };
    assert_eq!(spec.ty, TypeExpr::slice(TypeExpr::ident("string")));
}

#[test]
fn load_json_reports_invalid_input() {
    let err = load_json("[{\"decl\": \"type\"}]").expect_err("missing fields");
    assert!(matches!(err, Error::InvalidJson(_)));
    assert!(err.to_string().starts_with("invalid declaration JSON: missing field"));
}
