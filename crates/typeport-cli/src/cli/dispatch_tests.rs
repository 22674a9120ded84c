//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::args::parse_mapping;
use crate::cli::commands::{check_command, expr_command, gen_command};

#[test]
fn gen_collects_files_and_mappings() {
    let m = gen_command()
        .try_get_matches_from([
            "gen",
            "a.go",
            "b.go",
            "--map",
            "time.Time=Date",
            "--map",
            "uuid.*=string",
            "-o",
            "types.d.ts",
        ])
        .expect("valid args");
    let params = GenParams::from_matches(&m);

    assert_eq!(params.files, vec![PathBuf::from("a.go"), PathBuf::from("b.go")]);
    assert_eq!(
        params.mappings,
        vec![
            ("time.Time".to_string(), "Date".to_string()),
            ("uuid.*".to_string(), "string".to_string()),
        ]
    );
    assert_eq!(params.output, Some(PathBuf::from("types.d.ts")));
    assert_eq!(params.start_modifier, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn gen_start_modifier_flags() {
    let m = gen_command()
        .try_get_matches_from(["gen", "a.go", "--declare"])
        .expect("valid args");
    assert_eq!(
        GenParams::from_matches(&m).start_modifier.as_deref(),
        Some("declare")
    );

    let m = gen_command()
        .try_get_matches_from(["gen", "a.go", "--export"])
        .expect("valid args");
    assert_eq!(
        GenParams::from_matches(&m).start_modifier.as_deref(),
        Some("export")
    );
}

#[test]
fn gen_rejects_export_with_declare() {
    let result = gen_command().try_get_matches_from(["gen", "a.go", "--export", "--declare"]);
    assert!(result.is_err());
}

#[test]
fn gen_requires_files() {
    let result = gen_command().try_get_matches_from(["gen"]);
    assert!(result.is_err());
}

#[test]
fn gen_rejects_malformed_mapping() {
    let result = gen_command().try_get_matches_from(["gen", "a.go", "--map", "Date"]);
    assert!(result.is_err());
}

#[test]
fn mapping_parser() {
    assert_eq!(
        parse_mapping("big.Int = bigint"),
        Ok(("big.Int".to_string(), "bigint".to_string()))
    );
    assert_eq!(
        parse_mapping("Fn=(a: number) => void"),
        Ok(("Fn".to_string(), "(a: number) => void".to_string()))
    );
    assert!(parse_mapping("=string").is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "models.go", "--strict", "--color", "never"])
        .expect("valid args");
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.files, vec![PathBuf::from("models.go")]);
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn expr_params() {
    let m = expr_command()
        .try_get_matches_from(["expr", "[]*time.Time", "--map", "time.Time=Date"])
        .expect("valid args");
    let params = ExprParams::from_matches(&m);
    assert_eq!(params.type_text, "[]*time.Time");
    assert_eq!(params.mappings.len(), 1);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["typeport", "check", "a.go", "-vv"])
        .expect("valid args");
    assert_eq!(m.get_count("verbose"), 2);
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["gen", "check", "expr", "--verbose"] {
        assert!(help.contains(name), "missing {name} in:\n{help}");
    }
}

#[test]
fn mapping_error_message() {
    insta::assert_snapshot!(
        parse_mapping("Date").unwrap_err(),
        @"expected NAME=TS, got `Date`"
    );
}
