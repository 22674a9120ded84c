use std::path::Path;

use super::input::{InputError, InputFormat, load_source, render_diagnostics};

#[test]
fn format_detection() {
    assert_eq!(InputFormat::detect(Path::new("a.go"), false), InputFormat::Go);
    assert_eq!(InputFormat::detect(Path::new("a.JSON"), false), InputFormat::Json);
    assert_eq!(InputFormat::detect(Path::new("-"), true), InputFormat::Json);
    assert_eq!(InputFormat::detect(Path::new("-"), false), InputFormat::Go);
}

#[test]
fn go_source_keeps_diagnostics() {
    let file = load_source(
        Path::new("models.go"),
        "type A map[string\ntype B int\n".to_string(),
        InputFormat::Go,
    )
    .expect("go input always loads");
    assert!(file.diagnostics.has_errors());
    assert!(!file.declarations.is_empty());

    let rendered = render_diagnostics(&file, false);
    assert!(rendered.contains("models.go"), "{rendered}");
    assert!(rendered.contains("missing closing `]`"), "{rendered}");
}

#[test]
fn json_errors_name_the_file() {
    let Err(err) = load_source(Path::new("-"), "{".to_string(), InputFormat::Json) else {
        panic!("expected JSON error");
    };
    assert!(matches!(err, InputError::Load { .. }));
    assert!(err.to_string().starts_with("<stdin>: invalid declaration JSON"));
}

#[test]
fn redeclared_names_are_warnings_only() {
    let file = load_source(
        Path::new("models.go"),
        "type A int\ntype A string\n".to_string(),
        InputFormat::Go,
    )
    .expect("go input always loads");
    assert!(!file.diagnostics.has_errors());
    assert!(file.diagnostics.has_warnings());

    let rendered = render_diagnostics(&file, false);
    assert!(rendered.starts_with("warning: `A` is declared more than once"), "{rendered}");
    assert!(rendered.contains("first declared here"), "{rendered}");
}
