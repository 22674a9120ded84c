use indoc::indoc;
use typeport_core::{Declaration, Field, TypeExpr};

use crate::diagnostics::DiagnosticKind;
use crate::go::parse;

fn parse_ok(source: &str) -> Vec<Declaration> {
    let result = parse(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.diagnostics.render(source)
    );
    result.declarations
}

fn names(decls: &[Declaration]) -> Vec<&str> {
    decls.iter().map(Declaration::name).collect()
}

#[test]
fn skips_package_imports_vars_and_consts() {
    let source = indoc! {r#"
        package models

        import (
            "fmt"
            "time"
        )

        const Limit = 10

        var (
            x = map[string]int{"a": 1}
        )

        type ID string
    "#};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["ID"]);
}

#[test]
fn type_spec_with_doc_and_line_comment() {
    let source = indoc! {"
        // User is a registered account.
        // It is never deleted.
        type User struct {
            Name string
        } // end of user
    "};

    let decls = parse_ok(source);
    let Declaration::Type(spec) = &decls[0] else {
        panic!("expected type declaration");
    };
    assert_eq!(
        spec.doc.as_ref().map(|d| d.text()),
        Some("User is a registered account.\nIt is never deleted.".into())
    );
    assert_eq!(spec.comment.as_ref().map(|c| c.text()), Some("end of user".into()));
    assert!(matches!(spec.ty, TypeExpr::Struct { .. }));
}

#[test]
fn detached_comment_is_not_doc() {
    let source = indoc! {"
        // Section header.

        type A int
    "};

    let decls = parse_ok(source);
    assert_eq!(decls[0].doc(), None);
}

#[test]
fn grouped_type_specs() {
    let source = indoc! {"
        type (
            // Celsius degrees.
            Celsius float64
            Alias = Celsius
        )
    "};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["Celsius", "Alias"]);
    let Declaration::Type(celsius) = &decls[0] else {
        panic!("expected type declaration");
    };
    assert_eq!(celsius.doc.as_ref().map(|d| d.text()), Some("Celsius degrees.".into()));
    let Declaration::Type(alias) = &decls[1] else {
        panic!("expected type declaration");
    };
    assert!(alias.alias);
    assert_eq!(alias.ty, TypeExpr::ident("Celsius"));
}

#[test]
fn generic_type_params() {
    let source = indoc! {"
        type Pair[K comparable, V any] struct {
            Key K
            Value V
        }

        type Both[A, B any] struct{}

        type Buffer [Size]byte
    "};

    let decls = parse_ok(source);
    let Declaration::Type(pair) = &decls[0] else {
        panic!("expected type declaration");
    };
    assert_eq!(
        pair.type_params,
        vec![
            Field::named("K", TypeExpr::ident("comparable")),
            Field::named("V", TypeExpr::ident("any")),
        ]
    );

    let Declaration::Type(both) = &decls[1] else {
        panic!("expected type declaration");
    };
    assert_eq!(both.type_params.len(), 1);
    assert_eq!(both.type_params[0].names, vec!["A", "B"]);

    let Declaration::Type(buffer) = &decls[2] else {
        panic!("expected type declaration");
    };
    assert!(buffer.type_params.is_empty());
    assert!(matches!(buffer.ty, TypeExpr::Array { .. }));
}

#[test]
fn expression_lengths_are_arrays() {
    let source = indoc! {"
        type Doubled [N * 2]int
        type Next [N+1]int
        type Sized [len(x)]byte
        type Ptr [P *C]int
    "};

    let decls = parse_ok(source);
    let lengths: Vec<_> = decls
        .iter()
        .map(|decl| {
            let Declaration::Type(spec) = decl else {
                panic!("expected type declaration");
            };
            assert!(spec.type_params.is_empty(), "{} has type params", spec.name);
            let TypeExpr::Array { len, .. } = &spec.ty else {
                panic!("{} is not an array", spec.name);
            };
            len.clone().unwrap_or_default()
        })
        .collect();
    assert_eq!(lengths, vec!["N * 2", "N+1", "len(x)", "P *C"]);
}

#[test]
fn constraint_forms_open_type_params() {
    let source = indoc! {"
        type A[P *[]int] struct{}
        type B[P *C,] struct{}
        type C[T ~int | ~string] struct{}
        type D[T interface{ M() }] struct{}
    "};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["A", "B", "C", "D"]);
    for decl in &decls {
        let Declaration::Type(spec) = decl else {
            panic!("expected type declaration");
        };
        assert_eq!(spec.type_params.len(), 1, "{}", spec.name);
    }
}

#[test]
fn constraint_interface() {
    let source = indoc! {"
        type Number interface {
            ~int | ~int64 | float64
        }
    "};

    let decls = parse_ok(source);
    let Declaration::Type(spec) = &decls[0] else {
        panic!("expected type declaration");
    };
    let TypeExpr::Interface { methods } = &spec.ty else {
        panic!("expected interface");
    };
    assert_eq!(methods.len(), 1);
    assert!(matches!(methods[0].ty, TypeExpr::Binary { .. }));
}

#[test]
fn functions_with_bodies() {
    let source = indoc! {"
        // Load reads a file.
        func Load(path string) ([]byte, error) {
            if path == \"\" {
                return nil, nil
            }
            return os.ReadFile(path)
        }

        func Map[T, U any](items []T, f func(T) U) []U {
            return nil
        }
    "};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["Load", "Map"]);

    let Declaration::Func(load) = &decls[0] else {
        panic!("expected func declaration");
    };
    assert_eq!(load.doc.as_ref().map(|d| d.text()), Some("Load reads a file.".into()));
    assert_eq!(load.signature.params, vec![Field::named("path", TypeExpr::ident("string"))]);
    assert_eq!(load.signature.results.len(), 2);

    let Declaration::Func(map) = &decls[1] else {
        panic!("expected func declaration");
    };
    assert_eq!(map.type_params[0].names, vec!["T", "U"]);
    assert_eq!(map.signature.params.len(), 2);
}

#[test]
fn methods_are_skipped() {
    let source = indoc! {"
        func (u *User) Name() string {
            return u.name
        }

        type User struct{}
    "};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["User"]);
}

#[test]
fn recovers_after_bad_declaration() {
    let source = indoc! {"
        type A struct {
            X int
        }

        = oops

        type B string
    "};

    let result = parse(source);
    assert_eq!(names(&result.declarations), vec!["A", "B"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics.iter().next().map(|d| d.kind()),
        Some(DiagnosticKind::ExpectedDeclaration)
    );
}

#[test]
fn unclosed_bracket_points_at_opener() {
    let source = "type A map[string\n";
    let result = parse(source);
    assert_eq!(result.declarations.len(), 1);
    assert_eq!(result.diagnostics.len(), 1);
    let diag = result.diagnostics.iter().next().map(|d| d.to_string());
    insta::assert_snapshot!(
        diag.unwrap_or_default(),
        @"error at 10..17: missing closing `]` (related: opened here at 10..11)"
    );
}

#[test]
fn unreadable_characters_are_named() {
    let source = "type A @#\n";
    let result = parse(source);
    assert_eq!(names(&result.declarations), vec!["A"]);
    assert_eq!(result.diagnostics.len(), 1);
    let diag = result.diagnostics.iter().next().map(|d| d.to_string());
    insta::assert_snapshot!(
        diag.unwrap_or_default(),
        @"error at 7..9: unexpected characters; `@#`"
    );
}

#[test]
fn duplicate_names_warn() {
    let source = "type User string\nfunc User() {}\n";
    let result = parse(source);
    assert_eq!(names(&result.declarations), vec!["User", "User"]);
    assert!(!result.diagnostics.has_errors());
    assert_eq!(result.diagnostics.warning_count(), 1);
    let diag = result.diagnostics.iter().next().map(|d| d.to_string());
    insta::assert_snapshot!(
        diag.unwrap_or_default(),
        @"warning at 22..26: `User` is declared more than once (related: first declared here at 5..9)"
    );
}

#[test]
fn blank_names_and_init_may_repeat() {
    let source = indoc! {"
        type _ int
        type _ string

        func init() {}
        func init() {}
    "};

    let decls = parse_ok(source);
    assert_eq!(names(&decls), vec!["_", "_", "init", "init"]);
}
