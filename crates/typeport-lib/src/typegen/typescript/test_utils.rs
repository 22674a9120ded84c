//! Helpers that go through the Go front end before emitting.

use typeport_core::Declaration;

use super::{Config, Generator, UnknownTypes, WriteOptions};
use crate::go::{parse, parse_type_expr};

fn parse_type_ok(source: &str) -> typeport_core::TypeExpr {
    let (ty, diagnostics) = parse_type_expr(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}:\n{}",
        diagnostics.render(source)
    );
    ty
}

fn parse_decls_ok(source: &str) -> Vec<Declaration> {
    let result = parse(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.diagnostics.render(source)
    );
    result.declarations
}

/// TypeScript for a Go type expression, default config.
pub fn ts(source: &str) -> String {
    ts_with(source, &Config::default(), WriteOptions::NONE).0
}

pub fn ts_opts(source: &str, options: WriteOptions) -> String {
    ts_with(source, &Config::default(), options).0
}

pub fn ts_with(source: &str, config: &Config, options: WriteOptions) -> (String, UnknownTypes) {
    let ty = parse_type_ok(source);
    let mut generator = Generator::new(config.clone());
    let output = generator.emit_type(&ty, options);
    (output, generator.into_unknown_types())
}

/// TypeScript for every declaration of a Go file, default config.
pub fn decls(source: &str) -> String {
    decls_with(source, &Config::default()).0
}

pub fn decls_with(source: &str, config: &Config) -> (String, UnknownTypes) {
    let decls = parse_decls_ok(source);
    let mut generator = Generator::new(config.clone());
    let output = generator.emit_all(&decls);
    (output, generator.into_unknown_types())
}

pub fn count(haystack: &str, c: char) -> usize {
    haystack.chars().filter(|&x| x == c).count()
}
