//! Recursive-descent parser for Go type declarations.
//!
//! # Recovery
//!
//! The parser always produces declarations; problems are reported as
//! diagnostics next to them.
//!
//! 1. A missing type becomes [`TypeExpr::Bad`] and parsing continues
//! 2. Missing expected tokens emit a diagnostic but don't consume
//! 3. Malformed struct and interface entries skip to the next `;` or `}`
//! 4. Unknown top-level tokens skip to the next declaration keyword
//! 5. Only the first diagnostic at a given offset is kept
//!
//! Function bodies are skipped by brace matching, never parsed.

mod core;
mod decl;
mod types;

#[cfg(test)]
mod decl_tests;

pub use core::{MAX_DEPTH, Parser};

use typeport_core::{Declaration, TypeExpr};

use super::lexer::lex;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::go::syntax_kind::SyntaxKind;

/// Declarations of one source file with the diagnostics found on the way.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    /// Parses a whole file.
    pub fn parse(mut self) -> ParseResult {
        let declarations = self.parse_file();
        ParseResult {
            declarations,
            diagnostics: self.finish(),
        }
    }

    /// Parses a single type expression spanning the whole input.
    pub fn parse_type_only(mut self) -> (TypeExpr, Diagnostics) {
        let ty = self.parse_constraint();
        while self.eat_token(SyntaxKind::Semicolon) {}
        if !self.currently_is(SyntaxKind::Eof) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "after type expression");
        }
        (ty, self.finish())
    }
}

/// Main entry point: parse Go source into declarations.
pub fn parse(source: &str) -> ParseResult {
    Parser::new(source, lex(source)).parse()
}

/// Parses one Go type expression, e.g. `map[string][]*User`.
pub fn parse_type_expr(source: &str) -> (TypeExpr, Diagnostics) {
    Parser::new(source, lex(source)).parse_type_only()
}
