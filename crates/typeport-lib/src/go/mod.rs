//! Go front end: lexes and parses the type declarations of a Go file into
//! [`typeport_core`] trees.

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

#[cfg(test)]
mod lexer_tests;

pub use lexer::{Token, lex, token_text};
pub use parser::{ParseResult, Parser, parse, parse_type_expr};
pub use syntax_kind::SyntaxKind;
